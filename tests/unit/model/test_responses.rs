use crate::unit::fixtures::{ok_body, wire_record};
use kis_client::error::{AppError, MISSING_VALUE};
use kis_client::model::pagination::Continuation;
use kis_client::model::responses::{
    ApiResponse, DomesticBalanceResponse, DomesticDailyPriceResponse, OrderResponse,
    OverseaBalanceResponse, OverseaDailyPriceResponse, OverseaOrderHistoryResponse,
};
use kis_client::model::schema::WireRecord;
use kis_client::presentation::account::{
    DomesticBalanceSummary, DomesticHolding, OverseaBalanceSummary, OverseaHolding,
};
use kis_client::presentation::market::{DomesticDailyPrice, OverseaDailyPrice, OverseaTicker};
use kis_client::presentation::order::OverseaOrderHistoryRow;
use rust_decimal_macros::dec;
use serde_json::json;

fn oversea_balance(holdings: &[(&str, &str)], total: &str) -> OverseaBalanceResponse {
    let rows: Vec<_> = holdings
        .iter()
        .map(|(symbol, eval)| {
            wire_record(
                OverseaHolding::schema(),
                &[("ovrs_pdno", symbol), ("ovrs_stck_evlu_amt", eval)],
            )
        })
        .collect();
    let body = ok_body(json!({
        "output1": rows,
        "output2": wire_record(OverseaBalanceSummary::schema(), &[("tot_evlu_pfls_amt", total)]),
        "ctx_area_fk200": "12345678^01^",
        "ctx_area_nk200": "",
    }));
    OverseaBalanceResponse::parse(body, Continuation::Done).unwrap()
}

#[test]
fn test_union_section_list_equals_object() {
    let summary = wire_record(DomesticBalanceSummary::schema(), &[("dnca_tot_amt", "1500000")]);
    let holding = wire_record(DomesticHolding::schema(), &[("pdno", "005930")]);

    let as_object = ok_body(json!({"output1": [holding], "output2": summary}));
    let as_list = ok_body(json!({"output1": [holding], "output2": [summary]}));

    let a = DomesticBalanceResponse::parse(as_object, Continuation::Done).unwrap();
    let b = DomesticBalanceResponse::parse(as_list, Continuation::Done).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.balance.deposit, 1_500_000);
    assert_eq!(a.holdings[0].symbol, "005930");
}

#[test]
fn test_status_message_is_trimmed() {
    let summary = wire_record(DomesticBalanceSummary::schema(), &[]);
    let body = ok_body(json!({"output1": [], "output2": summary}));
    let response = DomesticBalanceResponse::parse(body, Continuation::Done).unwrap();
    assert_eq!(response.status.message, "정상처리 되었습니다.");
    assert!(response.status.is_success());
}

#[test]
fn test_broker_failure_reports_codes() {
    let body = json!({"rt_cd": "1", "msg_cd": "EGW00201", "msg1": "초당 거래건수를 초과하였습니다."});
    match DomesticDailyPriceResponse::parse(body, Continuation::Unknown).unwrap_err() {
        AppError::Broker {
            return_code,
            message_code,
            ..
        } => {
            assert_eq!(return_code, "1");
            assert_eq!(message_code, "EGW00201");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_field_reports_indexed_path() {
    let mut bad = wire_record(DomesticDailyPrice::schema(), &[]);
    bad.as_object_mut().unwrap().remove("stck_clpr");
    let good = wire_record(DomesticDailyPrice::schema(), &[]);
    let body = ok_body(json!({"output": [good, bad]}));
    match DomesticDailyPriceResponse::parse(body, Continuation::Unknown).unwrap_err() {
        AppError::SchemaValidation { path, raw } => {
            assert_eq!(path, "output[1].stck_clpr");
            assert_eq!(raw, MISSING_VALUE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_decimal_reports_raw_value() {
    let price = wire_record(DomesticDailyPrice::schema(), &[("stck_oprc", "12a00")]);
    let body = ok_body(json!({"output": [price]}));
    match DomesticDailyPriceResponse::parse(body, Continuation::Unknown).unwrap_err() {
        AppError::SchemaValidation { path, raw } => {
            assert_eq!(path, "output[0].stck_oprc");
            assert_eq!(raw, "12a00");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_daily_price_drops_blank_rows() {
    let filled = wire_record(
        OverseaDailyPrice::schema(),
        &[("xymd", "20240105"), ("clos", "181.18")],
    );
    let blank = wire_record(
        OverseaDailyPrice::schema(),
        &[("xymd", ""), ("clos", ""), ("open", ""), ("high", ""), ("low", "")],
    );
    let body = ok_body(json!({
        "output1": wire_record(OverseaTicker::schema(), &[("rsym", "DNASAAPL"), ("nrec", "")]),
        "output2": [filled, blank],
    }));
    let response = OverseaDailyPriceResponse::parse(body, Continuation::Unknown).unwrap();
    assert_eq!(response.prices.len(), 1);
    assert_eq!(response.prices[0].close, Some(dec!(181.18)));
    assert_eq!(response.ticker.records, None);
    assert_eq!(response.oldest_date(), Some("20240105"));
}

#[test]
fn test_weights_sorted_and_rounded() {
    let balance = oversea_balance(&[("AAPL", "300"), ("MSFT", "600"), ("TSLA", "100")], "1000");
    let weights = balance.weights(true);
    let symbols: Vec<_> = weights.iter().map(|w| w.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["MSFT", "AAPL", "TSLA"]);
    assert_eq!(weights[0].weight, dec!(0.6));

    let ascending = balance.weights(false);
    assert_eq!(ascending[0].symbol, "TSLA");
}

#[test]
fn test_weights_with_zero_total() {
    let balance = oversea_balance(&[("AAPL", "300")], "0");
    assert_eq!(balance.weights(true)[0].weight, dec!(0));
}

#[test]
fn test_balance_table_lists_holdings() {
    let balance = oversea_balance(&[("AAPL", "300")], "300");
    let rendered = balance.to_string();
    assert!(rendered.contains("SYMBOL"));
    assert!(rendered.contains("AAPL"));
    assert!(rendered.contains("total eval: 300"));
}

#[test]
fn test_cursor_is_trimmed() {
    let balance = oversea_balance(&[], "0");
    assert_eq!(balance.cursor.search_key, "12345678^01^");
    assert_eq!(balance.cursor.next_key, "");
}

#[test]
fn test_history_continuation_helpers() {
    let row = wire_record(OverseaOrderHistoryRow::schema(), &[("odno", " 0030123456 ")]);
    let body = ok_body(json!({"output": [row], "ctx_area_fk200": "", "ctx_area_nk200": "NK"}));
    let response = OverseaOrderHistoryResponse::parse(body, Continuation::More).unwrap();
    assert!(response.has_next());
    assert!(!response.is_last());
    assert_eq!(response.history[0].order_no, "0030123456");
}

#[test]
fn test_order_ack_from_list() {
    let body = ok_body(json!({"output": [{
        "KRX_FWDG_ORD_ORGNO": "01790",
        "ODNO": "0000117057",
        "ORD_TMD": "103215"
    }]}));
    let response = OrderResponse::parse(body, Continuation::Unknown).unwrap();
    assert_eq!(response.ack.order_no, "0000117057");
}
