use crate::integration::common::{self, ok_body, wire_record};
use kis_client::constants::{MAX_PAGES, headers, paths, tr_ids};
use kis_client::prelude::*;
use mockito::{Matcher, Server};
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tokio_test::block_on;

fn holdings(symbols: &[(&str, &str)]) -> Vec<Value> {
    symbols
        .iter()
        .map(|(symbol, eval)| {
            wire_record(
                OverseaHolding::schema(),
                &[("ovrs_pdno", symbol), ("ovrs_stck_evlu_amt", eval)],
            )
        })
        .collect()
}

fn balance_page(rows: Vec<Value>, next_key: &str) -> String {
    ok_body(json!({
        "output1": rows,
        "output2": wire_record(OverseaBalanceSummary::schema(), &[("tot_evlu_pfls_amt", "1000")]),
        "ctx_area_fk200": "12345678^01^NASD^",
        "ctx_area_nk200": next_key,
    }))
}

#[test]
fn test_oversea_balance_follows_continuation() {
    let mut server = Server::new();
    let first = server
        .mock("GET", paths::OVERSEA_BALANCE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("CANO".into(), "12345678".into()),
            Matcher::UrlEncoded("OVRS_EXCG_CD".into(), "NASD".into()),
            Matcher::UrlEncoded("CTX_AREA_NK200".into(), "".into()),
        ]))
        .match_header("tr_id", tr_ids::OVERSEA_BALANCE)
        .match_header(headers::TR_CONT, Matcher::Missing)
        .with_status(200)
        .with_header("tr_cont", "M")
        .with_body(balance_page(holdings(&[("AAPL", "300"), ("MSFT", "600")]), "PAGE2"))
        .create();
    let second = server
        .mock("GET", paths::OVERSEA_BALANCE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("CTX_AREA_FK200".into(), "12345678^01^NASD^".into()),
            Matcher::UrlEncoded("CTX_AREA_NK200".into(), "PAGE2".into()),
        ]))
        .match_header(headers::TR_CONT, "N")
        .with_status(200)
        .with_header("tr_cont", "D")
        .with_body(balance_page(holdings(&[("TSLA", "100")]), ""))
        .create();

    let client = common::create_test_client(&server.url());
    let balance = block_on(client.get_oversea_balance(OrderMarketCode::Nasdaq)).unwrap();

    let symbols: Vec<_> = balance.holdings.iter().map(|h| h.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
    assert_eq!(balance.continuation, Continuation::Done);
    first.assert();
    second.assert();
}

#[test]
fn test_missing_marker_stops_after_one_page() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_BALANCE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(balance_page(holdings(&[("AAPL", "300")]), "IGNORED"))
        .expect(1)
        .create();

    let client = common::create_test_client(&server.url());
    let balance = block_on(client.get_oversea_balance(OrderMarketCode::Nasdaq)).unwrap();
    assert_eq!(balance.holdings.len(), 1);
    mock.assert();
}

#[test]
fn test_pagination_is_bounded() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_BALANCE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("tr_cont", "M")
        .with_body(balance_page(holdings(&[("AAPL", "300")]), "AGAIN"))
        .expect(MAX_PAGES)
        .create();

    let client = common::create_test_client(&server.url());
    let balance = block_on(client.get_oversea_balance(OrderMarketCode::Nasdaq)).unwrap();
    assert_eq!(balance.holdings.len(), MAX_PAGES);
    mock.assert();
}

#[test]
fn test_oversea_weights() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_BALANCE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("tr_cont", "D")
        .with_body(balance_page(holdings(&[("AAPL", "300"), ("MSFT", "700")]), ""))
        .create();

    let client = common::create_test_client(&server.url());
    let weights = block_on(client.get_oversea_weights(OrderMarketCode::Nasdaq, true)).unwrap();
    assert_eq!(weights[0].symbol, "MSFT");
    assert_eq!(weights[1].weight, dec!(0.3));
    mock.assert();
}

#[test]
fn test_domestic_balance_union_output() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::DOMESTIC_BALANCE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("CANO".into(), "12345678".into()),
            Matcher::UrlEncoded("INQR_DVSN".into(), "01".into()),
            Matcher::UrlEncoded("CTX_AREA_NK100".into(), "".into()),
        ]))
        .match_header("tr_id", tr_ids::DOMESTIC_BALANCE)
        .with_status(200)
        .with_header("tr_cont", "D")
        .with_body(ok_body(json!({
            "output1": [wire_record(DomesticHolding::schema(), &[("pdno", "005930"), ("prdt_name", "삼성전자  ")])],
            "output2": [wire_record(DomesticBalanceSummary::schema(), &[("dnca_tot_amt", "2500000")])],
            "ctx_area_fk100": "",
            "ctx_area_nk100": "",
        })))
        .create();

    let client = common::create_test_client(&server.url());
    let balance = block_on(client.get_domestic_balance()).unwrap();
    assert_eq!(balance.holdings[0].name, "삼성전자");
    assert_eq!(balance.balance.deposit, 2_500_000);
    assert!(balance.to_string().contains("005930"));
    mock.assert();
}

#[test]
fn test_account_number_is_required() {
    let server = Server::new();
    let config = Config::with_credentials(&server.url(), "k", "s");
    let client = Client::new(config).unwrap();
    let err = block_on(client.get_unexecuted_orders(OrderMarketCode::Nasdaq)).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_order_history_range_is_checked_before_sending() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_ORDER_HISTORY)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = common::create_test_client(&server.url());
    let start = chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let err = block_on(client.get_order_history(start, end)).unwrap_err();
    assert!(err.is_validation());
    mock.assert();
}
