use crate::integration::common::{self, ACCESS_TOKEN, ok_body, wire_record};
use chrono::NaiveDate;
use kis_client::prelude::*;
use kis_client::constants::{paths, tr_ids};
use mockito::{Matcher, Server};
use rust_decimal_macros::dec;
use serde_json::json;
use tokio_test::block_on;

#[test]
fn test_get_oversea_quote() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_QUOTE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("AUTH".into(), "".into()),
            Matcher::UrlEncoded("EXCD".into(), "NAS".into()),
            Matcher::UrlEncoded("SYMB".into(), "AAPL".into()),
        ]))
        .match_header("tr_id", tr_ids::OVERSEA_QUOTE)
        .match_header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str())
        .match_header("appsecret", "test_app_secret")
        .match_header("custtype", "P")
        .with_status(200)
        .with_body(ok_body(json!({
            "output": wire_record(
                OverseaQuote::schema(),
                &[("rsym", "DNASAAPL"), ("last", "187.4400"), ("zdiv", "4")],
            )
        })))
        .create();

    let client = common::create_test_client(&server.url());
    let response = block_on(client.get_oversea_quote("AAPL", PriceMarketCode::Nasdaq)).unwrap();

    assert_eq!(response.quote.symbol, "DNASAAPL");
    assert_eq!(response.quote.last, dec!(187.44));
    assert_eq!(response.quote.decimal_places, 4);
    mock.assert();
}

#[test]
fn test_get_domestic_daily_prices() {
    let mut server = Server::new();
    let rows = vec![
        wire_record(DomesticDailyPrice::schema(), &[("stck_bsop_date", "20240105"), ("acml_vol", "1200")]),
        wire_record(DomesticDailyPrice::schema(), &[("stck_bsop_date", "20240104")]),
    ];
    let mock = server
        .mock("GET", paths::DOMESTIC_DAILY_PRICE)
        .match_query(Matcher::UrlEncoded("FID_INPUT_ISCD".into(), "005930".into()))
        .match_header("tr_id", tr_ids::DOMESTIC_DAILY_PRICE)
        .with_status(200)
        .with_body(ok_body(json!({ "output": rows })))
        .create();

    let client = common::create_test_client(&server.url());
    let response = block_on(client.get_domestic_daily_prices("005930")).unwrap();

    assert_eq!(response.prices.len(), 2);
    assert_eq!(response.prices[0].volume, 1200);
    mock.assert();
}

#[test]
fn test_broker_error_is_surfaced() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_QUOTE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"rt_cd":"1","msg_cd":"EGW00123","msg1":"기간이 만료된 token 입니다."}"#)
        .create();

    let client = common::create_test_client(&server.url());
    match block_on(client.get_oversea_quote("AAPL", PriceMarketCode::Nasdaq)).unwrap_err() {
        AppError::Broker {
            return_code,
            message_code,
            ..
        } => {
            assert_eq!(return_code, "1");
            assert_eq!(message_code, "EGW00123");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert();
}

#[test]
fn test_http_failure_is_not_retried() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_QUOTE)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create();

    let client = common::create_test_client(&server.url());
    let err = block_on(client.get_oversea_quote("AAPL", PriceMarketCode::Nasdaq)).unwrap_err();
    assert!(err.is_transport());
    mock.assert();
}

#[test]
fn test_non_json_body_is_schema_error() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", paths::OVERSEA_QUOTE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    let client = common::create_test_client(&server.url());
    match block_on(client.get_oversea_quote("AAPL", PriceMarketCode::Nasdaq)).unwrap_err() {
        AppError::SchemaValidation { path, raw } => {
            assert_eq!(path, "$");
            assert!(raw.contains("maintenance"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert();
}

fn daily_page(dates: &[&str]) -> String {
    let rows: Vec<_> = dates
        .iter()
        .map(|d| wire_record(OverseaDailyPrice::schema(), &[("xymd", d), ("clos", "100")]))
        .collect();
    ok_body(json!({
        "output1": wire_record(OverseaTicker::schema(), &[("rsym", "DNASTSLA")]),
        "output2": rows,
    }))
}

#[test]
fn test_price_series_walks_back_to_start_date() {
    let mut server = Server::new();
    let first = server
        .mock("GET", paths::OVERSEA_DAILY_PRICE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("SYMB".into(), "TSLA".into()),
            Matcher::UrlEncoded("BYMD".into(), "".into()),
        ]))
        .with_status(200)
        .with_body(daily_page(&["20240110", "20240109", "20240108"]))
        .create();
    let second = server
        .mock("GET", paths::OVERSEA_DAILY_PRICE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("SYMB".into(), "TSLA".into()),
            Matcher::UrlEncoded("BYMD".into(), "20240108".into()),
        ]))
        .with_status(200)
        .with_body(daily_page(&["20240108", "20240107", "20240106", "20240105"]))
        .create();

    let client = common::create_test_client(&server.url());
    let start = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let series = block_on(client.get_oversea_price_series("TSLA", PriceMarketCode::Nasdaq, start, None))
        .unwrap();

    let dates: Vec<_> = series.iter().map(|p| p.base_date.as_str()).collect();
    assert_eq!(dates, vec!["20240110", "20240109", "20240108", "20240107", "20240106"]);
    first.assert();
    second.assert();
}
