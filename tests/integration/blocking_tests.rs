use crate::integration::common::{ACCESS_TOKEN, create_test_config, ok_body, wire_record};
use kis_client::constants::paths;
use kis_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[test]
fn test_blocking_issue_token_and_quote() {
    let mut server = Server::new();
    let token = server
        .mock("POST", paths::ISSUE_TOKEN)
        .with_status(200)
        .with_body(r#"{"access_token":"abc","token_type":"Bearer","expires_in":86400}"#)
        .create();
    let quote = server
        .mock("GET", paths::OVERSEA_QUOTE)
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(ok_body(json!({"output": wire_record(OverseaQuote::schema(), &[])})))
        .create();

    let client = BlockingClient::new(create_test_config(&server.url())).unwrap();
    let issued = client.issue_token().unwrap();
    let client = client.with_access_token(issued.access_token);

    let payload = OverseaQuotePayload::new("AAPL", PriceMarketCode::Nasdaq).unwrap();
    let response = client.send(&payload).unwrap();
    assert_eq!(response.quote.symbol, "X");
    token.assert();
    quote.assert();
}

#[test]
fn test_blocking_send_with_explicit_token() {
    let mut server = Server::new();
    let quote = server
        .mock("GET", paths::OVERSEA_QUOTE)
        .match_query(Matcher::Any)
        .match_header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str())
        .match_header("custtype", "B")
        .with_status(200)
        .with_body(ok_body(json!({"output": wire_record(OverseaQuote::schema(), &[])})))
        .create();

    let client = BlockingClient::new(create_test_config(&server.url())).unwrap();
    let payload = OverseaQuotePayload::new("AAPL", PriceMarketCode::Nasdaq).unwrap();
    client
        .send_with(&payload, Some(ACCESS_TOKEN), &[("custtype", "B")])
        .unwrap();
    quote.assert();
}
