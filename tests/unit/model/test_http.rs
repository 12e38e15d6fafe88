use kis_client::constants::{CONTENT_TYPE, headers, paths};
use kis_client::error::AppError;
use kis_client::model::http::{HeaderSet, HttpVerb, build_request, join_url};
use kis_client::model::requests::{OverseaQuotePayload, Payload};
use kis_client::presentation::market::PriceMarketCode;
use serde_json::{Map, json};

const HOST: &str = "https://openapi.example.com:9443";

#[test]
fn test_default_headers() {
    let set = HeaderSet::new(" key ", "secret", "P");
    assert_eq!(set.get(headers::CONTENT_TYPE), Some(CONTENT_TYPE));
    assert_eq!(set.get("AppKey"), Some("key"));
    assert_eq!(set.get(headers::APP_SECRET), Some("secret"));
    assert_eq!(set.get(headers::CUSTOMER_TYPE), Some("P"));
    assert_eq!(set.len(), 4);
}

#[test]
fn test_bearer_and_tr_id() {
    let set = HeaderSet::new("k", "s", "P")
        .with_tr_id(Some("HHDFS00000300"))
        .with_bearer(Some("abc"));
    assert_eq!(set.get(headers::AUTHORIZATION), Some("Bearer abc"));
    assert_eq!(set.get(headers::TR_ID), Some("HHDFS00000300"));

    let bare = HeaderSet::new("k", "s", "P").with_tr_id(None).with_bearer(Some(""));
    assert!(bare.get(headers::AUTHORIZATION).is_none());
    assert!(bare.get(headers::TR_ID).is_none());
}

#[test]
fn test_extra_headers_override() {
    let set = HeaderSet::new("k", "s", "P").extend([("custtype", "B"), ("tr_cont", "N")]);
    assert_eq!(set.get(headers::CUSTOMER_TYPE), Some("B"));
    assert_eq!(set.get(headers::TR_CONT), Some("N"));
}

#[test]
fn test_get_request_encodes_query() {
    let payload = OverseaQuotePayload::new("BRK/B", PriceMarketCode::Nyse).unwrap();
    let request = build_request(
        HOST,
        OverseaQuotePayload::METHOD,
        OverseaQuotePayload::URL_PATH,
        &payload.to_wire().unwrap(),
        HeaderSet::default(),
    )
    .unwrap();
    assert_eq!(request.verb, HttpVerb::Get);
    assert_eq!(request.url.path(), paths::OVERSEA_QUOTE);
    assert!(request.body.is_none());
    let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("SYMB".to_string(), "BRK/B".to_string())));
    assert!(pairs.contains(&("EXCD".to_string(), "NYS".to_string())));
    assert!(pairs.iter().all(|(k, _)| k != "tr_id"));
}

#[test]
fn test_post_request_has_json_body() {
    let mut wire = Map::new();
    wire.insert("PDNO".into(), json!("AAPL"));
    let request = build_request(HOST, HttpVerb::Post, paths::OVERSEA_ORDER, &wire, HeaderSet::default())
        .unwrap();
    assert_eq!(request.body, Some(json!({"PDNO": "AAPL"})));
    assert!(request.url.query().is_none());
}

#[test]
fn test_invalid_host() {
    assert!(matches!(join_url("not a url", "/x"), Err(AppError::InvalidUrl(_))));
}
