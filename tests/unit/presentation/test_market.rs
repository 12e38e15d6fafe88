use kis_client::error::AppError;
use kis_client::presentation::market::{OrderMarketCode, PriceMarketCode};
use std::str::FromStr;

#[test]
fn test_price_codes() {
    assert_eq!(PriceMarketCode::Nasdaq.as_str(), "NAS");
    assert_eq!(PriceMarketCode::from_str("AMS").unwrap(), PriceMarketCode::Amex);
    assert_eq!(PriceMarketCode::Nyse.to_string(), "NYS");
}

#[test]
fn test_order_codes() {
    assert_eq!(OrderMarketCode::Nasdaq.as_str(), "NASD");
    assert_eq!(OrderMarketCode::from_str("NYSE").unwrap(), OrderMarketCode::Nyse);
}

#[test]
fn test_venue_is_shared_between_enumerations() {
    for (price, order) in [
        (PriceMarketCode::Nyse, OrderMarketCode::Nyse),
        (PriceMarketCode::Nasdaq, OrderMarketCode::Nasdaq),
        (PriceMarketCode::Amex, OrderMarketCode::Amex),
    ] {
        assert_eq!(price.venue(), order.venue());
        assert_ne!(price.as_str(), order.as_str());
    }
}

#[test]
fn test_mixing_up_code_families_is_flagged() {
    match OrderMarketCode::from_str("NAS").unwrap_err() {
        AppError::Validation { field, constraint } => {
            assert_eq!(field, "market_code");
            assert!(constraint.contains("pricing venue"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(PriceMarketCode::from_str("NASD").is_err());
    assert!(PriceMarketCode::from_str("XXX").is_err());
}

#[test]
fn test_codes_serialize_as_wire_values() {
    assert_eq!(serde_json::to_string(&OrderMarketCode::Amex).unwrap(), "\"AMEX\"");
    assert_eq!(serde_json::to_string(&PriceMarketCode::Amex).unwrap(), "\"AMS\"");
}
