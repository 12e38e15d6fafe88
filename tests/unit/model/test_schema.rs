use kis_client::error::AppError;
use kis_client::model::pagination::Cursor;
use kis_client::model::requests::{
    DomesticBalancePayload, OrderFields, OverseaAskPayload, OverseaBalancePayload,
    OverseaBidPayload, OverseaChangeOrderPayload, OverseaDailyPricePayload,
    OverseaOrderHistoryPayload, OverseaQuotePayload, Paginated, Payload,
};
use kis_client::model::schema::{AliasTable, FieldSpec};
use kis_client::model::validation::Rule;
use kis_client::presentation::market::{OrderMarketCode, PriceMarketCode, PricePeriod};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::{Map, Value, json};

fn assert_round_trip<P: Payload>(payload: &P) {
    let table = P::schema();
    let semantic = payload.to_semantic().unwrap();
    let wire = payload.to_wire().unwrap();
    let back = table.from_wire("", &wire).unwrap();

    let mut expected = table.with_defaults(&semantic);
    for field in table.fields().iter().filter(|f| f.exclude) {
        expected.remove(field.name);
    }
    assert_eq!(back, expected, "round trip of {}", table.name());
}

fn order() -> OrderFields {
    OrderFields::new("1234567801", OrderMarketCode::Nasdaq, "AAPL", dec!(3), dec!(187.50))
        .unwrap()
        .with_contact_phone("01012345678")
}

#[test]
fn test_round_trip_restores_semantic_fields() {
    assert_round_trip(&DomesticBalancePayload::new("12345678").unwrap());
    assert_round_trip(
        &OverseaDailyPricePayload::new("TSLA", PriceMarketCode::Nasdaq)
            .unwrap()
            .with_period(PricePeriod::Weekly)
            .with_base_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
    );
    assert_round_trip(
        &OverseaOrderHistoryPayload::new(
            "12345678",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap(),
    );
    assert_round_trip(&OverseaBidPayload::new(order()).unwrap());
    assert_round_trip(&OverseaAskPayload::new(order()).unwrap());
    assert_round_trip(&OverseaChangeOrderPayload::cancel(order(), "0030123456").unwrap());
}

#[test]
fn test_decimal_precision_survives_the_wire() {
    let wire = OverseaBidPayload::new(order()).unwrap().to_wire().unwrap();
    assert_eq!(wire["OVRS_ORD_UNPR"], json!("187.50"));
    assert_eq!(wire["ORD_QTY"], json!("3"));
}

static SAMPLE: AliasTable = AliasTable::new(
    "sample",
    &[
        FieldSpec::text("symbol", "PDNO"),
        FieldSpec::text("market", "EXCD").or("NAS"),
    ],
);

#[test]
fn test_unknown_semantic_field_is_rejected() {
    let mut semantic = Map::new();
    semantic.insert("symbol".into(), json!("AAPL"));
    semantic.insert("colour".into(), json!("red"));
    match SAMPLE.to_wire(&semantic).unwrap_err() {
        AppError::Validation { field, .. } => assert_eq!(field, "colour"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_wire_key_is_ignored() {
    let mut wire = Map::new();
    wire.insert("PDNO".into(), json!("AAPL"));
    wire.insert("NEW_FIELD".into(), json!("1"));
    let semantic = SAMPLE.from_wire("output", &wire).unwrap();
    assert_eq!(semantic.get("market"), Some(&Value::String("NAS".into())));
    assert!(semantic.get("NEW_FIELD").is_none());
}

#[test]
fn test_alias_lookups() {
    assert_eq!(SAMPLE.alias_of("symbol"), Some("PDNO"));
    assert_eq!(SAMPLE.by_alias("EXCD").map(|f| f.name), Some("market"));
    assert!(SAMPLE.by_name("PDNO").is_none());
    assert!(SAMPLE.check_unique().is_ok());
}

#[test]
fn test_duplicate_alias_is_detected() {
    static BROKEN: AliasTable = AliasTable::new(
        "broken",
        &[FieldSpec::text("a", "X"), FieldSpec::text("b", "X")],
    );
    assert!(BROKEN.check_unique().is_err());
}

#[test]
fn test_padded_symbol_round_trips_trimmed() {
    let payload = OverseaQuotePayload::new(" QQQ ", PriceMarketCode::Nasdaq).unwrap();
    assert_eq!(payload.symbol, "QQQ");
    assert_eq!(payload.to_wire().unwrap()["SYMB"], json!("QQQ"));
    assert_round_trip(&payload);

    let change = OverseaChangeOrderPayload::update(order(), " 0030123456 ").unwrap();
    assert_eq!(change.to_wire().unwrap()["ORGN_ODNO"], json!("0030123456"));
    assert_round_trip(&change);
}

#[test]
fn test_padded_cursor_round_trips_trimmed() {
    let mut payload = OverseaBalancePayload::new("12345678", OrderMarketCode::Nasdaq).unwrap();
    payload.apply_cursor(&Cursor::new("A   ", "B  "));
    let wire = payload.to_wire().unwrap();
    assert_eq!(wire["CTX_AREA_FK200"], json!("A"));
    assert_eq!(wire["CTX_AREA_NK200"], json!("B"));
    assert_round_trip(&payload);
}

#[test]
fn test_trimmed_field_rule_sees_trimmed_value() {
    static TABLE: AliasTable = AliasTable::new(
        "trimmed_rule",
        &[FieldSpec::trimmed("symbol", "SYMB").rule(Rule::MaxLength(3))],
    );
    let mut semantic = Map::new();
    semantic.insert("symbol".to_string(), json!("  QQQ  "));
    let wire = TABLE.to_wire(&semantic).unwrap();
    assert_eq!(wire["SYMB"], json!("QQQ"));
    assert_eq!(TABLE.from_wire("", &wire).unwrap()["symbol"], json!("QQQ"));
}
