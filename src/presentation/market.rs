/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::{AppError, KisResult};
use crate::model::schema::{AliasTable, FieldSpec, WireKind, WireRecord};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Venue codes used by the overseas pricing operations
///
/// Not interchangeable with [`OrderMarketCode`]: the broker uses different short
/// codes for the same venue depending on whether the operation prices or orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceMarketCode {
    /// New York Stock Exchange
    #[serde(rename = "NYS")]
    Nyse,
    /// Nasdaq
    #[serde(rename = "NAS")]
    #[default]
    Nasdaq,
    /// NYSE American
    #[serde(rename = "AMS")]
    Amex,
}

impl PriceMarketCode {
    /// Every wire code of this enumeration
    pub const WIRE_CODES: &'static [&'static str] = &["NYS", "NAS", "AMS"];

    /// Wire code
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceMarketCode::Nyse => "NYS",
            PriceMarketCode::Nasdaq => "NAS",
            PriceMarketCode::Amex => "AMS",
        }
    }

    /// Venue name shared with [`OrderMarketCode::venue`]
    #[must_use]
    pub fn venue(&self) -> &'static str {
        match self {
            PriceMarketCode::Nyse => "NYSE",
            PriceMarketCode::Nasdaq => "NASDAQ",
            PriceMarketCode::Amex => "AMEX",
        }
    }
}

impl fmt::Display for PriceMarketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceMarketCode {
    type Err = AppError;

    fn from_str(s: &str) -> KisResult<Self> {
        match s {
            "NYS" => Ok(PriceMarketCode::Nyse),
            "NAS" => Ok(PriceMarketCode::Nasdaq),
            "AMS" => Ok(PriceMarketCode::Amex),
            other if OrderMarketCode::WIRE_CODES.contains(&other) => Err(AppError::validation(
                "market_code",
                format!("{other} is an ordering venue code, pricing expects one of {:?}", Self::WIRE_CODES),
            )),
            other => Err(AppError::validation(
                "market_code",
                format!("must be one of {:?}, got {other:?}", Self::WIRE_CODES),
            )),
        }
    }
}

/// Venue codes used by the overseas ordering and account operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderMarketCode {
    /// New York Stock Exchange
    #[serde(rename = "NYSE")]
    Nyse,
    /// Nasdaq
    #[serde(rename = "NASD")]
    #[default]
    Nasdaq,
    /// NYSE American
    #[serde(rename = "AMEX")]
    Amex,
}

impl OrderMarketCode {
    /// Every wire code of this enumeration
    pub const WIRE_CODES: &'static [&'static str] = &["NYSE", "NASD", "AMEX"];

    /// Wire code
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMarketCode::Nyse => "NYSE",
            OrderMarketCode::Nasdaq => "NASD",
            OrderMarketCode::Amex => "AMEX",
        }
    }

    /// Venue name shared with [`PriceMarketCode::venue`]
    #[must_use]
    pub fn venue(&self) -> &'static str {
        match self {
            OrderMarketCode::Nyse => "NYSE",
            OrderMarketCode::Nasdaq => "NASDAQ",
            OrderMarketCode::Amex => "AMEX",
        }
    }
}

impl fmt::Display for OrderMarketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderMarketCode {
    type Err = AppError;

    fn from_str(s: &str) -> KisResult<Self> {
        match s {
            "NYSE" => Ok(OrderMarketCode::Nyse),
            "NASD" => Ok(OrderMarketCode::Nasdaq),
            "AMEX" => Ok(OrderMarketCode::Amex),
            other if PriceMarketCode::WIRE_CODES.contains(&other) => Err(AppError::validation(
                "market_code",
                format!("{other} is a pricing venue code, ordering expects one of {:?}", Self::WIRE_CODES),
            )),
            other => Err(AppError::validation(
                "market_code",
                format!("must be one of {:?}, got {other:?}", Self::WIRE_CODES),
            )),
        }
    }
}

/// Bar period of the overseas daily price operation (`GUBN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PricePeriod {
    /// Daily bars
    #[serde(rename = "0")]
    #[default]
    Daily,
    /// Weekly bars
    #[serde(rename = "1")]
    Weekly,
    /// Monthly bars
    #[serde(rename = "2")]
    Monthly,
}

impl PricePeriod {
    /// Every wire code of this enumeration
    pub const WIRE_CODES: &'static [&'static str] = &["0", "1", "2"];
}

/// Daily bar of a domestic stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomesticDailyPrice {
    /// Business date (`YYYYMMDD`)
    pub base_date: String,
    /// Opening price
    pub open: Decimal,
    /// Highest price
    pub high: Decimal,
    /// Lowest price
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Accumulated volume
    pub volume: i64,
    /// Volume ratio against the previous day
    pub volume_rate_change: Decimal,
    /// Change against the previous day
    pub change: Decimal,
}

static DOMESTIC_DAILY_PRICE: AliasTable = AliasTable::new(
    "domestic_daily_price",
    &[
        FieldSpec::text("base_date", "stck_bsop_date"),
        FieldSpec::decimal("open", "stck_oprc"),
        FieldSpec::decimal("high", "stck_hgpr"),
        FieldSpec::decimal("low", "stck_lwpr"),
        FieldSpec::decimal("close", "stck_clpr"),
        FieldSpec::integer("volume", "acml_vol"),
        FieldSpec::decimal("volume_rate_change", "prdy_vrss_vol_rate"),
        FieldSpec::decimal("change", "prdy_vrss"),
    ],
);

impl WireRecord for DomesticDailyPrice {
    fn schema() -> &'static AliasTable {
        &DOMESTIC_DAILY_PRICE
    }
}

/// Current quote of an overseas stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaQuote {
    /// Realtime symbol code (e.g. `DNASQQQ`)
    pub symbol: String,
    /// Number of decimal places
    pub decimal_places: i64,
    /// Previous close
    pub prev_close: Decimal,
    /// Previous day volume
    pub prev_volume: Decimal,
    /// Last price
    pub last: Decimal,
    /// Change sign code (1 upper limit, 2 up, 3 flat, 5 down)
    pub sign: String,
    /// Change against the previous close
    pub diff: Decimal,
    /// Change rate in percent
    pub rate: Decimal,
    /// Volume
    pub volume: Decimal,
    /// Traded amount
    pub amount: Decimal,
    /// Whether buy orders are accepted
    pub orderable: String,
}

static OVERSEA_QUOTE: AliasTable = AliasTable::new(
    "oversea_quote",
    &[
        FieldSpec::text("symbol", "rsym"),
        FieldSpec::integer("decimal_places", "zdiv"),
        FieldSpec::decimal("prev_close", "base"),
        FieldSpec::decimal("prev_volume", "pvol"),
        FieldSpec::decimal("last", "last"),
        FieldSpec::text("sign", "sign"),
        FieldSpec::decimal("diff", "diff"),
        FieldSpec::decimal("rate", "rate").or("0"),
        FieldSpec::decimal("volume", "tvol"),
        FieldSpec::decimal("amount", "tamt"),
        FieldSpec::trimmed("orderable", "ordy"),
    ],
);

impl WireRecord for OverseaQuote {
    fn schema() -> &'static AliasTable {
        &OVERSEA_QUOTE
    }
}

/// Ticker section of the overseas daily price response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaTicker {
    /// Realtime symbol code
    pub symbol: String,
    /// Number of decimal places
    pub decimal_places: i64,
    /// Number of records
    pub records: Option<Decimal>,
}

static OVERSEA_TICKER: AliasTable = AliasTable::new(
    "oversea_ticker",
    &[
        FieldSpec::text("symbol", "rsym"),
        FieldSpec::integer("decimal_places", "zdiv"),
        FieldSpec::new("records", "nrec", WireKind::OptionalDecimal).or(""),
    ],
);

impl WireRecord for OverseaTicker {
    fn schema() -> &'static AliasTable {
        &OVERSEA_TICKER
    }
}

/// Daily bar of an overseas stock
///
/// The broker pads the tail of a page with blank rows; their prices are `None`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaDailyPrice {
    /// Business date (`YYYYMMDD`)
    pub base_date: String,
    /// Change sign code
    pub sign: String,
    /// Change against the previous close
    pub diff: Option<Decimal>,
    /// Change rate in percent
    pub rate: Option<Decimal>,
    /// Opening price
    pub open: Option<Decimal>,
    /// Closing price
    pub close: Option<Decimal>,
    /// Highest price
    pub high: Option<Decimal>,
    /// Lowest price
    pub low: Option<Decimal>,
    /// Volume
    pub volume: Option<Decimal>,
    /// Traded amount
    pub amount: Option<Decimal>,
    /// Best bid
    pub bid: Option<Decimal>,
    /// Best bid size
    pub bid_size: Option<Decimal>,
    /// Best ask
    pub ask: Option<Decimal>,
    /// Best ask size
    pub ask_size: Option<Decimal>,
}

static OVERSEA_DAILY_PRICE: AliasTable = AliasTable::new(
    "oversea_daily_price",
    &[
        FieldSpec::trimmed("base_date", "xymd"),
        FieldSpec::text("sign", "sign").or(""),
        FieldSpec::new("diff", "diff", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("rate", "rate", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("open", "open", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("close", "clos", WireKind::OptionalDecimal),
        FieldSpec::new("high", "high", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("low", "low", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("volume", "tvol", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("amount", "tamt", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("bid", "pbid", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("bid_size", "vbid", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("ask", "pask", WireKind::OptionalDecimal).or(""),
        FieldSpec::new("ask_size", "vask", WireKind::OptionalDecimal).or(""),
    ],
);

impl WireRecord for OverseaDailyPrice {
    fn schema() -> &'static AliasTable {
        &OVERSEA_DAILY_PRICE
    }
}

impl OverseaDailyPrice {
    /// Checks if the row carries a closing price
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.close.is_some()
    }
}
