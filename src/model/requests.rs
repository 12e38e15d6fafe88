/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Request payloads, one per broker operation
//!
//! A payload is a plain serde struct with semantic field names. Its [`AliasTable`]
//! holds the wire aliases, defaults, exclusions and validation rules. Constructors
//! render the payload once so a payload that exists is a payload that validates.

use crate::constants::{DEFAULT_PRODUCT_CODE, WIRE_DATE_FORMAT, paths, tr_ids};
use crate::error::{AppError, KisResult};
use crate::model::http::HttpVerb;
use crate::model::pagination::Cursor;
use crate::model::responses::{
    ApiResponse, DomesticBalanceResponse, DomesticDailyPriceResponse, OrderResponse,
    OverseaBalanceResponse, OverseaDailyPriceResponse, OverseaOrderHistoryResponse,
    OverseaQuoteResponse, OverseaUnexecutedResponse, PagedResponse,
};
use crate::model::schema::{AliasTable, FieldSpec};
use crate::model::validation::{Rule, normalize_account_number};
use crate::presentation::market::{OrderMarketCode, PriceMarketCode, PricePeriod};
use crate::presentation::order::OrderChangeCode;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

const YES_NO: &[&str] = &["Y", "N"];
const ZERO_ONE: &[&str] = &["0", "1"];
const CURRENCIES: &[&str] = &["USD", "HKD", "CNY", "JPY", "VND"];
const HISTORY_MARKETS: &[&str] = &["%", "NYSE", "NASD", "AMEX"];
const SIDES: &[&str] = &["00", "01", "02"];

/// One broker operation
pub trait Payload: Serialize + Send + Sync {
    /// Typed response of the operation
    type Response: ApiResponse;

    /// HTTP verb
    const METHOD: HttpVerb;

    /// URL path, relative to the API host
    const URL_PATH: &'static str;

    /// Alias table of the payload
    fn schema() -> &'static AliasTable;

    /// Transaction id sent in the `tr_id` header
    fn tr_id(&self) -> &str;

    /// Semantic field map, excluded fields included
    fn to_semantic(&self) -> KisResult<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::validation(
                Self::schema().name(),
                format!("payload must serialize to an object, got {other}"),
            )),
        }
    }

    /// Wire field map, defaults applied, rules checked, excluded fields dropped
    fn to_wire(&self) -> KisResult<Map<String, Value>> {
        Self::schema().to_wire(&self.to_semantic()?)
    }
}

/// A payload whose response may continue on further pages
pub trait Paginated: Payload<Response: PagedResponse> + Clone {
    /// Copies the cursor of the previous response into this request
    fn apply_cursor(&mut self, cursor: &Cursor);
}

fn validated<P: Payload>(payload: P) -> KisResult<P> {
    P::schema().validate(&payload.to_semantic()?)?;
    Ok(payload)
}

fn wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Daily prices of a domestic stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct DomesticDailyPricePayload {
    /// Transaction id
    pub tr_id: String,
    /// Stock code
    pub symbol: String,
    /// Market division
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_division: Option<String>,
    /// Period: D daily, W weekly, M monthly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Adjusted price flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjust_price_flag: Option<String>,
}

static DOMESTIC_DAILY_PRICE_PAYLOAD: AliasTable = AliasTable::new(
    "domestic_daily_price_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::DOMESTIC_DAILY_PRICE).excluded(),
        FieldSpec::text("market_division", "FID_COND_MRKT_DIV_CODE").or("J"),
        FieldSpec::trimmed("symbol", "FID_INPUT_ISCD").rule(Rule::MaxLength(12)),
        FieldSpec::text("period", "FID_PERIOD_DIV_CODE")
            .or("D")
            .rule(Rule::OneOf(&["D", "W", "M"])),
        FieldSpec::text("adjust_price_flag", "FID_ORG_ADJ_PRC")
            .or("1")
            .rule(Rule::OneOf(ZERO_ONE)),
    ],
);

impl DomesticDailyPricePayload {
    /// Daily bars of `symbol`
    pub fn new(symbol: &str) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::DOMESTIC_DAILY_PRICE.to_string(),
            symbol: symbol.trim().to_string(),
            market_division: None,
            period: None,
            adjust_price_flag: None,
        })
    }

    /// Sets the bar period (`D`, `W` or `M`)
    pub fn with_period(mut self, period: &str) -> KisResult<Self> {
        self.period = Some(period.to_string());
        validated(self)
    }

    /// Sets the adjusted price flag (`0` or `1`)
    pub fn with_adjust_price_flag(mut self, flag: &str) -> KisResult<Self> {
        self.adjust_price_flag = Some(flag.to_string());
        validated(self)
    }
}

impl Payload for DomesticDailyPricePayload {
    type Response = DomesticDailyPriceResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::DOMESTIC_DAILY_PRICE;

    fn schema() -> &'static AliasTable {
        &DOMESTIC_DAILY_PRICE_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

/// Holdings and totals of a domestic account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct DomesticBalancePayload {
    /// Transaction id
    pub tr_id: String,
    /// Account number, 8 characters
    pub account_number: String,
    /// Account product code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Inquiry division: 01 by loan date, 02 by symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_division: Option<String>,
    /// Search key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
    /// Next key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

static DOMESTIC_BALANCE_PAYLOAD: AliasTable = AliasTable::new(
    "domestic_balance_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::DOMESTIC_BALANCE).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::text("after_hours", "AFHR_FLPR_YN")
            .or("N")
            .rule(Rule::OneOf(YES_NO)),
        FieldSpec::text("offline", "OFL_YN").or("N"),
        FieldSpec::text("inquiry_division", "INQR_DVSN")
            .or("01")
            .rule(Rule::OneOf(&["01", "02"])),
        FieldSpec::text("unit_price_division", "UNPR_DVSN").or("01"),
        FieldSpec::text("fund_settlement", "FUND_STTL_ICLD_YN")
            .or("N")
            .rule(Rule::OneOf(YES_NO)),
        FieldSpec::text("auto_repay", "FNCG_AMT_AUTO_RDPT_YN")
            .or("N")
            .rule(Rule::OneOf(YES_NO)),
        FieldSpec::text("process_division", "PRCS_DVSN")
            .or("00")
            .rule(Rule::OneOf(&["00", "01"])),
        FieldSpec::trimmed("search_key", "CTX_AREA_FK100").or(""),
        FieldSpec::trimmed("next_key", "CTX_AREA_NK100").or(""),
    ],
);

impl DomesticBalancePayload {
    /// Balance of `account_number` (8 or 10 characters)
    pub fn new(account_number: &str) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::DOMESTIC_BALANCE.to_string(),
            account_number: normalize_account_number(account_number)?,
            product_code: None,
            inquiry_division: None,
            search_key: None,
            next_key: None,
        })
    }

    /// Sets the inquiry division (`01` or `02`)
    pub fn with_inquiry_division(mut self, division: &str) -> KisResult<Self> {
        self.inquiry_division = Some(division.to_string());
        validated(self)
    }
}

impl Payload for DomesticBalancePayload {
    type Response = DomesticBalanceResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::DOMESTIC_BALANCE;

    fn schema() -> &'static AliasTable {
        &DOMESTIC_BALANCE_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

impl Paginated for DomesticBalancePayload {
    fn apply_cursor(&mut self, cursor: &Cursor) {
        self.search_key = Some(cursor.search_key.trim().to_string());
        self.next_key = Some(cursor.next_key.trim().to_string());
    }
}

/// Current quote of an overseas stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaQuotePayload {
    /// Transaction id
    pub tr_id: String,
    /// Pricing venue
    pub market_code: PriceMarketCode,
    /// Ticker symbol
    pub symbol: String,
}

static OVERSEA_QUOTE_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_quote_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_QUOTE).excluded(),
        FieldSpec::text("auth", "AUTH").or(""),
        FieldSpec::text("market_code", "EXCD").rule(Rule::OneOf(PriceMarketCode::WIRE_CODES)),
        FieldSpec::trimmed("symbol", "SYMB").rule(Rule::MaxLength(16)),
    ],
);

impl OverseaQuotePayload {
    /// Quote of `symbol` on `market_code`
    pub fn new(symbol: &str, market_code: PriceMarketCode) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_QUOTE.to_string(),
            market_code,
            symbol: symbol.trim().to_string(),
        })
    }
}

impl Payload for OverseaQuotePayload {
    type Response = OverseaQuoteResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::OVERSEA_QUOTE;

    fn schema() -> &'static AliasTable {
        &OVERSEA_QUOTE_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

/// Daily prices of an overseas stock
///
/// The broker returns at most one page of bars ending at `base_date`; older bars are
/// requested by moving `base_date` back (see the client's date-series driver).
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaDailyPricePayload {
    /// Transaction id
    pub tr_id: String,
    /// Pricing venue
    pub market_code: PriceMarketCode,
    /// Ticker symbol
    pub symbol: String,
    /// Bar period
    pub period: PricePeriod,
    /// Most recent date of the page (`YYYYMMDD`), empty for today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_date: Option<String>,
    /// Adjusted price flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjust_price_flag: Option<String>,
    /// Next key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

static OVERSEA_DAILY_PRICE_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_daily_price_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_DAILY_PRICE).excluded(),
        FieldSpec::text("auth", "AUTH").or(""),
        FieldSpec::text("market_code", "EXCD").rule(Rule::OneOf(PriceMarketCode::WIRE_CODES)),
        FieldSpec::trimmed("symbol", "SYMB").rule(Rule::MaxLength(16)),
        FieldSpec::text("period", "GUBN")
            .or("0")
            .rule(Rule::OneOf(PricePeriod::WIRE_CODES)),
        FieldSpec::text("base_date", "BYMD").or("").rule(Rule::MaxLength(8)),
        FieldSpec::text("adjust_price_flag", "MODP")
            .or("1")
            .rule(Rule::OneOf(ZERO_ONE)),
        FieldSpec::trimmed("next_key", "KEYB").or(""),
    ],
);

impl OverseaDailyPricePayload {
    /// Daily bars of `symbol` on `market_code`, ending today
    pub fn new(symbol: &str, market_code: PriceMarketCode) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_DAILY_PRICE.to_string(),
            market_code,
            symbol: symbol.trim().to_string(),
            period: PricePeriod::Daily,
            base_date: None,
            adjust_price_flag: None,
            next_key: None,
        })
    }

    /// Sets the bar period
    #[must_use]
    pub fn with_period(mut self, period: PricePeriod) -> Self {
        self.period = period;
        self
    }

    /// Sets the most recent date of the page
    #[must_use]
    pub fn with_base_date(mut self, base_date: NaiveDate) -> Self {
        self.base_date = Some(wire_date(base_date));
        self
    }

    /// Sets the adjusted price flag (`0` or `1`)
    pub fn with_adjust_price_flag(mut self, flag: &str) -> KisResult<Self> {
        self.adjust_price_flag = Some(flag.to_string());
        validated(self)
    }
}

impl Payload for OverseaDailyPricePayload {
    type Response = OverseaDailyPriceResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::OVERSEA_DAILY_PRICE;

    fn schema() -> &'static AliasTable {
        &OVERSEA_DAILY_PRICE_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

/// Holdings and totals of an overseas account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaBalancePayload {
    /// Transaction id
    pub tr_id: String,
    /// Account number, 8 characters
    pub account_number: String,
    /// Account product code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Ordering venue
    pub market_code: OrderMarketCode,
    /// Trade currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Search key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
    /// Next key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

static OVERSEA_BALANCE_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_balance_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_BALANCE).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::text("market_code", "OVRS_EXCG_CD").rule(Rule::OneOf(OrderMarketCode::WIRE_CODES)),
        FieldSpec::text("currency", "TR_CRCY_CD")
            .or("USD")
            .rule(Rule::OneOf(CURRENCIES)),
        FieldSpec::trimmed("search_key", "CTX_AREA_FK200").or(""),
        FieldSpec::trimmed("next_key", "CTX_AREA_NK200").or(""),
    ],
);

impl OverseaBalancePayload {
    /// Balance of `account_number` on `market_code`
    pub fn new(account_number: &str, market_code: OrderMarketCode) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_BALANCE.to_string(),
            account_number: normalize_account_number(account_number)?,
            product_code: None,
            market_code,
            currency: None,
            search_key: None,
            next_key: None,
        })
    }

    /// Sets the trade currency (`USD`, `HKD`, `CNY`, `JPY` or `VND`)
    pub fn with_currency(mut self, currency: &str) -> KisResult<Self> {
        self.currency = Some(currency.to_string());
        validated(self)
    }
}

impl Payload for OverseaBalancePayload {
    type Response = OverseaBalanceResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::OVERSEA_BALANCE;

    fn schema() -> &'static AliasTable {
        &OVERSEA_BALANCE_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

impl Paginated for OverseaBalancePayload {
    fn apply_cursor(&mut self, cursor: &Cursor) {
        self.search_key = Some(cursor.search_key.trim().to_string());
        self.next_key = Some(cursor.next_key.trim().to_string());
    }
}

/// Unexecuted orders of an overseas account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaUnexecutedPayload {
    /// Transaction id
    pub tr_id: String,
    /// Account number, 8 characters
    pub account_number: String,
    /// Account product code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Ordering venue
    pub market_code: OrderMarketCode,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Search key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
    /// Next key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

static OVERSEA_UNEXECUTED_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_unexecuted_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_UNEXECUTED).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::text("market_code", "OVRS_EXCG_CD").rule(Rule::OneOf(OrderMarketCode::WIRE_CODES)),
        FieldSpec::text("sort", "SORT_SQN").or("DS").rule(Rule::MaxLength(2)),
        FieldSpec::trimmed("search_key", "CTX_AREA_FK200").or(""),
        FieldSpec::trimmed("next_key", "CTX_AREA_NK200").or(""),
    ],
);

impl OverseaUnexecutedPayload {
    /// Unexecuted orders of `account_number` on `market_code`
    pub fn new(account_number: &str, market_code: OrderMarketCode) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_UNEXECUTED.to_string(),
            account_number: normalize_account_number(account_number)?,
            product_code: None,
            market_code,
            sort: None,
            search_key: None,
            next_key: None,
        })
    }
}

impl Payload for OverseaUnexecutedPayload {
    type Response = OverseaUnexecutedResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::OVERSEA_UNEXECUTED;

    fn schema() -> &'static AliasTable {
        &OVERSEA_UNEXECUTED_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

impl Paginated for OverseaUnexecutedPayload {
    fn apply_cursor(&mut self, cursor: &Cursor) {
        self.search_key = Some(cursor.search_key.trim().to_string());
        self.next_key = Some(cursor.next_key.trim().to_string());
    }
}

/// Order history of an overseas account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaOrderHistoryPayload {
    /// Transaction id
    pub tr_id: String,
    /// Account number, 8 characters
    pub account_number: String,
    /// Account product code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Product number, `%` for all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// First order date (`YYYYMMDD`)
    pub start_date: String,
    /// Last order date (`YYYYMMDD`)
    pub end_date: String,
    /// Side filter: 00 all, 01 sell, 02 buy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_division: Option<String>,
    /// Execution filter: 00 all, 01 executed, 02 unexecuted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_division: Option<String>,
    /// Venue filter, `%` for all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_code: Option<String>,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Search key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
    /// Next key of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

static OVERSEA_ORDER_HISTORY_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_order_history_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_ORDER_HISTORY).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::trimmed("symbol", "PDNO").or("%").rule(Rule::MaxLength(12)),
        FieldSpec::text("start_date", "ORD_STRT_DT").rule(Rule::MaxLength(8)),
        FieldSpec::text("end_date", "ORD_END_DT").rule(Rule::MaxLength(8)),
        FieldSpec::text("trade_division", "SLL_BUY_DVSN")
            .or("00")
            .rule(Rule::OneOf(SIDES)),
        FieldSpec::text("execution_division", "CCLD_NCCS_DVSN")
            .or("00")
            .rule(Rule::OneOf(SIDES)),
        FieldSpec::text("market_code", "OVRS_EXCG_CD")
            .or("%")
            .rule(Rule::OneOf(HISTORY_MARKETS)),
        FieldSpec::text("sort", "SORT_SQN").or("DS").rule(Rule::MaxLength(2)),
        FieldSpec::text("order_date", "ORD_DT").or(""),
        FieldSpec::text("order_branch_no", "ORD_GNO_BRNO").or(""),
        FieldSpec::text("order_no", "ODNO").or(""),
        FieldSpec::trimmed("search_key", "CTX_AREA_FK200").or(""),
        FieldSpec::trimmed("next_key", "CTX_AREA_NK200").or(""),
    ],
);

impl OverseaOrderHistoryPayload {
    /// Orders of `account_number` placed between `start_date` and `end_date`
    pub fn new(account_number: &str, start_date: NaiveDate, end_date: NaiveDate) -> KisResult<Self> {
        if end_date < start_date {
            return Err(AppError::validation(
                "end_date",
                format!("must not be before start_date {start_date}"),
            ));
        }
        validated(Self {
            tr_id: tr_ids::OVERSEA_ORDER_HISTORY.to_string(),
            account_number: normalize_account_number(account_number)?,
            product_code: None,
            symbol: None,
            start_date: wire_date(start_date),
            end_date: wire_date(end_date),
            trade_division: None,
            execution_division: None,
            market_code: None,
            sort: None,
            search_key: None,
            next_key: None,
        })
    }

    /// Restricts the history to one product
    pub fn with_symbol(mut self, symbol: &str) -> KisResult<Self> {
        self.symbol = Some(symbol.trim().to_string());
        validated(self)
    }

    /// Restricts the history to one venue
    #[must_use]
    pub fn with_market_code(mut self, market_code: OrderMarketCode) -> Self {
        self.market_code = Some(market_code.as_str().to_string());
        self
    }

    /// Sets the side filter (`00`, `01` or `02`)
    pub fn with_trade_division(mut self, division: &str) -> KisResult<Self> {
        self.trade_division = Some(division.to_string());
        validated(self)
    }

    /// Sets the execution filter (`00`, `01` or `02`)
    pub fn with_execution_division(mut self, division: &str) -> KisResult<Self> {
        self.execution_division = Some(division.to_string());
        validated(self)
    }
}

impl Payload for OverseaOrderHistoryPayload {
    type Response = OverseaOrderHistoryResponse;
    const METHOD: HttpVerb = HttpVerb::Get;
    const URL_PATH: &'static str = paths::OVERSEA_ORDER_HISTORY;

    fn schema() -> &'static AliasTable {
        &OVERSEA_ORDER_HISTORY_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

impl Paginated for OverseaOrderHistoryPayload {
    fn apply_cursor(&mut self, cursor: &Cursor) {
        self.search_key = Some(cursor.search_key.trim().to_string());
        self.next_key = Some(cursor.next_key.trim().to_string());
    }
}

/// Fields shared by every overseas order payload
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OrderFields {
    /// Account number, 8 characters
    pub account_number: String,
    /// Account product code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Ordering venue
    pub market_code: OrderMarketCode,
    /// Product number
    pub symbol: String,
    /// Quantity
    pub quantity: Decimal,
    /// Limit price
    pub price: Decimal,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Agency order number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_order_no: Option<String>,
    /// Order server division
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_server_division: Option<String>,
    /// Order division, 00 for limit orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_division: Option<String>,
}

impl OrderFields {
    /// Order of `quantity` shares of `symbol` at `price`
    pub fn new(
        account_number: &str,
        market_code: OrderMarketCode,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> KisResult<Self> {
        Ok(Self {
            account_number: normalize_account_number(account_number)?,
            product_code: None,
            market_code,
            symbol: symbol.trim().to_string(),
            quantity,
            price,
            contact_phone: None,
            agency_order_no: None,
            order_server_division: None,
            order_division: None,
        })
    }

    /// Sets the contact phone number
    #[must_use]
    pub fn with_contact_phone(mut self, phone: &str) -> Self {
        self.contact_phone = Some(phone.to_string());
        self
    }

    /// Sets the agency order number
    #[must_use]
    pub fn with_agency_order_no(mut self, order_no: &str) -> Self {
        self.agency_order_no = Some(order_no.to_string());
        self
    }
}

/// Buy order on an overseas venue
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaBidPayload {
    /// Transaction id
    pub tr_id: String,
    /// Order fields
    #[serde(flatten)]
    pub order: OrderFields,
}

static OVERSEA_BID_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_bid_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_BID).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::text("market_code", "OVRS_EXCG_CD").rule(Rule::OneOf(OrderMarketCode::WIRE_CODES)),
        FieldSpec::trimmed("symbol", "PDNO").rule(Rule::MaxLength(12)),
        FieldSpec::decimal("quantity", "ORD_QTY").rule(Rule::NonNegative),
        FieldSpec::decimal("price", "OVRS_ORD_UNPR").rule(Rule::NonNegative),
        FieldSpec::text("contact_phone", "CTAC_TLNO").or("").rule(Rule::MaxLength(20)),
        FieldSpec::text("agency_order_no", "MGCO_APTM_ODNO")
            .or("")
            .rule(Rule::MaxLength(12)),
        FieldSpec::text("order_server_division", "ORD_SVR_DVSN_CD")
            .or("0")
            .rule(Rule::MaxLength(1)),
        FieldSpec::text("order_division", "ORD_DVSN").or("00").rule(Rule::MaxLength(2)),
    ],
);

impl OverseaBidPayload {
    /// Buy order built from `order`
    pub fn new(order: OrderFields) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_BID.to_string(),
            order,
        })
    }
}

impl Payload for OverseaBidPayload {
    type Response = OrderResponse;
    const METHOD: HttpVerb = HttpVerb::Post;
    const URL_PATH: &'static str = paths::OVERSEA_ORDER;

    fn schema() -> &'static AliasTable {
        &OVERSEA_BID_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

/// Sell order on an overseas venue
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaAskPayload {
    /// Transaction id
    pub tr_id: String,
    /// Order fields
    #[serde(flatten)]
    pub order: OrderFields,
    /// Sell type, 00 for a regular sale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_type: Option<String>,
}

static OVERSEA_ASK_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_ask_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_ASK).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::text("market_code", "OVRS_EXCG_CD").rule(Rule::OneOf(OrderMarketCode::WIRE_CODES)),
        FieldSpec::trimmed("symbol", "PDNO").rule(Rule::MaxLength(12)),
        FieldSpec::decimal("quantity", "ORD_QTY").rule(Rule::NonNegative),
        FieldSpec::decimal("price", "OVRS_ORD_UNPR").rule(Rule::NonNegative),
        FieldSpec::text("contact_phone", "CTAC_TLNO").or("").rule(Rule::MaxLength(20)),
        FieldSpec::text("agency_order_no", "MGCO_APTM_ODNO")
            .or("")
            .rule(Rule::MaxLength(12)),
        FieldSpec::text("order_server_division", "ORD_SVR_DVSN_CD")
            .or("0")
            .rule(Rule::MaxLength(1)),
        FieldSpec::text("order_division", "ORD_DVSN").or("00").rule(Rule::MaxLength(2)),
        FieldSpec::text("sell_type", "SLL_TYPE").or("00").rule(Rule::MaxLength(2)),
    ],
);

impl OverseaAskPayload {
    /// Sell order built from `order`
    pub fn new(order: OrderFields) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_ASK.to_string(),
            order,
            sell_type: None,
        })
    }
}

impl Payload for OverseaAskPayload {
    type Response = OrderResponse;
    const METHOD: HttpVerb = HttpVerb::Post;
    const URL_PATH: &'static str = paths::OVERSEA_ORDER;

    fn schema() -> &'static AliasTable {
        &OVERSEA_ASK_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}

/// Update or cancel of a resting overseas order
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OverseaChangeOrderPayload {
    /// Transaction id
    pub tr_id: String,
    /// Order fields; for a cancel the quantity to cancel and a zero price
    #[serde(flatten)]
    pub order: OrderFields,
    /// Order number of the resting order
    pub origin_order_no: String,
    /// Update or cancel
    pub change_code: OrderChangeCode,
}

static OVERSEA_CHANGE_ORDER_PAYLOAD: AliasTable = AliasTable::new(
    "oversea_change_order_payload",
    &[
        FieldSpec::text("tr_id", "tr_id").or(tr_ids::OVERSEA_ORDER_CHANGE).excluded(),
        FieldSpec::text("account_number", "CANO").rule(Rule::AccountNumber),
        FieldSpec::text("product_code", "ACNT_PRDT_CD")
            .or(DEFAULT_PRODUCT_CODE)
            .rule(Rule::MaxLength(2)),
        FieldSpec::text("market_code", "OVRS_EXCG_CD").rule(Rule::OneOf(OrderMarketCode::WIRE_CODES)),
        FieldSpec::trimmed("symbol", "PDNO").rule(Rule::MaxLength(12)),
        FieldSpec::decimal("quantity", "ORD_QTY").rule(Rule::NonNegative),
        FieldSpec::decimal("price", "OVRS_ORD_UNPR").rule(Rule::NonNegative),
        FieldSpec::text("contact_phone", "CTAC_TLNO").or("").rule(Rule::MaxLength(20)),
        FieldSpec::text("agency_order_no", "MGCO_APTM_ODNO")
            .or("")
            .rule(Rule::MaxLength(12)),
        FieldSpec::text("order_server_division", "ORD_SVR_DVSN_CD")
            .or("0")
            .rule(Rule::MaxLength(1)),
        FieldSpec::text("order_division", "ORD_DVSN").or("00").rule(Rule::MaxLength(2)),
        FieldSpec::trimmed("origin_order_no", "ORGN_ODNO").rule(Rule::MaxLength(10)),
        FieldSpec::text("change_code", "RVSE_CNCL_DVSN_CD")
            .rule(Rule::OneOf(OrderChangeCode::WIRE_CODES)),
    ],
);

impl OverseaChangeOrderPayload {
    /// Amends the resting order `origin_order_no` to the quantity and price of `order`
    pub fn update(order: OrderFields, origin_order_no: &str) -> KisResult<Self> {
        Self::build(order, origin_order_no, OrderChangeCode::Update)
    }

    /// Cancels `order.quantity` shares of the resting order `origin_order_no`
    pub fn cancel(order: OrderFields, origin_order_no: &str) -> KisResult<Self> {
        Self::build(order, origin_order_no, OrderChangeCode::Cancel)
    }

    fn build(order: OrderFields, origin_order_no: &str, change_code: OrderChangeCode) -> KisResult<Self> {
        validated(Self {
            tr_id: tr_ids::OVERSEA_ORDER_CHANGE.to_string(),
            order,
            origin_order_no: origin_order_no.trim().to_string(),
            change_code,
        })
    }
}

impl Payload for OverseaChangeOrderPayload {
    type Response = OrderResponse;
    const METHOD: HttpVerb = HttpVerb::Post;
    const URL_PATH: &'static str = paths::OVERSEA_ORDER_CHANGE;

    fn schema() -> &'static AliasTable {
        &OVERSEA_CHANGE_ORDER_PAYLOAD
    }

    fn tr_id(&self) -> &str {
        &self.tr_id
    }
}
