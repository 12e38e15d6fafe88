/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Response normalization
//!
//! Every broker body is first wrapped in an [`Envelope`], which checks `rt_cd` before
//! anything else. Only a successful envelope hands out its result sections, each
//! decoded through the alias table of its record type.

use crate::constants::SUCCESS_RETURN_CODE;
use crate::error::{AppError, KisResult};
use crate::model::pagination::{CURSOR_100, CURSOR_200, Continuation, Cursor};
use crate::model::schema::{AliasTable, FieldSpec, WireRecord};
use crate::presentation::account::{
    DomesticBalanceSummary, DomesticHolding, OverseaBalanceSummary, OverseaHolding,
};
use crate::presentation::market::{DomesticDailyPrice, OverseaDailyPrice, OverseaQuote, OverseaTicker};
use crate::presentation::order::{OrderAck, OverseaOrderHistoryRow, OverseaUnexecuted};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use prettytable::format;
use prettytable::{Cell, Row, Table};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Outer status of every broker response
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseStatus {
    /// `rt_cd`, `"0"` on success
    pub return_code: String,
    /// `msg_cd`
    pub message_code: String,
    /// `msg1`, trimmed
    pub message: String,
}

static RESPONSE_STATUS: AliasTable = AliasTable::new(
    "response_status",
    &[
        FieldSpec::trimmed("return_code", "rt_cd"),
        FieldSpec::trimmed("message_code", "msg_cd").or(""),
        FieldSpec::trimmed("message", "msg1").or(""),
    ],
);

impl WireRecord for ResponseStatus {
    fn schema() -> &'static AliasTable {
        &RESPONSE_STATUS
    }
}

impl ResponseStatus {
    /// Checks if the broker reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.return_code == SUCCESS_RETURN_CODE
    }
}

/// Successfully checked response body
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status: ResponseStatus,
    continuation: Continuation,
    body: Map<String, Value>,
}

impl Envelope {
    /// Checks the outer return code of `body`
    ///
    /// A non-`"0"` code fails with [`AppError::Broker`] before any section is read.
    pub fn parse(body: Value, continuation: Continuation) -> KisResult<Self> {
        let Value::Object(body) = body else {
            return Err(AppError::schema("$", body.to_string()));
        };
        let status: ResponseStatus = RESPONSE_STATUS.decode("", &Value::Object(body.clone()))?;
        if !status.is_success() {
            return Err(AppError::Broker {
                return_code: status.return_code,
                message_code: status.message_code,
                message: status.message,
            });
        }
        Ok(Self {
            status,
            continuation,
            body,
        })
    }

    /// Outer status
    #[must_use]
    pub fn status(&self) -> &ResponseStatus {
        &self.status
    }

    /// Continuation marker of the transport
    #[must_use]
    pub fn continuation(&self) -> Continuation {
        self.continuation
    }

    fn section(&self, name: &str) -> KisResult<&Value> {
        self.body
            .get(name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| AppError::missing(name))
    }

    /// Section holding exactly one record
    pub fn one<T: WireRecord>(&self, name: &str) -> KisResult<T> {
        T::decode(name, self.section(name)?)
    }

    /// Section holding a list of records
    pub fn many<T: WireRecord>(&self, name: &str) -> KisResult<Vec<T>> {
        match self.section(name)? {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::decode(&format!("{name}[{i}]"), item))
                .collect(),
            other => Err(AppError::schema(name, other.to_string())),
        }
    }

    /// Section holding either one record or a list, collapsed to one record
    ///
    /// A list yields its first element; an empty list is an error.
    pub fn one_or_many<T: WireRecord>(&self, name: &str) -> KisResult<T> {
        match self.section(name)? {
            Value::Array(items) => match items.first() {
                Some(first) => T::decode(&format!("{name}[0]"), first),
                None => Err(AppError::schema(name, "[]")),
            },
            other => T::decode(name, other),
        }
    }

    /// Pagination cursor read through `table`
    pub fn cursor(&self, table: &AliasTable) -> KisResult<Cursor> {
        table.decode("", &Value::Object(self.body.clone()))
    }
}

/// A typed response built from a checked envelope
pub trait ApiResponse: Sized + Send {
    /// Maps the envelope sections to the typed response
    fn from_envelope(envelope: Envelope) -> KisResult<Self>;

    /// Parses a raw body, checking `rt_cd` first
    fn parse(body: Value, continuation: Continuation) -> KisResult<Self> {
        Self::from_envelope(Envelope::parse(body, continuation)?)
    }
}

/// A response that can span several pages
pub trait PagedResponse: ApiResponse {
    /// Cursor to copy into the next request
    fn cursor(&self) -> &Cursor;

    /// Continuation marker of the last page read
    fn continuation(&self) -> Continuation;

    /// Appends the rows of `next` after the rows of `self`
    fn extend(&mut self, next: Self);
}

/// Daily prices of a domestic stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
pub struct DomesticDailyPriceResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Bars, most recent first
    pub prices: Vec<DomesticDailyPrice>,
}

impl ApiResponse for DomesticDailyPriceResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            prices: envelope.many("output")?,
            status: envelope.status,
        })
    }
}

/// Holdings and totals of a domestic account
#[derive(DebugPretty, Clone, Serialize, PartialEq)]
pub struct DomesticBalanceResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Holdings
    pub holdings: Vec<DomesticHolding>,
    /// Account totals
    pub balance: DomesticBalanceSummary,
    /// Cursor of the next page
    pub cursor: Cursor,
    /// Continuation marker
    pub continuation: Continuation,
}

impl ApiResponse for DomesticBalanceResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            holdings: envelope.many("output1")?,
            balance: envelope.one_or_many("output2")?,
            cursor: envelope.cursor(&CURSOR_100)?,
            continuation: envelope.continuation,
            status: envelope.status,
        })
    }
}

impl PagedResponse for DomesticBalanceResponse {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn continuation(&self) -> Continuation {
        self.continuation
    }

    fn extend(&mut self, next: Self) {
        self.holdings.extend(next.holdings);
        self.balance = next.balance;
        self.cursor = next.cursor;
        self.continuation = next.continuation;
        self.status = next.status;
    }
}

impl fmt::Display for DomesticBalanceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.holdings.iter().map(|h| {
            vec![
                h.symbol.clone(),
                h.name.clone(),
                h.holding_qty.to_string(),
                h.avg_price.to_string(),
                h.price.to_string(),
                h.eval_amt.to_string(),
                h.profit_loss.to_string(),
                h.profit_loss_ratio.to_string(),
            ]
        });
        let table = holdings_table(
            &["SYMBOL", "NAME", "QTY", "AVG PRICE", "PRICE", "EVAL", "P/L", "P/L %"],
            rows,
        );
        write!(f, "{table}")?;
        writeln!(
            f,
            "deposit: {} | total: {} | net asset: {}",
            self.balance.deposit, self.balance.total_amt, self.balance.net_asset
        )
    }
}

fn holdings_table<I>(header: &[&str], rows: I) -> Table
where
    I: Iterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }
    table
}

/// Current quote of an overseas stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
pub struct OverseaQuoteResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Quote
    pub quote: OverseaQuote,
}

impl ApiResponse for OverseaQuoteResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            quote: envelope.one("output")?,
            status: envelope.status,
        })
    }
}

/// Daily prices of an overseas stock
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
pub struct OverseaDailyPriceResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Ticker information
    pub ticker: OverseaTicker,
    /// Bars, most recent first, blank padding rows removed
    pub prices: Vec<OverseaDailyPrice>,
}

impl ApiResponse for OverseaDailyPriceResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        let prices: Vec<OverseaDailyPrice> = envelope.many("output2")?;
        Ok(Self {
            ticker: envelope.one_or_many("output1")?,
            prices: prices.into_iter().filter(OverseaDailyPrice::is_filled).collect(),
            status: envelope.status,
        })
    }
}

impl OverseaDailyPriceResponse {
    /// Oldest business date of the page
    #[must_use]
    pub fn oldest_date(&self) -> Option<&str> {
        self.prices.iter().map(|p| p.base_date.as_str()).min()
    }
}

/// Holdings and totals of an overseas account
#[derive(DebugPretty, Clone, Serialize, PartialEq)]
pub struct OverseaBalanceResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Holdings
    pub holdings: Vec<OverseaHolding>,
    /// Account totals
    pub balance: OverseaBalanceSummary,
    /// Cursor of the next page
    pub cursor: Cursor,
    /// Continuation marker
    pub continuation: Continuation,
}

/// Portfolio weight of one holding
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoldingWeight {
    /// Product number
    pub symbol: String,
    /// Evaluation amount over the total evaluation amount, 4 decimal places
    pub weight: Decimal,
}

impl OverseaBalanceResponse {
    /// Weight of every holding in the account, sorted by weight
    ///
    /// A zero total evaluation amount yields zero weights.
    #[must_use]
    pub fn weights(&self, descending: bool) -> Vec<HoldingWeight> {
        let total = self.balance.total_eval_amt;
        let mut weights: Vec<HoldingWeight> = self
            .holdings
            .iter()
            .map(|h| HoldingWeight {
                symbol: h.symbol.clone(),
                weight: h
                    .eval_amt
                    .checked_div(total)
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(4),
            })
            .collect();
        weights.sort_by(|a, b| a.weight.cmp(&b.weight));
        if descending {
            weights.reverse();
        }
        weights
    }
}

impl ApiResponse for OverseaBalanceResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            holdings: envelope.many("output1")?,
            balance: envelope.one_or_many("output2")?,
            cursor: envelope.cursor(&CURSOR_200)?,
            continuation: envelope.continuation,
            status: envelope.status,
        })
    }
}

impl PagedResponse for OverseaBalanceResponse {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn continuation(&self) -> Continuation {
        self.continuation
    }

    fn extend(&mut self, next: Self) {
        self.holdings.extend(next.holdings);
        self.balance = next.balance;
        self.cursor = next.cursor;
        self.continuation = next.continuation;
        self.status = next.status;
    }
}

impl fmt::Display for OverseaBalanceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.holdings.iter().map(|h| {
            vec![
                h.symbol.clone(),
                h.name.clone(),
                h.holding_qty.to_string(),
                h.purchase_avg_price.to_string(),
                h.price.to_string(),
                h.eval_amt.to_string(),
                h.profit_loss.to_string(),
                h.profit_loss_ratio.to_string(),
                h.currency_code.clone(),
            ]
        });
        let table = holdings_table(
            &["SYMBOL", "NAME", "QTY", "AVG PRICE", "PRICE", "EVAL", "P/L", "P/L %", "CCY"],
            rows,
        );
        write!(f, "{table}")?;
        writeln!(
            f,
            "total eval: {} | total return: {}% | realized: {}",
            self.balance.total_eval_amt, self.balance.total_return, self.balance.realized_profit_loss
        )
    }
}

/// Unexecuted overseas orders
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
pub struct OverseaUnexecutedResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Resting orders
    pub orders: Vec<OverseaUnexecuted>,
    /// Cursor of the next page
    pub cursor: Cursor,
    /// Continuation marker
    pub continuation: Continuation,
}

impl ApiResponse for OverseaUnexecutedResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            orders: envelope.many("output")?,
            cursor: envelope.cursor(&CURSOR_200)?,
            continuation: envelope.continuation,
            status: envelope.status,
        })
    }
}

impl PagedResponse for OverseaUnexecutedResponse {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn continuation(&self) -> Continuation {
        self.continuation
    }

    fn extend(&mut self, next: Self) {
        self.orders.extend(next.orders);
        self.cursor = next.cursor;
        self.continuation = next.continuation;
        self.status = next.status;
    }
}

/// Overseas order history
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
pub struct OverseaOrderHistoryResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Orders, most recent first
    pub history: Vec<OverseaOrderHistoryRow>,
    /// Cursor of the next page
    pub cursor: Cursor,
    /// Continuation marker
    pub continuation: Continuation,
}

impl ApiResponse for OverseaOrderHistoryResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            history: envelope.many("output")?,
            cursor: envelope.cursor(&CURSOR_200)?,
            continuation: envelope.continuation,
            status: envelope.status,
        })
    }
}

impl PagedResponse for OverseaOrderHistoryResponse {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn continuation(&self) -> Continuation {
        self.continuation
    }

    fn extend(&mut self, next: Self) {
        self.history.extend(next.history);
        self.cursor = next.cursor;
        self.continuation = next.continuation;
        self.status = next.status;
    }
}

impl OverseaOrderHistoryResponse {
    /// Checks if the broker announced another page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.continuation.has_more()
    }

    /// Checks if the broker announced the last page
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.continuation.is_last()
    }
}

/// Acknowledgement of an order placement, update or cancel
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct OrderResponse {
    /// Outer status
    pub status: ResponseStatus,
    /// Acknowledgement
    pub ack: OrderAck,
}

impl ApiResponse for OrderResponse {
    fn from_envelope(envelope: Envelope) -> KisResult<Self> {
        Ok(Self {
            ack: envelope.one_or_many("output")?,
            status: envelope.status,
        })
    }
}
