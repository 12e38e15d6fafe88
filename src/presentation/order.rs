/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::model::schema::{AliasTable, FieldSpec, WireRecord};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action of an order change request (`RVSE_CNCL_DVSN_CD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderChangeCode {
    /// Amend price or quantity of a resting order
    #[serde(rename = "01")]
    Update,
    /// Cancel a resting order
    #[serde(rename = "02")]
    Cancel,
}

impl OrderChangeCode {
    /// Every wire code of this enumeration
    pub const WIRE_CODES: &'static [&'static str] = &["01", "02"];

    /// Wire code
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderChangeCode::Update => "01",
            OrderChangeCode::Cancel => "02",
        }
    }
}

impl fmt::Display for OrderChangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement returned by every order placement, update and cancel
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderAck {
    /// Exchange forwarding organisation number
    pub krx_org_no: String,
    /// Order number assigned by the broker
    pub order_no: String,
    /// Order time (`HHMMSS`)
    pub order_time: String,
}

static ORDER_ACK: AliasTable = AliasTable::new(
    "order_ack",
    &[
        FieldSpec::trimmed("krx_org_no", "KRX_FWDG_ORD_ORGNO"),
        FieldSpec::trimmed("order_no", "ODNO"),
        FieldSpec::trimmed("order_time", "ORD_TMD"),
    ],
);

impl WireRecord for OrderAck {
    fn schema() -> &'static AliasTable {
        &ORDER_ACK
    }
}

/// Unexecuted overseas order
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaUnexecuted {
    /// Order date (`YYYYMMDD`)
    pub order_date: String,
    /// Ordering branch number
    pub order_branch_no: String,
    /// Order number
    pub order_no: String,
    /// Original order number, set on amended or cancelled orders
    pub origin_order_no: String,
    /// Product number
    pub symbol: String,
    /// Product name
    pub product_name: String,
    /// Side code (01 sell, 02 buy)
    pub trade_type: String,
    /// Side name
    pub trade_type_name: String,
    /// Change code (01 update, 02 cancel)
    pub change_code: String,
    /// Change code name
    pub change_code_name: String,
    /// Reject reason
    pub reject_reason: String,
    /// Reject reason name
    pub reject_reason_name: String,
    /// Order time (`HHMMSS`)
    pub order_time: String,
    /// Market name
    pub market_name: String,
    /// Trade currency code
    pub currency_code: String,
    /// Nation code
    pub nation_code: String,
    /// Nation name
    pub nation_name: String,
    /// Ordered quantity
    pub order_qty: Decimal,
    /// Executed quantity
    pub exec_qty: Decimal,
    /// Unexecuted quantity
    pub unexec_qty: Decimal,
    /// Order price
    pub order_price: Decimal,
    /// Execution price
    pub exec_price: Decimal,
    /// Executed amount
    pub exec_amt: Decimal,
    /// Exchange code
    pub market_code: String,
    /// Processing status name
    pub status_name: String,
    /// Loan type code
    pub loan_code: String,
    /// Loan date
    pub loan_date: String,
    /// Extended hours request flag
    pub extended_hours: String,
}

static OVERSEA_UNEXECUTED: AliasTable = AliasTable::new(
    "oversea_unexecuted",
    &[
        FieldSpec::text("order_date", "ord_dt"),
        FieldSpec::text("order_branch_no", "ord_gno_brno"),
        FieldSpec::trimmed("order_no", "odno"),
        FieldSpec::trimmed("origin_order_no", "orgn_odno").or(""),
        FieldSpec::trimmed("symbol", "pdno"),
        FieldSpec::trimmed("product_name", "prdt_name"),
        FieldSpec::text("trade_type", "sll_buy_dvsn_cd"),
        FieldSpec::trimmed("trade_type_name", "sll_buy_dvsn_cd_name"),
        FieldSpec::text("change_code", "rvse_cncl_dvsn_cd").or(""),
        FieldSpec::trimmed("change_code_name", "rvse_cncl_dvsn_cd_name").or(""),
        FieldSpec::trimmed("reject_reason", "rjct_rson").or(""),
        FieldSpec::trimmed("reject_reason_name", "rjct_rson_name").or(""),
        FieldSpec::text("order_time", "ord_tmd"),
        FieldSpec::trimmed("market_name", "tr_mket_name"),
        FieldSpec::text("currency_code", "tr_crcy_cd"),
        FieldSpec::text("nation_code", "natn_cd"),
        FieldSpec::trimmed("nation_name", "natn_kor_name"),
        FieldSpec::decimal("order_qty", "ft_ord_qty"),
        FieldSpec::decimal("exec_qty", "ft_ccld_qty"),
        FieldSpec::decimal("unexec_qty", "nccs_qty"),
        FieldSpec::decimal("order_price", "ft_ord_unpr3"),
        FieldSpec::decimal("exec_price", "ft_ccld_unpr3"),
        FieldSpec::decimal("exec_amt", "ft_ccld_amt3"),
        FieldSpec::text("market_code", "ovrs_excg_cd"),
        FieldSpec::trimmed("status_name", "prcs_stat_name"),
        FieldSpec::text("loan_code", "loan_type_cd").or(""),
        FieldSpec::text("loan_date", "loan_dt").or(""),
        FieldSpec::text("extended_hours", "usa_amk_exts_rqst_yn").or("N"),
    ],
);

impl WireRecord for OverseaUnexecuted {
    fn schema() -> &'static AliasTable {
        &OVERSEA_UNEXECUTED
    }
}

/// Row of the overseas order history
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaOrderHistoryRow {
    /// Order date (`YYYYMMDD`)
    pub order_date: String,
    /// Ordering branch number
    pub order_branch_no: String,
    /// Order number
    pub order_no: String,
    /// Original order number
    pub origin_order_no: String,
    /// Side code (01 sell, 02 buy)
    pub trade_type: String,
    /// Side name
    pub trade_type_name: String,
    /// Change code (01 update, 02 cancel)
    pub change_code: String,
    /// Change code name
    pub change_code_name: String,
    /// Product number
    pub symbol: String,
    /// Product name
    pub product_name: String,
    /// Ordered quantity
    pub order_qty: Decimal,
    /// Order price
    pub order_price: Decimal,
    /// Executed quantity
    pub exec_qty: Decimal,
    /// Execution price
    pub exec_price: Decimal,
    /// Executed amount
    pub exec_amt: Decimal,
    /// Unexecuted quantity
    pub unexec_qty: Decimal,
    /// Processing status name
    pub status_name: String,
    /// Reject reason
    pub reject_reason: String,
    /// Order time (`HHMMSS`)
    pub order_time: String,
    /// Market name
    pub market_name: String,
    /// Nation code
    pub nation_code: String,
    /// Nation name
    pub nation_name: String,
    /// Exchange code as reported by the broker
    pub market_code: String,
    /// Trade currency code
    pub currency_code: String,
    /// Order date in local time
    pub order_date_kst: String,
    /// Order time in local time
    pub order_time_kst: String,
    /// Loan type code
    pub loan_code: String,
    /// Order channel
    pub channel: String,
    /// Loan date
    pub loan_date: String,
    /// Reject reason name
    pub reject_reason_name: String,
}

static OVERSEA_ORDER_HISTORY_ROW: AliasTable = AliasTable::new(
    "oversea_order_history_row",
    &[
        FieldSpec::text("order_date", "ord_dt"),
        FieldSpec::text("order_branch_no", "ord_gno_brno"),
        FieldSpec::trimmed("order_no", "odno"),
        FieldSpec::trimmed("origin_order_no", "orgn_odno").or(""),
        FieldSpec::text("trade_type", "sll_buy_dvsn_cd"),
        FieldSpec::trimmed("trade_type_name", "sll_buy_dvsn_cd_name"),
        FieldSpec::text("change_code", "rvse_cncl_dvsn").or(""),
        FieldSpec::trimmed("change_code_name", "rvse_cncl_dvsn_name").or(""),
        FieldSpec::trimmed("symbol", "pdno"),
        FieldSpec::trimmed("product_name", "prdt_name"),
        FieldSpec::decimal("order_qty", "ft_ord_qty"),
        FieldSpec::decimal("order_price", "ft_ord_unpr3"),
        FieldSpec::decimal("exec_qty", "ft_ccld_qty"),
        FieldSpec::decimal("exec_price", "ft_ccld_unpr3"),
        FieldSpec::decimal("exec_amt", "ft_ccld_amt3"),
        FieldSpec::decimal("unexec_qty", "nccs_qty"),
        FieldSpec::trimmed("status_name", "prcs_stat_name"),
        FieldSpec::trimmed("reject_reason", "rjct_rson").or(""),
        FieldSpec::text("order_time", "ord_tmd"),
        FieldSpec::trimmed("market_name", "tr_mket_name"),
        FieldSpec::text("nation_code", "tr_natn"),
        FieldSpec::trimmed("nation_name", "tr_natn_name"),
        FieldSpec::text("market_code", "ovrs_excg_cd"),
        FieldSpec::text("currency_code", "tr_crcy_cd"),
        FieldSpec::text("order_date_kst", "dmst_ord_dt").or(""),
        FieldSpec::text("order_time_kst", "thco_ord_tmd").or(""),
        FieldSpec::text("loan_code", "loan_type_cd").or(""),
        FieldSpec::trimmed("channel", "mdia_dvsn_name").or(""),
        FieldSpec::text("loan_date", "loan_dt").or(""),
        FieldSpec::trimmed("reject_reason_name", "rjct_rson_name").or(""),
    ],
);

impl WireRecord for OverseaOrderHistoryRow {
    fn schema() -> &'static AliasTable {
        &OVERSEA_ORDER_HISTORY_ROW
    }
}
