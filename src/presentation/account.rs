/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::model::schema::{AliasTable, FieldSpec, WireRecord};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Holding of a domestic account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomesticHolding {
    /// Product number
    pub symbol: String,
    /// Product name
    pub name: String,
    /// Trade type name
    pub trade_type: String,
    /// Quantity bought the previous day
    pub prev_buy_qty: Decimal,
    /// Quantity sold the previous day
    pub prev_sell_qty: Decimal,
    /// Quantity bought today
    pub buy_qty: Decimal,
    /// Quantity sold today
    pub sell_qty: Decimal,
    /// Quantity held
    pub holding_qty: Decimal,
    /// Quantity available for orders
    pub orderable_qty: Decimal,
    /// Average purchase price
    pub avg_price: Decimal,
    /// Purchase amount
    pub purchase_amt: Decimal,
    /// Current price
    pub price: Decimal,
    /// Evaluation amount
    pub eval_amt: Decimal,
    /// Evaluated profit or loss
    pub profit_loss: Decimal,
    /// Evaluated profit or loss ratio
    pub profit_loss_ratio: Decimal,
    /// Evaluated return
    pub eval_return: Decimal,
    /// Fluctuation rate
    pub changes: Decimal,
    /// Change against the previous day
    pub changes_day: Decimal,
}

static DOMESTIC_HOLDING: AliasTable = AliasTable::new(
    "domestic_holding",
    &[
        FieldSpec::text("symbol", "pdno"),
        FieldSpec::trimmed("name", "prdt_name"),
        FieldSpec::trimmed("trade_type", "trad_dvsn_name"),
        FieldSpec::decimal("prev_buy_qty", "bfdy_buy_qty"),
        FieldSpec::decimal("prev_sell_qty", "bfdy_sll_qty"),
        FieldSpec::decimal("buy_qty", "thdt_buy_qty"),
        FieldSpec::decimal("sell_qty", "thdt_sll_qty"),
        FieldSpec::decimal("holding_qty", "hldg_qty"),
        FieldSpec::decimal("orderable_qty", "ord_psbl_qty"),
        FieldSpec::decimal("avg_price", "pchs_avg_pric"),
        FieldSpec::decimal("purchase_amt", "pchs_amt"),
        FieldSpec::decimal("price", "prpr"),
        FieldSpec::decimal("eval_amt", "evlu_amt"),
        FieldSpec::decimal("profit_loss", "evlu_pfls_amt"),
        FieldSpec::decimal("profit_loss_ratio", "evlu_pfls_rt"),
        FieldSpec::decimal("eval_return", "evlu_erng_rt"),
        FieldSpec::decimal("changes", "fltt_rt"),
        FieldSpec::decimal("changes_day", "bfdy_cprs_icdc"),
    ],
);

impl WireRecord for DomesticHolding {
    fn schema() -> &'static AliasTable {
        &DOMESTIC_HOLDING
    }
}

/// Account totals of a domestic account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomesticBalanceSummary {
    /// Total deposit
    pub deposit: i64,
    /// Amount settled the next day
    pub next_day_execution_amt: i64,
    /// Provisional settlement amount
    pub estimated_execution_amt: i64,
    /// CMA evaluation amount
    pub cma_eval_amt: i64,
    /// Amount bought the previous day
    pub prev_bid_amt: i64,
    /// Amount bought today
    pub bid_amt: i64,
    /// Automatic repayment due the next day
    pub next_auto_repay_amt: i64,
    /// Amount sold the previous day
    pub prev_ask_amt: i64,
    /// Amount sold today
    pub ask_amt: i64,
    /// Automatic repayment due at D+2
    pub d2_auto_repay_amt: i64,
    /// Charges of the previous day
    pub prev_charge: i64,
    /// Charges of today
    pub charge: i64,
    /// Total loan
    pub total_loan: i64,
    /// Securities evaluation amount
    pub eval_amt: i64,
    /// Total evaluation amount
    pub total_amt: i64,
    /// Net asset
    pub net_asset: i64,
    /// Total asset evaluation of the previous day
    pub prev_eval_amt: i64,
    /// Asset change
    pub asset_change: i64,
    /// Asset change return
    pub asset_change_return: Decimal,
}

static DOMESTIC_BALANCE_SUMMARY: AliasTable = AliasTable::new(
    "domestic_balance_summary",
    &[
        FieldSpec::integer("deposit", "dnca_tot_amt"),
        FieldSpec::integer("next_day_execution_amt", "nxdy_excc_amt"),
        FieldSpec::integer("estimated_execution_amt", "prvs_rcdl_excc_amt"),
        FieldSpec::integer("cma_eval_amt", "cma_evlu_amt"),
        FieldSpec::integer("prev_bid_amt", "bfdy_buy_amt"),
        FieldSpec::integer("bid_amt", "thdt_buy_amt"),
        FieldSpec::integer("next_auto_repay_amt", "nxdy_auto_rdpt_amt"),
        FieldSpec::integer("prev_ask_amt", "bfdy_sll_amt"),
        FieldSpec::integer("ask_amt", "thdt_sll_amt"),
        FieldSpec::integer("d2_auto_repay_amt", "d2_auto_rdpt_amt"),
        FieldSpec::integer("prev_charge", "bfdy_tlex_amt"),
        FieldSpec::integer("charge", "thdt_tlex_amt"),
        FieldSpec::integer("total_loan", "tot_loan_amt"),
        FieldSpec::integer("eval_amt", "scts_evlu_amt"),
        FieldSpec::integer("total_amt", "tot_evlu_amt"),
        FieldSpec::integer("net_asset", "nass_amt"),
        FieldSpec::integer("prev_eval_amt", "bfdy_tot_asst_evlu_amt"),
        FieldSpec::integer("asset_change", "asst_icdc_amt"),
        FieldSpec::decimal("asset_change_return", "asst_icdc_erng_rt"),
    ],
);

impl WireRecord for DomesticBalanceSummary {
    fn schema() -> &'static AliasTable {
        &DOMESTIC_BALANCE_SUMMARY
    }
}

/// Holding of an overseas account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaHolding {
    /// Product number
    pub symbol: String,
    /// Product name
    pub name: String,
    /// Evaluated profit or loss in foreign currency
    pub profit_loss: Decimal,
    /// Evaluated profit or loss ratio
    pub profit_loss_ratio: Decimal,
    /// Average purchase price
    pub purchase_avg_price: Decimal,
    /// Quantity held
    pub holding_qty: Decimal,
    /// Quantity available for orders
    pub orderable_qty: Decimal,
    /// Purchase amount in foreign currency
    pub purchase_amt: Decimal,
    /// Evaluation amount
    pub eval_amt: Decimal,
    /// Current price
    pub price: Decimal,
    /// Trade currency code
    pub currency_code: String,
}

static OVERSEA_HOLDING: AliasTable = AliasTable::new(
    "oversea_holding",
    &[
        FieldSpec::trimmed("symbol", "ovrs_pdno"),
        FieldSpec::trimmed("name", "ovrs_item_name"),
        FieldSpec::decimal("profit_loss", "frcr_evlu_pfls_amt"),
        FieldSpec::decimal("profit_loss_ratio", "evlu_pfls_rt"),
        FieldSpec::decimal("purchase_avg_price", "pchs_avg_pric"),
        FieldSpec::decimal("holding_qty", "ovrs_cblc_qty"),
        FieldSpec::decimal("orderable_qty", "ord_psbl_qty"),
        FieldSpec::decimal("purchase_amt", "frcr_pchs_amt1"),
        FieldSpec::decimal("eval_amt", "ovrs_stck_evlu_amt"),
        FieldSpec::decimal("price", "now_pric2"),
        FieldSpec::text("currency_code", "tr_crcy_cd"),
    ],
);

impl WireRecord for OverseaHolding {
    fn schema() -> &'static AliasTable {
        &OVERSEA_HOLDING
    }
}

/// Account totals of an overseas account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverseaBalanceSummary {
    /// Purchase amount in foreign currency
    pub foreign_purchase_amt: Decimal,
    /// Realized profit or loss
    pub realized_profit_loss: Decimal,
    /// Total profit or loss
    pub total_profit_loss: Decimal,
    /// Realized return
    pub realized_return: Decimal,
    /// Total evaluation amount
    pub total_eval_amt: Decimal,
    /// Total return
    pub total_return: Decimal,
    /// Foreign currency buy amount
    pub exchange_amt: Decimal,
    /// Realized profit or loss (second currency basis)
    pub realized_profit_loss2: Decimal,
    /// Foreign currency buy amount (second currency basis)
    pub exchange_amt2: Decimal,
}

static OVERSEA_BALANCE_SUMMARY: AliasTable = AliasTable::new(
    "oversea_balance_summary",
    &[
        FieldSpec::decimal("foreign_purchase_amt", "frcr_pchs_amt1"),
        FieldSpec::decimal("realized_profit_loss", "ovrs_rlzt_pfls_amt"),
        FieldSpec::decimal("total_profit_loss", "ovrs_tot_pfls"),
        FieldSpec::decimal("realized_return", "rlzt_erng_rt"),
        FieldSpec::decimal("total_eval_amt", "tot_evlu_pfls_amt"),
        FieldSpec::decimal("total_return", "tot_pftrt"),
        FieldSpec::decimal("exchange_amt", "frcr_buy_amt_smtl1"),
        FieldSpec::decimal("realized_profit_loss2", "ovrs_rlzt_pfls_amt2"),
        FieldSpec::decimal("exchange_amt2", "frcr_buy_amt_smtl2"),
    ],
);

impl WireRecord for OverseaBalanceSummary {
    fn schema() -> &'static AliasTable {
        &OVERSEA_BALANCE_SUMMARY
    }
}
