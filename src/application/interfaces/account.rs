use crate::error::AppError;
use crate::model::responses::{
    DomesticBalanceResponse, HoldingWeight, OverseaBalanceResponse, OverseaOrderHistoryResponse,
    OverseaUnexecutedResponse,
};
use crate::presentation::market::OrderMarketCode;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the account service
///
/// Every operation runs against the account number of the client configuration and
/// follows continuation pages until the broker reports the last one.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets holdings and totals of the domestic account
    async fn get_domestic_balance(&self) -> Result<DomesticBalanceResponse, AppError>;

    /// Gets holdings and totals of the overseas account on one venue
    async fn get_oversea_balance(
        &self,
        market_code: OrderMarketCode,
    ) -> Result<OverseaBalanceResponse, AppError>;

    /// Gets the portfolio weight of every overseas holding on one venue
    ///
    /// # Arguments
    /// * `market_code` - Ordering venue
    /// * `descending` - Heaviest holding first when `true`
    async fn get_oversea_weights(
        &self,
        market_code: OrderMarketCode,
        descending: bool,
    ) -> Result<Vec<HoldingWeight>, AppError>;

    /// Gets the unexecuted overseas orders on one venue
    async fn get_unexecuted_orders(
        &self,
        market_code: OrderMarketCode,
    ) -> Result<OverseaUnexecutedResponse, AppError>;

    /// Gets the overseas order history between two dates, both included
    async fn get_order_history(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<OverseaOrderHistoryResponse, AppError>;
}
