use crate::error::AppError;
use crate::model::responses::{DomesticDailyPriceResponse, OverseaDailyPriceResponse, OverseaQuoteResponse};
use crate::presentation::market::{OverseaDailyPrice, PriceMarketCode};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the market service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets the daily bars of a domestic stock
    async fn get_domestic_daily_prices(
        &self,
        symbol: &str,
    ) -> Result<DomesticDailyPriceResponse, AppError>;

    /// Gets the current quote of an overseas stock
    async fn get_oversea_quote(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
    ) -> Result<OverseaQuoteResponse, AppError>;

    /// Gets one page of daily bars of an overseas stock ending at `base_date` (today when `None`)
    async fn get_oversea_daily_prices(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
        base_date: Option<NaiveDate>,
    ) -> Result<OverseaDailyPriceResponse, AppError>;

    /// Gets every daily bar of an overseas stock from `start_date` up to `base_date`
    ///
    /// Pages are requested backwards in time until `start_date` is covered.
    /// Bars are returned most recent first without duplicates.
    async fn get_oversea_price_series(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
        start_date: NaiveDate,
        base_date: Option<NaiveDate>,
    ) -> Result<Vec<OverseaDailyPrice>, AppError>;
}
