use crate::error::AppError;
use crate::model::responses::OrderResponse;
use crate::presentation::market::OrderMarketCode;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Interface for the order service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Places a limit buy order
    async fn place_bid(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse, AppError>;

    /// Places a limit sell order
    async fn place_ask(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse, AppError>;

    /// Amends quantity and price of a resting order
    async fn update_order(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        origin_order_no: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse, AppError>;

    /// Cancels `quantity` shares of a resting order
    async fn cancel_order(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        origin_order_no: &str,
        quantity: Decimal,
    ) -> Result<OrderResponse, AppError>;
}
