use kis_client::application::client::Client;
use kis_client::application::config::Config;
use kis_client::application::interfaces::account::AccountService;
use kis_client::application::interfaces::market::MarketService;
use kis_client::presentation::market::{OrderMarketCode, PriceMarketCode};
use kis_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    let client = Client::new(Config::new())?;
    let token = client.issue_token().await?;
    info!("Token issued, expires at {:?}", token.expires_at);
    let client = client.with_access_token(token.access_token);

    let quote = client
        .get_oversea_quote("AAPL", PriceMarketCode::Nasdaq)
        .await?;
    info!("Quote: {}", quote);

    let balance = client.get_oversea_balance(OrderMarketCode::Nasdaq).await?;
    info!("Balance:\n{}", balance);

    for weight in client
        .get_oversea_weights(OrderMarketCode::Nasdaq, true)
        .await?
    {
        info!("{}: {}", weight.symbol, weight.weight);
    }

    Ok(())
}
