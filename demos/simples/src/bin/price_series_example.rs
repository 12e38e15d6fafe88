use chrono::{Duration, Utc};
use kis_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new())?;
    let token = client.issue_token().await?;
    let client = client.with_access_token(token.access_token);

    let start = Utc::now().date_naive() - Duration::days(365);
    let series = client
        .get_oversea_price_series("TSLA", PriceMarketCode::Nasdaq, start, None)
        .await?;
    info!("{} bars since {}", series.len(), start);
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        info!("latest {} close {:?}", first.base_date, first.close);
        info!("oldest {} close {:?}", last.base_date, last.close);
    }

    Ok(())
}
