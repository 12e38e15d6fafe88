use kis_client::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let account = config
        .credentials
        .account_number
        .clone()
        .ok_or("KIS_ACCOUNT_NUMBER is not set")?;

    let client = BlockingClient::new(config)?;
    let token = client.issue_token()?;
    let client = client.with_access_token(token.access_token);

    let order = OrderFields::new(
        &account,
        OrderMarketCode::Nasdaq,
        "AAPL",
        Decimal::ONE,
        Decimal::from_str("100.00")?,
    )?;
    let response = client.send(&OverseaBidPayload::new(order)?)?;
    info!("Order placed: {}", response.ack);

    let unexecuted = client.send_all(OverseaUnexecutedPayload::new(&account, OrderMarketCode::Nasdaq)?)?;
    info!("{} unexecuted orders", unexecuted.orders.len());

    Ok(())
}
