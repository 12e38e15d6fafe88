/// Account balance and holding models
pub mod account;
/// Venue codes and price models
pub mod market;
/// Order acknowledgement and order listing models
pub mod order;
