/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # KIS Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use kis_client::prelude::*;
//!
//! let config = Config::with_credentials("https://example.com", "key", "secret");
//! let client = Client::new(config);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ErrorKind, KisResult};

// ============================================================================
// CLIENTS
// ============================================================================

/// Asynchronous client
pub use crate::application::client::Client;

/// Synchronous client
pub use crate::application::blocking::BlockingClient;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Account service trait
pub use crate::application::interfaces::account::AccountService;

/// Market service trait
pub use crate::application::interfaces::market::MarketService;

/// Order service trait
pub use crate::application::interfaces::order::OrderService;

// ============================================================================
// SCHEMA AND TRANSPORT
// ============================================================================

/// Alias tables and validation rules
pub use crate::model::schema::{AliasTable, FieldSpec, WireKind, WireRecord};
pub use crate::model::validation::Rule;

/// Request descriptors
pub use crate::model::http::{HeaderSet, HttpVerb, RequestDescriptor};

/// Pagination
pub use crate::model::pagination::{Continuation, Cursor, PageState};

/// Authentication models
pub use crate::model::auth::{AccessToken, HashKeyResponse};

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request payloads
pub use crate::model::requests::{
    DomesticBalancePayload, DomesticDailyPricePayload, OrderFields, OverseaAskPayload,
    OverseaBalancePayload, OverseaBidPayload, OverseaChangeOrderPayload, OverseaDailyPricePayload,
    OverseaOrderHistoryPayload, OverseaQuotePayload, OverseaUnexecutedPayload, Paginated, Payload,
};

/// Responses
pub use crate::model::responses::{
    ApiResponse, DomesticBalanceResponse, DomesticDailyPriceResponse, HoldingWeight,
    OrderResponse, OverseaBalanceResponse, OverseaDailyPriceResponse, OverseaOrderHistoryResponse,
    OverseaQuoteResponse, OverseaUnexecutedResponse, PagedResponse, ResponseStatus,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Records and venue codes
pub use crate::presentation::account::{
    DomesticBalanceSummary, DomesticHolding, OverseaBalanceSummary, OverseaHolding,
};
pub use crate::presentation::market::{
    DomesticDailyPrice, OrderMarketCode, OverseaDailyPrice, OverseaQuote, OverseaTicker,
    PriceMarketCode, PricePeriod,
};
pub use crate::presentation::order::{
    OrderAck, OrderChangeCode, OverseaOrderHistoryRow, OverseaUnexecuted,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::NaiveDate;
