/// User agent string used in HTTP requests
pub const USER_AGENT: &str = "kis-client/0.1.0";
/// Default API host (production)
pub const DEFAULT_API_HOST: &str = "https://openapi.koreainvestment.com:9443";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Customer type sent in the `custtype` header (P = individual)
pub const DEFAULT_CUSTOMER_TYPE: &str = "P";
/// Content type sent with every request
pub const CONTENT_TYPE: &str = "application/json;charset=utf-8";
/// Return code the broker uses for success
pub const SUCCESS_RETURN_CODE: &str = "0";
/// Product code appended to the 8 digit account number
pub const DEFAULT_PRODUCT_CODE: &str = "01";
/// Canonical length of an account number
pub const ACCOUNT_NUMBER_LEN: usize = 8;
/// Raw account number lengths accepted on input
pub const ACCOUNT_NUMBER_RAW_LENS: &[usize] = &[8, 10];
/// Date format used by the broker (`YYYYMMDD`)
pub const WIRE_DATE_FORMAT: &str = "%Y%m%d";
/// Upper bound on pages fetched by a single pagination run
pub const MAX_PAGES: usize = 100;

/// Header names
pub mod headers {
    /// Content type
    pub const CONTENT_TYPE: &str = "content-type";
    /// Application key
    pub const APP_KEY: &str = "appkey";
    /// Application secret
    pub const APP_SECRET: &str = "appsecret";
    /// Customer type
    pub const CUSTOMER_TYPE: &str = "custtype";
    /// Transaction id
    pub const TR_ID: &str = "tr_id";
    /// Bearer token
    pub const AUTHORIZATION: &str = "authorization";
    /// Request signature for POST bodies
    pub const HASHKEY: &str = "hashkey";
    /// Continuation marker
    pub const TR_CONT: &str = "tr_cont";
    /// Continuation marker value sent when requesting a follow-up page
    pub const TR_CONT_NEXT: &str = "N";
}

/// URL paths per operation
pub mod paths {
    /// Access token issue
    pub const ISSUE_TOKEN: &str = "/oauth2/tokenP";
    /// Request body hashing
    pub const HASHKEY: &str = "/uapi/hashkey";
    /// Domestic daily price
    pub const DOMESTIC_DAILY_PRICE: &str = "/uapi/domestic-stock/v1/quotations/inquire-daily-price";
    /// Domestic balance
    pub const DOMESTIC_BALANCE: &str = "/uapi/domestic-stock/v1/trading/inquire-balance";
    /// Overseas current quote
    pub const OVERSEA_QUOTE: &str = "/uapi/overseas-price/v1/quotations/price";
    /// Overseas daily price
    pub const OVERSEA_DAILY_PRICE: &str = "/uapi/overseas-price/v1/quotations/dailyprice";
    /// Overseas balance
    pub const OVERSEA_BALANCE: &str = "/uapi/overseas-stock/v1/trading/inquire-balance";
    /// Overseas unexecuted orders
    pub const OVERSEA_UNEXECUTED: &str = "/uapi/overseas-stock/v1/trading/inquire-nccs";
    /// Overseas order history
    pub const OVERSEA_ORDER_HISTORY: &str = "/uapi/overseas-stock/v1/trading/inquire-ccnld";
    /// Overseas order placement
    pub const OVERSEA_ORDER: &str = "/uapi/overseas-stock/v1/trading/order";
    /// Overseas order update and cancel
    pub const OVERSEA_ORDER_CHANGE: &str = "/uapi/overseas-stock/v1/trading/order-rvsecncl";
}

/// Transaction ids per operation
pub mod tr_ids {
    /// Domestic daily price
    pub const DOMESTIC_DAILY_PRICE: &str = "FHKST01010400";
    /// Domestic balance
    pub const DOMESTIC_BALANCE: &str = "TTTC8434R";
    /// Overseas current quote
    pub const OVERSEA_QUOTE: &str = "HHDFS00000300";
    /// Overseas daily price
    pub const OVERSEA_DAILY_PRICE: &str = "HHDFS76240000";
    /// Overseas balance
    pub const OVERSEA_BALANCE: &str = "JTTT3012R";
    /// Overseas unexecuted orders
    pub const OVERSEA_UNEXECUTED: &str = "JTTT3018R";
    /// Overseas order history
    pub const OVERSEA_ORDER_HISTORY: &str = "JTTT3001R";
    /// Overseas buy order
    pub const OVERSEA_BID: &str = "JTTT1002U";
    /// Overseas sell order
    pub const OVERSEA_ASK: &str = "JTTT1006U";
    /// Overseas order update or cancel
    pub const OVERSEA_ORDER_CHANGE: &str = "JTTT1004U";
}
