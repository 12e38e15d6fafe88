/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::constants::{MAX_PAGES, USER_AGENT, WIRE_DATE_FORMAT, headers, paths};
use crate::error::{AppError, KisResult};
use crate::model::auth::{AccessToken, HashKeyResponse, TokenRequest};
use crate::model::http::{
    HeaderSet, HttpVerb, RawResponse, RequestDescriptor, build_request, make_http_request,
    read_response,
};
use crate::model::pagination::{Continuation, PageState, merge_page};
use crate::model::requests::{
    DomesticBalancePayload, DomesticDailyPricePayload, OrderFields, OverseaAskPayload,
    OverseaBalancePayload, OverseaBidPayload, OverseaChangeOrderPayload, OverseaDailyPricePayload,
    OverseaOrderHistoryPayload, OverseaQuotePayload, OverseaUnexecutedPayload, Paginated, Payload,
};
use crate::model::responses::{
    ApiResponse, DomesticBalanceResponse, DomesticDailyPriceResponse, HoldingWeight,
    OrderResponse, OverseaBalanceResponse, OverseaDailyPriceResponse, OverseaOrderHistoryResponse,
    OverseaQuoteResponse, OverseaUnexecutedResponse, PagedResponse,
};
use crate::presentation::market::{OrderMarketCode, OverseaDailyPrice, PriceMarketCode};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpInternalClient;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Asynchronous client for the broker REST API
///
/// One client serves one credentials context. The bearer token is optional so the
/// same client can issue the token it later sends.
#[derive(Clone)]
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    access_token: Option<String>,
}

impl Client {
    /// Creates a client for `config`
    pub fn new(config: Config) -> KisResult<Self> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
            access_token: None,
        })
    }

    /// Uses `access_token` as bearer token for every call
    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Replaces the bearer token
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Configuration of the client
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Headers common to every request
    #[must_use]
    pub fn default_headers(&self) -> HeaderSet {
        HeaderSet::new(
            &self.config.credentials.app_key,
            &self.config.credentials.app_secret,
            &self.config.customer_type,
        )
    }

    fn account_number(&self) -> KisResult<&str> {
        self.config
            .credentials
            .account_number
            .as_deref()
            .ok_or_else(|| AppError::validation("account_number", "is not configured"))
    }

    async fn dispatch(&self, request: &RequestDescriptor) -> KisResult<RawResponse> {
        let response = make_http_request(&self.http_client, request).await?;
        read_response(response).await
    }

    /// Issues an access token for the configured app credentials
    pub async fn issue_token(&self) -> KisResult<AccessToken> {
        info!("Issuing access token");
        let body = match serde_json::to_value(TokenRequest::new(
            &self.config.credentials.app_key,
            &self.config.credentials.app_secret,
        ))? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let request = build_request(
            &self.config.rest_api.base_url,
            HttpVerb::Post,
            paths::ISSUE_TOKEN,
            &body,
            self.default_headers(),
        )?;
        let raw = self.dispatch(&request).await?;
        let token: AccessToken = serde_json::from_value(raw.body.clone())
            .map_err(|_| AppError::schema("access_token", raw.body.to_string()))?;
        debug!("Access token issued, expires in {}s", token.expires_in);
        Ok(token)
    }

    /// Signs a POST body, returning the `hashkey` header value
    pub async fn hashkey(&self, wire: &Map<String, Value>) -> KisResult<String> {
        let request = build_request(
            &self.config.rest_api.base_url,
            HttpVerb::Post,
            paths::HASHKEY,
            wire,
            self.default_headers(),
        )?;
        let raw = self.dispatch(&request).await?;
        let signed: HashKeyResponse = serde_json::from_value(raw.body.clone())
            .map_err(|_| AppError::schema("HASH", raw.body.to_string()))?;
        if signed.hash.trim().is_empty() {
            return Err(AppError::schema("HASH", signed.hash));
        }
        Ok(signed.hash.trim().to_string())
    }

    /// Builds the request of `payload` without sending it
    ///
    /// `hashkey` is attached to POST requests; callers normally get it from [`Client::hashkey`].
    pub fn build<P: Payload>(
        &self,
        payload: &P,
        access_token: Option<&str>,
        hashkey: Option<&str>,
        extra_headers: &[(&str, &str)],
    ) -> KisResult<RequestDescriptor> {
        let wire = payload.to_wire()?;
        let mut header_set = self
            .default_headers()
            .with_tr_id(Some(payload.tr_id()))
            .with_bearer(access_token);
        if let Some(hash) = hashkey {
            header_set = header_set.with(headers::HASHKEY, hash);
        }
        build_request(
            &self.config.rest_api.base_url,
            P::METHOD,
            P::URL_PATH,
            &wire,
            header_set.extend(extra_headers.iter().copied()),
        )
    }

    /// Sends `payload` with the client's bearer token
    pub async fn send<P: Payload>(&self, payload: &P) -> KisResult<P::Response> {
        self.send_with(payload, self.access_token.as_deref(), &[]).await
    }

    /// Sends `payload` with an explicit bearer token and extra headers
    ///
    /// POST payloads are signed first: the hashkey request completes before the
    /// primary request is built. Nothing is retried.
    pub async fn send_with<P: Payload>(
        &self,
        payload: &P,
        access_token: Option<&str>,
        extra_headers: &[(&str, &str)],
    ) -> KisResult<P::Response> {
        let hashkey = match P::METHOD {
            HttpVerb::Post => Some(self.hashkey(&payload.to_wire()?).await?),
            HttpVerb::Get => None,
        };
        let request = self.build(payload, access_token, hashkey.as_deref(), extra_headers)?;
        let raw = self.dispatch(&request).await?;
        P::Response::parse(raw.body, raw.continuation)
    }

    /// Sends `payload` and follows continuation pages, concatenating them in page order
    pub async fn send_all<P: Paginated>(&self, payload: P) -> KisResult<P::Response> {
        self.send_all_with(payload, self.access_token.as_deref()).await
    }

    /// Same as [`Client::send_all`] with an explicit bearer token
    pub async fn send_all_with<P: Paginated>(
        &self,
        mut payload: P,
        access_token: Option<&str>,
    ) -> KisResult<P::Response> {
        let mut acc = self.send_with(&payload, access_token, &[]).await?;
        let mut state = PageState::Initial.advance(acc.continuation(), acc.cursor());
        let mut pages = 1;
        loop {
            let cursor = match &state {
                PageState::HasMore(cursor) => cursor.clone(),
                PageState::Initial | PageState::Last => break,
            };
            if pages >= MAX_PAGES {
                warn!("Stopping after {} pages of {}", pages, P::URL_PATH);
                break;
            }
            debug!("Requesting page {} of {} with cursor {}", pages + 1, P::URL_PATH, cursor);
            payload.apply_cursor(&cursor);
            let next = self
                .send_with(
                    &payload,
                    access_token,
                    &[(headers::TR_CONT, headers::TR_CONT_NEXT)],
                )
                .await?;
            if next.continuation() == Continuation::Unknown {
                warn!("No continuation marker on page {} of {}", pages + 1, P::URL_PATH);
            }
            state = state.advance(next.continuation(), next.cursor());
            acc.extend(next);
            pages += 1;
        }
        Ok(acc)
    }

    /// Daily bars of an overseas stock from `start_date` up to `base_date`
    ///
    /// Each page ends at the oldest date of the previous one, so consecutive pages
    /// overlap by one bar; overlapping bars and bars older than `start_date` are dropped.
    pub async fn daily_price_series(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
        start_date: NaiveDate,
        base_date: Option<NaiveDate>,
    ) -> KisResult<Vec<OverseaDailyPrice>> {
        let watermark = start_date.format(WIRE_DATE_FORMAT).to_string();
        let mut payload = OverseaDailyPricePayload::new(symbol, market_code)?;
        if let Some(base_date) = base_date {
            payload = payload.with_base_date(base_date);
        }

        let mut rows: Vec<OverseaDailyPrice> = Vec::new();
        for _ in 0..MAX_PAGES {
            let page = self.send(&payload).await?;
            let oldest = page.oldest_date().map(str::to_string);
            let before = rows.len();
            merge_page(&mut rows, page.prices, |p| p.base_date.clone(), Some(&watermark));
            match oldest {
                Some(oldest) if oldest > watermark && rows.len() > before => {
                    payload.base_date = Some(oldest);
                }
                _ => break,
            }
        }
        info!("{} daily bars of {} since {}", rows.len(), symbol, watermark);
        Ok(rows)
    }
}

#[async_trait]
impl AccountService for Client {
    async fn get_domestic_balance(&self) -> Result<DomesticBalanceResponse, AppError> {
        info!("Getting domestic balance");
        self.send_all(DomesticBalancePayload::new(self.account_number()?)?)
            .await
    }

    async fn get_oversea_balance(
        &self,
        market_code: OrderMarketCode,
    ) -> Result<OverseaBalanceResponse, AppError> {
        info!("Getting overseas balance on {}", market_code);
        self.send_all(OverseaBalancePayload::new(self.account_number()?, market_code)?)
            .await
    }

    async fn get_oversea_weights(
        &self,
        market_code: OrderMarketCode,
        descending: bool,
    ) -> Result<Vec<HoldingWeight>, AppError> {
        let balance = self.get_oversea_balance(market_code).await?;
        Ok(balance.weights(descending))
    }

    async fn get_unexecuted_orders(
        &self,
        market_code: OrderMarketCode,
    ) -> Result<OverseaUnexecutedResponse, AppError> {
        info!("Getting unexecuted orders on {}", market_code);
        self.send_all(OverseaUnexecutedPayload::new(self.account_number()?, market_code)?)
            .await
    }

    async fn get_order_history(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<OverseaOrderHistoryResponse, AppError> {
        info!("Getting order history from {} to {}", start_date, end_date);
        self.send_all(OverseaOrderHistoryPayload::new(
            self.account_number()?,
            start_date,
            end_date,
        )?)
        .await
    }
}

#[async_trait]
impl MarketService for Client {
    async fn get_domestic_daily_prices(
        &self,
        symbol: &str,
    ) -> Result<DomesticDailyPriceResponse, AppError> {
        info!("Getting domestic daily prices: {}", symbol);
        self.send(&DomesticDailyPricePayload::new(symbol)?).await
    }

    async fn get_oversea_quote(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
    ) -> Result<OverseaQuoteResponse, AppError> {
        info!("Getting quote: {} on {}", symbol, market_code);
        self.send(&OverseaQuotePayload::new(symbol, market_code)?).await
    }

    async fn get_oversea_daily_prices(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
        base_date: Option<NaiveDate>,
    ) -> Result<OverseaDailyPriceResponse, AppError> {
        let mut payload = OverseaDailyPricePayload::new(symbol, market_code)?;
        if let Some(base_date) = base_date {
            payload = payload.with_base_date(base_date);
        }
        self.send(&payload).await
    }

    async fn get_oversea_price_series(
        &self,
        symbol: &str,
        market_code: PriceMarketCode,
        start_date: NaiveDate,
        base_date: Option<NaiveDate>,
    ) -> Result<Vec<OverseaDailyPrice>, AppError> {
        self.daily_price_series(symbol, market_code, start_date, base_date)
            .await
    }
}

#[async_trait]
impl OrderService for Client {
    async fn place_bid(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse, AppError> {
        info!("Buying {} {} at {}", quantity, symbol, price);
        let order = OrderFields::new(self.account_number()?, market_code, symbol, quantity, price)?;
        self.send(&OverseaBidPayload::new(order)?).await
    }

    async fn place_ask(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse, AppError> {
        info!("Selling {} {} at {}", quantity, symbol, price);
        let order = OrderFields::new(self.account_number()?, market_code, symbol, quantity, price)?;
        self.send(&OverseaAskPayload::new(order)?).await
    }

    async fn update_order(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        origin_order_no: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse, AppError> {
        info!("Updating order {} to {} at {}", origin_order_no, quantity, price);
        let order = OrderFields::new(self.account_number()?, market_code, symbol, quantity, price)?;
        self.send(&OverseaChangeOrderPayload::update(order, origin_order_no)?)
            .await
    }

    async fn cancel_order(
        &self,
        market_code: OrderMarketCode,
        symbol: &str,
        origin_order_no: &str,
        quantity: Decimal,
    ) -> Result<OrderResponse, AppError> {
        info!("Cancelling order {}", origin_order_no);
        let order = OrderFields::new(
            self.account_number()?,
            market_code,
            symbol,
            quantity,
            Decimal::ZERO,
        )?;
        self.send(&OverseaChangeOrderPayload::cancel(order, origin_order_no)?)
            .await
    }
}
