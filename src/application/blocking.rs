/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::config::Config;
use crate::error::KisResult;
use crate::model::auth::AccessToken;
use crate::model::requests::{Paginated, Payload};
use tokio::runtime::{Builder, Runtime};

/// Synchronous facade over [`Client`]
///
/// Drives the asynchronous client on a private current-thread runtime, so it must not
/// be used from inside another tokio runtime.
pub struct BlockingClient {
    inner: Client,
    runtime: Runtime,
}

impl BlockingClient {
    /// Creates a blocking client for `config`
    pub fn new(config: Config) -> KisResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: Client::new(config)?,
            runtime,
        })
    }

    /// Uses `access_token` as bearer token for every call
    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.inner.set_access_token(access_token);
        self
    }

    /// Underlying asynchronous client
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Issues an access token
    pub fn issue_token(&self) -> KisResult<AccessToken> {
        self.runtime.block_on(self.inner.issue_token())
    }

    /// Sends one request
    pub fn send<P: Payload>(&self, payload: &P) -> KisResult<P::Response> {
        self.runtime.block_on(self.inner.send(payload))
    }

    /// Sends one request with an explicit bearer token and extra headers
    pub fn send_with<P: Payload>(
        &self,
        payload: &P,
        access_token: Option<&str>,
        extra_headers: &[(&str, &str)],
    ) -> KisResult<P::Response> {
        self.runtime
            .block_on(self.inner.send_with(payload, access_token, extra_headers))
    }

    /// Sends a request and follows its continuation pages
    pub fn send_all<P: Paginated>(&self, payload: P) -> KisResult<P::Response> {
        self.runtime.block_on(self.inner.send_all(payload))
    }
}
