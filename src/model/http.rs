/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Request builder and raw HTTP dispatch
//!
//! [`build_request`] turns a rendered wire map into a [`RequestDescriptor`]: GET
//! operations carry the map in the query string, POST operations in a JSON body.
//! [`make_http_request`] sends a descriptor and returns the raw response once the
//! HTTP status is known to be successful.

use crate::constants::{CONTENT_TYPE, headers};
use crate::error::{AppError, KisResult};
use crate::model::pagination::Continuation;
use reqwest::{Client, Method, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, error};

/// HTTP verb of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpVerb {
    /// Fields go in the query string
    Get,
    /// Fields go in a JSON body signed with a hashkey
    Post,
}

impl HttpVerb {
    /// Equivalent reqwest method
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVerb::Get => f.write_str("GET"),
            HttpVerb::Post => f.write_str("POST"),
        }
    }
}

/// Ordered header list sent with a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Headers present on every request: content type, app credentials and customer type
    pub fn new(app_key: &str, app_secret: &str, customer_type: &str) -> Self {
        Self::default()
            .with(headers::CONTENT_TYPE, CONTENT_TYPE)
            .with(headers::APP_KEY, app_key.trim())
            .with(headers::APP_SECRET, app_secret.trim())
            .with(headers::CUSTOMER_TYPE, customer_type)
    }

    /// Adds or replaces a header
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name, value.to_string())),
        }
        self
    }

    /// Adds the transaction id when present
    #[must_use]
    pub fn with_tr_id(self, tr_id: Option<&str>) -> Self {
        match tr_id.filter(|t| !t.is_empty()) {
            Some(tr_id) => self.with(headers::TR_ID, tr_id),
            None => self,
        }
    }

    /// Adds the bearer token when present
    #[must_use]
    pub fn with_bearer(self, access_token: Option<&str>) -> Self {
        match access_token.filter(|t| !t.is_empty()) {
            Some(token) => self.with(headers::AUTHORIZATION, &format!("Bearer {token}")),
            None => self,
        }
    }

    /// Adds every caller supplied header, replacing existing ones with the same name
    #[must_use]
    pub fn extend<'a, I>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        extra
            .into_iter()
            .fold(self, |acc, (name, value)| acc.with(name, value))
    }

    /// Value of a header, names compared case-insensitively
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates the headers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of headers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no header is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fully formed HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub verb: HttpVerb,
    /// Target URL, query string included for GET operations
    pub url: Url,
    /// Request headers
    pub headers: HeaderSet,
    /// JSON body for POST operations
    pub body: Option<Value>,
}

/// Joins the API host and an operation path
pub fn join_url(host: &str, path: &str) -> KisResult<Url> {
    let base = Url::parse(host).map_err(|e| AppError::InvalidUrl(format!("{host}: {e}")))?;
    base.join(path)
        .map_err(|e| AppError::InvalidUrl(format!("{host}{path}: {e}")))
}

/// Builds the request descriptor of one operation
///
/// `wire` is the already rendered wire map, every value a string. GET operations
/// URL-encode it into the query string and carry no body; POST operations send it
/// as a JSON object keyed by wire alias.
pub fn build_request(
    host: &str,
    verb: HttpVerb,
    path: &str,
    wire: &Map<String, Value>,
    headers: HeaderSet,
) -> KisResult<RequestDescriptor> {
    let mut url = join_url(host, path)?;
    let body = match verb {
        HttpVerb::Get => {
            if !wire.is_empty() {
                let mut query = url.query_pairs_mut();
                for (key, value) in wire {
                    match value {
                        Value::String(s) => query.append_pair(key, s),
                        other => query.append_pair(key, &other.to_string()),
                    };
                }
            }
            None
        }
        HttpVerb::Post => Some(Value::Object(wire.clone())),
    };
    Ok(RequestDescriptor {
        verb,
        url,
        headers,
        body,
    })
}

/// Raw successful response: continuation marker plus parsed JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// Value of the `tr_cont` header
    pub continuation: Continuation,
    /// Parsed body
    pub body: Value,
}

/// Sends a request descriptor
///
/// Non-2xx statuses fail with [`AppError::HttpStatus`] carrying the body text.
/// Nothing is retried.
pub async fn make_http_request(client: &Client, request: &RequestDescriptor) -> KisResult<Response> {
    debug!("{} {}", request.verb, request.url);

    let mut builder = client.request(request.verb.method(), request.url.clone());
    for (name, value) in request.headers.iter() {
        builder = builder.header(name, value);
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::HttpStatus { status, body })
}

/// Reads the continuation marker and the JSON body of a successful response
pub async fn read_response(response: Response) -> KisResult<RawResponse> {
    let continuation = Continuation::from_header(
        response
            .headers()
            .get(headers::TR_CONT)
            .and_then(|v| v.to_str().ok()),
    );
    let text = response.text().await?;
    let body = serde_json::from_str(&text).map_err(|_| AppError::schema("$", text))?;
    Ok(RawResponse { continuation, body })
}
