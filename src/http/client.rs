//! Low-level HTTP client — `ConnectHttp`.
//!
//! One shared reqwest client, bearer-token auth on every request, uniform
//! error classification. Endpoint methods live in the domain sub-clients;
//! this layer only dispatches and decodes.

use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ErrorPayload, HttpError};
use crate::http::link::{self, NextPage};
use crate::network::API_VERSION;

/// Low-level HTTP client for the Connect REST API.
///
/// The bearer token is attached only as an `Authorization` header on
/// outgoing requests. It is never logged and there is no accessor for it.
#[derive(Clone)]
pub struct ConnectHttp {
    base_url: String,
    client: Client,
    token: String,
}

/// A fully-read API response: status, headers, body bytes.
///
/// Only produced for statuses below 400; failure statuses are classified
/// into [`HttpError`] before this envelope is built.
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode the body as JSON into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_slice(&self.body).map_err(|e| HttpError::Decode {
            status: self.status,
            source: e,
        })
    }

    /// Continuation link advertised by the response, if any.
    pub fn next_page(&self) -> Option<NextPage> {
        link::next_from_headers(&self.headers)
    }
}

impl ConnectHttp {
    pub(crate) fn new(
        base_url: &str,
        token: String,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token,
        })
    }

    /// Build a full URL for a versioned endpoint path.
    pub(crate) fn v1(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, API_VERSION, path)
    }

    /// Send a request and return the raw response envelope.
    ///
    /// `Authorization` and `Accept` headers are attached to every request;
    /// `Content-Type: application/json` only for POST and PUT. The body is
    /// read fully into memory. Statuses >= 400 are classified: a decodable
    /// error payload becomes [`HttpError::Api`], anything else
    /// [`HttpError::Decode`]. Statuses below 400 never error here.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse, HttpError> {
        debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json");
        if method == Method::POST || method == Method::PUT {
            req = req.header(CONTENT_TYPE, "application/json");
        }
        if let Some(bytes) = body {
            req = req.body(bytes);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        if status >= 400 {
            let payload: ErrorPayload =
                serde_json::from_slice(&body).map_err(|e| HttpError::Decode {
                    status,
                    source: e,
                })?;
            return Err(HttpError::Api {
                status,
                kind: payload.kind,
                message: payload.message,
            });
        }

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.send(Method::GET, url, None).await?.decode()
    }

    /// GET for list endpoints: decodes the body and extracts the
    /// continuation link from the response headers.
    pub(crate) async fn get_paged<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<(T, Option<NextPage>), HttpError> {
        let resp = self.send(Method::GET, url, None).await?;
        let next = resp.next_page();
        Ok((resp.decode()?, next))
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<T, HttpError> {
        self.send(Method::POST, url, Some(body)).await?.decode()
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<T, HttpError> {
        self.send(Method::PUT, url, Some(body)).await?.decode()
    }
}
