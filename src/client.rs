//! High-level client — `ConnectClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::time::Duration;

use crate::domain::employee::client::Employees;
use crate::domain::merchant::client::Merchants;
use crate::domain::role::client::Roles;
use crate::error::SdkError;
use crate::http::ConnectHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::employee::client::Employees as EmployeesClient;
pub use crate::domain::merchant::client::Merchants as MerchantsClient;
pub use crate::domain::role::client::Roles as RolesClient;

/// The primary entry point for the Connect SDK.
///
/// Holds the bearer token and the shared HTTP client; both are immutable
/// after construction, so the client is safe to share and clone across
/// tasks without locking. Provides nested sub-client accessors per
/// domain: `client.employees()`, `client.roles()`, etc.
#[derive(Clone)]
pub struct ConnectClient {
    pub(crate) http: ConnectHttp,
}

impl std::fmt::Debug for ConnectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectClient").finish_non_exhaustive()
    }
}

impl ConnectClient {
    pub fn builder() -> ConnectClientBuilder {
        ConnectClientBuilder::default()
    }

    /// Build a client for the default API URL with default transport
    /// settings.
    pub fn new(access_token: &str) -> Result<Self, SdkError> {
        Self::builder().access_token(access_token).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn merchants(&self) -> Merchants<'_> {
        Merchants { client: self }
    }

    pub fn employees(&self) -> Employees<'_> {
        Employees { client: self }
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ConnectClientBuilder {
    base_url: String,
    access_token: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl Default for ConnectClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
        }
    }
}

impl ConnectClientBuilder {
    /// Bearer token attached to every request. Required.
    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Overall request timeout on the underlying transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ConnectClient, SdkError> {
        let token = self
            .access_token
            .ok_or_else(|| SdkError::Config("access token is required".to_string()))?;

        Ok(ConnectClient {
            http: ConnectHttp::new(&self.base_url, token, self.timeout, self.connect_timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_token_is_a_config_error() {
        let err = ConnectClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn build_with_token_succeeds() {
        let client = ConnectClient::new("sq0atp-test");
        assert!(client.is_ok());
    }
}
