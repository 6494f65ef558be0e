//! # Square Connect SDK
//!
//! A Rust client for the Square Connect v1 REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Error types, network constants, domain models
//! 2. **HTTP** — `ConnectHttp`: authenticated dispatch, query encoding,
//!    `Link`-header pagination
//! 3. **High-Level Client** — `ConnectClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use squareup_connect::prelude::*;
//!
//! let client = ConnectClient::builder()
//!     .access_token("sq0atp-...")
//!     .build()?;
//!
//! let business = client.merchants().retrieve_business().await?;
//!
//! let mut page = client.employees().list(&ListEmployeesParams::default()).await?;
//! while let Some(next) = page.next.take() {
//!     page = client.employees().list_url(&next).await?;
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): models, request params, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP layer: authenticated dispatch, query encoding, pagination.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ConnectClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — merchant
    pub use crate::domain::merchant::{
        Coordinates, GlobalAddress, Merchant, MerchantLocationDetails, PhoneNumber,
    };

    // Domain types — employee
    pub use crate::domain::employee::{
        CreateEmployeeParams, Employee, EmployeeStatus, ListEmployeesParams,
        UpdateEmployeeParams,
    };

    // Domain types — role
    pub use crate::domain::role::{CreateRoleParams, ListRolesParams, Role, UpdateRoleParams};

    // Errors
    pub use crate::error::{HttpError, QueryError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Pagination
    pub use crate::http::{NextPage, Page, QueryParams};

    // Client + sub-clients
    pub use crate::client::{
        ConnectClient, ConnectClientBuilder, EmployeesClient, MerchantsClient, RolesClient,
    };
}
