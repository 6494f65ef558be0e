//! Network URL constants for the Connect SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://connect.squareup.com";

/// Versioned path segment prepended to every endpoint path.
pub const API_VERSION: &str = "v1";
