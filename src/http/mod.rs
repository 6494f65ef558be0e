//! HTTP layer — authenticated dispatch, query encoding, `Link` pagination.

pub mod client;
pub mod link;
pub mod query;

pub use client::{ApiResponse, ConnectHttp};
pub use link::{NextPage, Page};
pub use query::QueryParams;
