//! Roles sub-client — create, update, retrieve, list.

use tracing::debug;

use crate::client::ConnectClient;
use crate::domain::role::{CreateRoleParams, ListRolesParams, Role, UpdateRoleParams};
use crate::error::SdkError;
use crate::http::link::{NextPage, Page};
use crate::http::query;

/// Sub-client for employee role operations.
pub struct Roles<'a> {
    pub(crate) client: &'a ConnectClient,
}

impl<'a> Roles<'a> {
    /// Create an employee role for the business.
    pub async fn create(&self, params: &CreateRoleParams) -> Result<Role, SdkError> {
        let url = self.client.http.v1("/me/roles");
        let body = serde_json::to_vec(params)?;
        debug!(url = %url, body_len = body.len(), "creating role");
        Ok(self.client.http.post(&url, body).await?)
    }

    /// Modify the details of an employee role.
    pub async fn update(&self, id: &str, params: &UpdateRoleParams) -> Result<Role, SdkError> {
        let url = self.client.http.v1(&format!("/me/roles/{id}"));
        let body = serde_json::to_vec(params)?;
        Ok(self.client.http.put(&url, body).await?)
    }

    /// Retrieve the details for a single role.
    pub async fn retrieve(&self, id: &str) -> Result<Role, SdkError> {
        let url = self.client.http.v1(&format!("/me/roles/{id}"));
        Ok(self.client.http.get(&url).await?)
    }

    /// List the business's employee roles.
    ///
    /// The returned page carries a continuation link when more results
    /// exist; pass it to [`Roles::list_url`] for the next page.
    pub async fn list(&self, params: &ListRolesParams) -> Result<Page<Role>, SdkError> {
        let query = query::query_string(params)?;
        let mut url = self.client.http.v1("/me/roles");
        if !query.is_empty() {
            url = format!("{url}?{query}");
        }
        debug!(url = %url, "listing roles");
        self.fetch_page(&url).await
    }

    /// Fetch a page through an already-resolved continuation URL.
    pub async fn list_url(&self, next: &NextPage) -> Result<Page<Role>, SdkError> {
        self.fetch_page(next.as_str()).await
    }

    async fn fetch_page(&self, url: &str) -> Result<Page<Role>, SdkError> {
        let (items, next) = self.client.http.get_paged(url).await?;
        Ok(Page { items, next })
    }
}
