//! Merchants sub-client — business account and location queries.

use crate::client::ConnectClient;
use crate::domain::merchant::Merchant;
use crate::error::SdkError;

/// Sub-client for business account operations.
pub struct Merchants<'a> {
    pub(crate) client: &'a ConnectClient,
}

impl<'a> Merchants<'a> {
    /// Retrieve the authenticated business's account information.
    pub async fn retrieve_business(&self) -> Result<Merchant, SdkError> {
        let url = self.client.http.v1("/me");
        Ok(self.client.http.get(&url).await?)
    }

    /// List details for the business's locations, including their IDs.
    pub async fn list_locations(&self) -> Result<Vec<Merchant>, SdkError> {
        let url = self.client.http.v1("/me/locations");
        Ok(self.client.http.get(&url).await?)
    }
}
