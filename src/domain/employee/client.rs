//! Employees sub-client — create, update, retrieve, list.

use crate::client::ConnectClient;
use crate::domain::employee::{
    CreateEmployeeParams, Employee, ListEmployeesParams, UpdateEmployeeParams,
};
use crate::error::SdkError;
use crate::http::link::{NextPage, Page};
use crate::http::query;

/// Sub-client for employee operations.
pub struct Employees<'a> {
    pub(crate) client: &'a ConnectClient,
}

impl<'a> Employees<'a> {
    /// Create an employee for the business.
    pub async fn create(&self, params: &CreateEmployeeParams) -> Result<Employee, SdkError> {
        let url = self.client.http.v1("/me/employees");
        let body = serde_json::to_vec(params)?;
        Ok(self.client.http.post(&url, body).await?)
    }

    /// Modify the details of an employee.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateEmployeeParams,
    ) -> Result<Employee, SdkError> {
        let url = self.client.http.v1(&format!("/me/employees/{id}"));
        let body = serde_json::to_vec(params)?;
        Ok(self.client.http.put(&url, body).await?)
    }

    /// Retrieve the details for a single employee.
    pub async fn retrieve(&self, id: &str) -> Result<Employee, SdkError> {
        let url = self.client.http.v1(&format!("/me/employees/{id}"));
        Ok(self.client.http.get(&url).await?)
    }

    /// List summary information for the business's employees.
    ///
    /// The returned page carries a continuation link when more results
    /// exist; pass it to [`Employees::list_url`] for the next page.
    pub async fn list(&self, params: &ListEmployeesParams) -> Result<Page<Employee>, SdkError> {
        let query = query::query_string(params)?;
        let mut url = self.client.http.v1("/me/employees");
        if !query.is_empty() {
            url = format!("{url}?{query}");
        }
        self.fetch_page(&url).await
    }

    /// Fetch a page through an already-resolved continuation URL.
    pub async fn list_url(&self, next: &NextPage) -> Result<Page<Employee>, SdkError> {
        self.fetch_page(next.as_str()).await
    }

    async fn fetch_page(&self, url: &str) -> Result<Page<Employee>, SdkError> {
        let (items, next) = self.client.http.get_paged(url).await?;
        Ok(Page { items, next })
    }
}
