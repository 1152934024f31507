/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::QueryParams;
use async_trait::async_trait;
use serde_json::Value;

/// Performs authenticated GET requests on behalf of a resource
///
/// Implementations own transport, authentication and timeouts. Each call to
/// [`make_request`](RequestExecutor::make_request) must attempt exactly one
/// request.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Base URL under which account resource paths are built
    fn accounts_base_url(&self) -> &str;

    /// Issues a GET to `url` and returns the decoded JSON body
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the resource
    /// * `params` - Query parameters; pairs mapped to `None` are not sent
    async fn make_request(&self, url: &str, params: &QueryParams) -> Result<Value, AppError>;
}
