// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::models::compute::{Instance, Operation, OperationScope, Page, Zone};
use crate::providers::gce::errors::ComputeError;

/// Management API of a compute provider.
///
/// This is the seam between the stop workflow and the network: the workflow
/// only ever talks to a `ComputeApi`, so the REST client can be swapped for a
/// scripted double in tests.
///
/// # Pagination
///
/// List calls return one [`Page`] at a time. Callers pass the
/// `next_page_token` of the previous page back in, starting from an empty
/// token, and stop once a page comes back with an empty token.
///
/// # Example
///
/// ```rust,ignore
/// let mut token = String::new();
/// loop {
///     let page = api.list_instances("my-project", "us-central1-a", &token).await?;
///     for instance in &page.items {
///         println!("{}", instance.name);
///     }
///     if page.is_last() {
///         break;
///     }
///     token = page.next_page_token;
/// }
/// ```
#[async_trait]
pub trait ComputeApi: Send + Sync {
    /// Lists one page of the zones of `project`.
    ///
    /// # Arguments
    ///
    /// * `filter` - Server-side filter expression, e.g. `name = us-central1-*`.
    ///   An empty filter lists every zone.
    /// * `page_token` - Token of the page to fetch, empty for the first page.
    async fn list_zones(
        &self,
        project: &str,
        filter: &str,
        page_token: &str,
    ) -> Result<Page<Zone>, ComputeError>;

    /// Lists one page of the instances in `zone`.
    async fn list_instances(
        &self,
        project: &str,
        zone: &str,
        page_token: &str,
    ) -> Result<Page<Instance>, ComputeError>;

    /// Requests that an instance be stopped.
    ///
    /// Returns the long-running operation tracking the stop. The instance is
    /// not necessarily stopped when this returns.
    async fn stop_instance(
        &self,
        project: &str,
        zone: &str,
        name: &str,
    ) -> Result<Operation, ComputeError>;

    /// Fetches the current state of an operation through the endpoint
    /// matching `scope`.
    async fn get_operation(
        &self,
        project: &str,
        scope: &OperationScope,
        name: &str,
    ) -> Result<Operation, ComputeError>;
}
