// Standard library
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

// Project imports
use crate::models::compute::{Instance, Operation, OperationScope, Page, Zone};
use crate::providers::ComputeApi;

// Current module imports
use super::auth::{token_source, TokenSource};
use super::constants::{default_endpoint, default_request_timeout};
use super::errors::ComputeError;
use super::functions::{create_reqwest_client, list_query, send_json};
use super::types::{GceClient, GceConfig};

impl Default for GceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_token: String::new(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl GceClient {
    /// Builds a client authenticated with the configured access token, or
    /// with Application Default Credentials when none is configured.
    pub async fn connect(config: GceConfig) -> Result<Self, ComputeError> {
        let tokens: Arc<dyn TokenSource> = token_source(&config).await?;
        Self::new(config, tokens)
    }

    pub fn new(config: GceConfig, tokens: Arc<dyn TokenSource>) -> Result<Self, ComputeError> {
        let client: Client = create_reqwest_client(&config)?;
        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    fn project_url(&self, project: &str) -> String {
        format!(
            "{}/projects/{}",
            self.config.endpoint.trim_end_matches('/'),
            project
        )
    }

    /// URL of the operation resource for the given scope.
    fn operation_url(&self, project: &str, scope: &OperationScope, name: &str) -> String {
        let base: String = self.project_url(project);
        match scope {
            OperationScope::Zone(zone) => format!("{}/zones/{}/operations/{}", base, zone, name),
            OperationScope::Region(region) => {
                format!("{}/regions/{}/operations/{}", base, region, name)
            }
            OperationScope::Global => format!("{}/global/operations/{}", base, name),
        }
    }
}

#[async_trait]
impl ComputeApi for GceClient {
    async fn list_zones(
        &self,
        project: &str,
        filter: &str,
        page_token: &str,
    ) -> Result<Page<Zone>, ComputeError> {
        let url: String = format!("{}/zones", self.project_url(project));
        let request = self.client.get(&url).query(&list_query(filter, page_token));
        send_json(request, self.tokens.as_ref(), &url).await
    }

    async fn list_instances(
        &self,
        project: &str,
        zone: &str,
        page_token: &str,
    ) -> Result<Page<Instance>, ComputeError> {
        let url: String = format!("{}/zones/{}/instances", self.project_url(project), zone);
        let request = self.client.get(&url).query(&list_query("", page_token));
        send_json(request, self.tokens.as_ref(), &url).await
    }

    async fn stop_instance(
        &self,
        project: &str,
        zone: &str,
        name: &str,
    ) -> Result<Operation, ComputeError> {
        let url: String = format!(
            "{}/zones/{}/instances/{}/stop",
            self.project_url(project),
            zone,
            name
        );
        debug!(zone = %zone, instance = %name, "Requesting instance stop");
        send_json(self.client.post(&url), self.tokens.as_ref(), &url).await
    }

    async fn get_operation(
        &self,
        project: &str,
        scope: &OperationScope,
        name: &str,
    ) -> Result<Operation, ComputeError> {
        let url: String = self.operation_url(project, scope, name);
        send_json(self.client.get(&url), self.tokens.as_ref(), &url).await
    }
}
