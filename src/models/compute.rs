// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::functions::{deserialize_target_id, resource_base_name};

/// One page of a paginated compute list call.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Empty when there are no more pages.
    #[serde(default)]
    pub next_page_token: String,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_empty()
    }
}

/// An availability zone of a project.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
}

/// A virtual machine instance, as returned by the instance listing.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    /// Full zone URL of the instance.
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub status: String,
}

impl Instance {
    /// Name of the owning zone, when the listing reported one.
    pub fn zone_name(&self) -> Option<&str> {
        if self.zone.is_empty() {
            None
        } else {
            Some(resource_base_name(&self.zone))
        }
    }
}

/// Lifecycle status of a long-running operation.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    #[default]
    Pending,
    Running,
    Done,
    #[serde(other)]
    Unknown,
}

/// Which operations endpoint an operation is polled through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationScope {
    Zone(String),
    Region(String),
    Global,
}

impl std::fmt::Display for OperationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationScope::Zone(zone) => write!(f, "zone {}", zone),
            OperationScope::Region(region) => write!(f, "region {}", region),
            OperationScope::Global => write!(f, "global"),
        }
    }
}

/// A single error reported by a completed operation.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct OperationErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OperationErrors {
    #[serde(default)]
    pub errors: Vec<OperationErrorDetail>,
}

/// A long-running operation handle.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub status: OperationStatus,
    #[serde(default)]
    pub error: Option<OperationErrors>,
    #[serde(default, deserialize_with = "deserialize_target_id")]
    pub target_id: u64,
    #[serde(default)]
    pub operation_type: String,
}

impl Operation {
    /// Scope fixed by the zone/region URLs of the operation. Zone takes
    /// precedence, then region, otherwise the operation is global.
    pub fn scope(&self) -> OperationScope {
        if !self.zone.is_empty() {
            OperationScope::Zone(resource_base_name(&self.zone).to_string())
        } else if !self.region.is_empty() {
            OperationScope::Region(resource_base_name(&self.region).to_string())
        } else {
            OperationScope::Global
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == OperationStatus::Done
    }

    /// First error reported by the operation, if any.
    pub fn first_error(&self) -> Option<&OperationErrorDetail> {
        self.error.as_ref().and_then(|e| e.errors.first())
    }
}
