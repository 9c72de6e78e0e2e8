//! Scripted in-memory `ComputeApi` used by the workflow tests.

// Standard library
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

// 3rd party crates
use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::time::Instant;

// Project imports
use crate::models::compute::{
    Instance, Operation, OperationErrorDetail, OperationErrors, OperationScope, OperationStatus,
    Page, Zone,
};
use crate::providers::gce::errors::ComputeError;
use crate::providers::ComputeApi;

/// A call received by [`ScriptedCompute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListZones { filter: String, page_token: String },
    ListInstances { zone: String, page_token: String },
    Stop { zone: String, name: String },
    GetOperation { scope: OperationScope, name: String },
}

/// Answers list calls from queued pages and operation polls from per-operation
/// scripts. An operation whose script is exhausted keeps reporting `RUNNING`.
#[derive(Default)]
pub struct ScriptedCompute {
    zone_pages: Mutex<VecDeque<Result<Page<Zone>, ComputeError>>>,
    instance_pages: Mutex<HashMap<String, VecDeque<Result<Page<Instance>, ComputeError>>>>,
    stop_failures: Mutex<HashMap<String, ComputeError>>,
    polls: Mutex<HashMap<String, VecDeque<Result<Operation, ComputeError>>>>,
    calls: Mutex<Vec<(Instant, Call)>>,
}

impl ScriptedCompute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_zone_page(&self, names: &[&str], next_page_token: &str) {
        self.zone_pages.lock().unwrap().push_back(Ok(page(
            names.iter().map(|n| Zone { name: n.to_string() }).collect(),
            next_page_token,
        )));
    }

    pub fn fail_zone_listing(&self, error: ComputeError) {
        self.zone_pages.lock().unwrap().push_back(Err(error));
    }

    pub fn push_instance_page(&self, zone: &str, names: &[&str], next_page_token: &str) {
        let instances = names
            .iter()
            .map(|n| Instance {
                name: n.to_string(),
                zone: zone_url(zone),
                status: "RUNNING".to_string(),
            })
            .collect();
        self.instance_pages
            .lock()
            .unwrap()
            .entry(zone.to_string())
            .or_default()
            .push_back(Ok(page(instances, next_page_token)));
    }

    pub fn fail_instance_listing(&self, zone: &str, error: ComputeError) {
        self.instance_pages
            .lock()
            .unwrap()
            .entry(zone.to_string())
            .or_default()
            .push_back(Err(error));
    }

    pub fn fail_stop(&self, instance: &str, error: ComputeError) {
        self.stop_failures
            .lock()
            .unwrap()
            .insert(instance.to_string(), error);
    }

    /// Queues the answers for successive polls of `operation`.
    pub fn script_polls(
        &self,
        operation: &str,
        answers: impl IntoIterator<Item = Result<Operation, ComputeError>>,
    ) {
        self.polls
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .extend(answers);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, call)| call.clone())
            .collect()
    }

    /// Instants at which `operation` was polled.
    pub fn poll_times(&self, operation: &str) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(at, call)| match call {
                Call::GetOperation { name, .. } if name == operation => Some(*at),
                _ => None,
            })
            .collect()
    }

    pub fn stopped(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Stop { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push((Instant::now(), call));
    }
}

#[async_trait]
impl ComputeApi for ScriptedCompute {
    async fn list_zones(
        &self,
        _project: &str,
        filter: &str,
        page_token: &str,
    ) -> Result<Page<Zone>, ComputeError> {
        self.record(Call::ListZones {
            filter: filter.to_string(),
            page_token: page_token.to_string(),
        });
        self.zone_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(page(Vec::new(), "")))
    }

    async fn list_instances(
        &self,
        _project: &str,
        zone: &str,
        page_token: &str,
    ) -> Result<Page<Instance>, ComputeError> {
        self.record(Call::ListInstances {
            zone: zone.to_string(),
            page_token: page_token.to_string(),
        });
        self.instance_pages
            .lock()
            .unwrap()
            .get_mut(zone)
            .and_then(|pages| pages.pop_front())
            .unwrap_or_else(|| Ok(page(Vec::new(), "")))
    }

    async fn stop_instance(
        &self,
        _project: &str,
        zone: &str,
        name: &str,
    ) -> Result<Operation, ComputeError> {
        self.record(Call::Stop {
            zone: zone.to_string(),
            name: name.to_string(),
        });
        if let Some(error) = self.stop_failures.lock().unwrap().remove(name) {
            return Err(error);
        }
        let mut op = operation(&stop_operation_name(name), OperationStatus::Pending);
        op.zone = zone_url(zone);
        Ok(op)
    }

    async fn get_operation(
        &self,
        _project: &str,
        scope: &OperationScope,
        name: &str,
    ) -> Result<Operation, ComputeError> {
        self.record(Call::GetOperation {
            scope: scope.clone(),
            name: name.to_string(),
        });
        self.polls
            .lock()
            .unwrap()
            .get_mut(name)
            .and_then(|answers| answers.pop_front())
            .unwrap_or_else(|| Ok(operation(name, OperationStatus::Running)))
    }
}

fn page<T>(items: Vec<T>, next_page_token: &str) -> Page<T> {
    Page {
        items,
        next_page_token: next_page_token.to_string(),
    }
}

pub fn zone_url(zone: &str) -> String {
    format!(
        "https://www.googleapis.com/compute/v1/projects/tenant/zones/{}",
        zone
    )
}

/// Name of the operation [`ScriptedCompute`] returns when stopping `instance`.
pub fn stop_operation_name(instance: &str) -> String {
    format!("operation-stop-{}", instance)
}

pub fn operation(name: &str, status: OperationStatus) -> Operation {
    Operation {
        name: name.to_string(),
        zone: String::new(),
        region: String::new(),
        status,
        error: None,
        target_id: 0,
        operation_type: "stop".to_string(),
    }
}

pub fn running(name: &str) -> Result<Operation, ComputeError> {
    Ok(operation(name, OperationStatus::Running))
}

pub fn done(name: &str, target_id: u64) -> Result<Operation, ComputeError> {
    let mut op = operation(name, OperationStatus::Done);
    op.target_id = target_id;
    Ok(op)
}

pub fn done_with_error(name: &str, code: &str, message: &str) -> Result<Operation, ComputeError> {
    let mut op = operation(name, OperationStatus::Done);
    op.error = Some(OperationErrors {
        errors: vec![OperationErrorDetail {
            code: code.to_string(),
            location: String::new(),
            message: message.to_string(),
        }],
    });
    Ok(op)
}

pub fn api_error(status: StatusCode, message: &str) -> ComputeError {
    ComputeError::Api {
        status,
        message: message.to_string(),
    }
}
