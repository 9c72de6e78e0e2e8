// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::StatusCode;
use tracing::{debug, info, warn};

// Project imports
use crate::models::compute::{Operation, OperationScope};
use crate::providers::gce::errors::ComputeError;
use crate::providers::ComputeApi;

// Current module imports
use super::errors::OperationError;
use super::types::WaitPolicy;

/// Whether a failed status poll may be retried. Only "service unavailable"
/// qualifies.
pub fn is_retryable(error: &ComputeError) -> bool {
    error.status() == Some(StatusCode::SERVICE_UNAVAILABLE)
}

/// Waits for `operation` to finish and returns its target id.
///
/// The scope of the operation is fixed here, from the handle returned by the
/// initiating call, and every poll goes through that scope's endpoint. The
/// whole wait, in-flight polls included, is bounded by `policy.wait_time`.
pub async fn wait_operation<A>(
    api: &A,
    project: &str,
    operation: Operation,
    policy: &WaitPolicy,
) -> Result<u64, OperationError>
where
    A: ComputeApi + ?Sized,
{
    let scope: OperationScope = operation.scope();
    let name: String = operation.name;

    debug!(
        operation = %name,
        operation_type = %operation.operation_type,
        scope = %scope,
        "Waiting up to {}s for operation",
        policy.wait_time.as_secs()
    );

    match tokio::time::timeout(
        policy.wait_time,
        poll_until_done(api, project, &scope, &name, policy.poll_interval),
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(operation = %name, "Gave up waiting for operation");
            Err(OperationError::Timeout {
                name,
                waited: policy.wait_time,
            })
        }
    }
}

async fn poll_until_done<A>(
    api: &A,
    project: &str,
    scope: &OperationScope,
    name: &str,
    interval: Duration,
) -> Result<u64, OperationError>
where
    A: ComputeApi + ?Sized,
{
    let mut polls: u32 = 0;
    loop {
        polls += 1;
        match api.get_operation(project, scope, name).await {
            Err(e) if is_retryable(&e) => {
                warn!(
                    operation = %name,
                    error = %e,
                    "Transient error polling operation status (will retry)"
                );
            }
            Err(e) => {
                return Err(OperationError::Poll {
                    name: name.to_string(),
                    source: e,
                });
            }
            Ok(op) if op.is_done() => return finish(name, &op, polls),
            Ok(op) => {
                debug!(
                    operation = %name,
                    status = ?op.status,
                    poll = polls,
                    "Operation not done yet"
                );
            }
        }

        tokio::time::sleep(interval).await;
    }
}

/// Outcome of an operation that reported `DONE`.
fn finish(name: &str, op: &Operation, polls: u32) -> Result<u64, OperationError> {
    if let Some(detail) = op.first_error() {
        warn!(
            operation = %name,
            code = %detail.code,
            location = %detail.location,
            "Operation completed with error"
        );
        return Err(OperationError::Failed {
            name: name.to_string(),
            detail: detail.clone(),
        });
    }

    info!(
        operation = %name,
        target_id = op.target_id,
        polls = polls,
        "Operation completed"
    );
    Ok(op.target_id)
}
