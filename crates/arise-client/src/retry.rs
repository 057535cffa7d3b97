use arise_core::models::assessment::AssessmentResult;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::backend::Backend;
use crate::config::RetryPolicy;
use crate::error::ClientError;

/// Fetch results, retrying while the backend is still scoring.
///
/// Makes one attempt plus up to `policy.max_retries` retries, waiting
/// `n * base_delay` before the n-th. Non-retryable errors return at once.
/// Cancelling `cancel` abandons both in-flight requests and pending waits.
pub async fn fetch_results_with_retry<B: Backend>(
    backend: &B,
    assessment_id: Uuid,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<AssessmentResult, ClientError> {
    let mut retry = 0;
    loop {
        let outcome = tokio::select! {
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            outcome = backend.fetch_results(assessment_id) => outcome,
        };

        match outcome {
            Ok(result) => return Ok(result),
            Err(e) if e.is_retryable() && retry < policy.max_retries => {
                retry += 1;
                let delay = policy.delay_for(retry);
                tracing::warn!(
                    %assessment_id,
                    retry,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "results not ready, retrying"
                );
                tokio::select! {
                    _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            Err(e) => return Err(e),
        }
    }
}
