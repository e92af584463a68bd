use async_trait::async_trait;
use tracing::warn;

use super::models::{DeletionRequest, DeletionStep};

/// Per-step inverse action, invoked for every already-completed step when a
/// later step fails.
///
/// The deletion sequence has no transactional rollback: a failure at step
/// two leaves the subject removed from system A but present everywhere
/// else. This seam makes that gap explicit and overridable; the stock
/// implementation ([`NoCompensation`]) only records the partial state.
#[async_trait]
pub trait CompensationHook: Send + Sync {
    /// Called once per completed step, most recent first. Errors inside a
    /// hook are the hook's own problem; the flow's outcome is already
    /// decided by the time compensation runs.
    async fn compensate(&self, step: DeletionStep, request: &DeletionRequest);
}

/// Default hook: no inverse calls, just an audit trail of what was left
/// half-done.
pub struct NoCompensation;

#[async_trait]
impl CompensationHook for NoCompensation {
    async fn compensate(&self, step: DeletionStep, request: &DeletionRequest) {
        warn!(
            "no compensation configured: step '{}' already removed subject '{}' and will not be rolled back",
            step, request.subject_name
        );
    }
}
