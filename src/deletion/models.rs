use serde::Serialize;

use crate::utils::normalize_subject_name;

/// One invocation of the deletion sequence. Built fresh per call, never
/// persisted, immutable once constructed.
#[derive(Debug, Clone)]
pub struct DeletionRequest {
    /// Whitespace-stripped identity handle, the deletion key for the
    /// subject-management pair.
    pub subject_name: String,
    /// Opaque customer key, used only against the customer store.
    pub customer_id: String,
    /// Root of the customer store targeted by the final step.
    pub customer_api_url: String,
}

impl DeletionRequest {
    /// Normalization of `subject_name` is nominally the caller's job, but
    /// the constructor strips whitespace again so an unnormalized handle
    /// can never reach the wire.
    pub fn new(
        subject_name: impl Into<String>,
        customer_id: impl Into<String>,
        customer_api_url: impl Into<String>,
    ) -> Self {
        let customer_api_url: String = customer_api_url.into();
        Self {
            subject_name: normalize_subject_name(&subject_name.into()),
            customer_id: customer_id.into(),
            customer_api_url: customer_api_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Fixed position of a remote call within the deletion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionStep {
    /// DEP user record, subject-management system A.
    First,
    /// ARX access-control record, subject-management system B.
    Second,
    /// Customer store removal.
    Final,
}

impl DeletionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionStep::First => "first",
            DeletionStep::Second => "second",
            DeletionStep::Final => "final",
        }
    }
}

impl std::fmt::Display for DeletionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of running the full sequence.
///
/// `Completed` means all three calls ran in order and succeeded. `Rejected`
/// names exactly the first step whose response carried a non-success status;
/// nothing after it was attempted. `Errored` is the transport-failure bucket
/// (connect, timeout, body read, serialization) caught at the outermost
/// scope; it carries the underlying error but not the step that threw.
#[derive(Debug)]
pub enum DeletionOutcome {
    Completed,
    Rejected { step: DeletionStep, status: u16 },
    Errored { cause: reqwest::Error },
}

impl DeletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeletionOutcome::Completed)
    }

    /// Step label for operator-facing messages and audit logs:
    /// the rejected step's name, `"exception"` for transport failures,
    /// `None` on success.
    pub fn failed_step(&self) -> Option<&'static str> {
        match self {
            DeletionOutcome::Completed => None,
            DeletionOutcome::Rejected { step, .. } => Some(step.as_str()),
            DeletionOutcome::Errored { .. } => Some("exception"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_normalizes_subject_name() {
        let request = DeletionRequest::new("Jane Doe", "2345678901", "http://api.local");
        assert_eq!(request.subject_name, "JaneDoe");
    }

    #[test]
    fn test_request_keeps_normalized_name_intact() {
        let request = DeletionRequest::new("JaneDoe", "2345678901", "http://api.local");
        assert_eq!(request.subject_name, "JaneDoe");
    }

    #[test]
    fn test_request_strips_trailing_slash() {
        let request = DeletionRequest::new("JaneDoe", "1", "http://api.local/");
        assert_eq!(request.customer_api_url, "http://api.local");
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(DeletionStep::First.as_str(), "first");
        assert_eq!(DeletionStep::Second.as_str(), "second");
        assert_eq!(DeletionStep::Final.as_str(), "final");
    }

    #[test]
    fn test_failed_step_labels() {
        assert_eq!(DeletionOutcome::Completed.failed_step(), None);
        let rejected = DeletionOutcome::Rejected {
            step: DeletionStep::Second,
            status: 500,
        };
        assert_eq!(rejected.failed_step(), Some("second"));
        assert!(!rejected.is_success());
    }
}
