use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error, info};

use super::hooks::{CompensationHook, NoCompensation};
use super::models::{DeletionOutcome, DeletionRequest, DeletionStep};
use crate::core::config::ConsoleConfig;

const DEP_USER_DELETE_PATH: &str = "DEPuserDelete";
const ARX_USER_DELETE_PATH: &str = "ARXUserDelete";

#[derive(Serialize)]
struct SubjectDeleteBody<'a> {
    username: &'a str,
}

/// Orchestrates the three-step customer-deletion sequence.
///
/// Strictly sequential: DEP record first, ARX record second, customer store
/// last, each step gating the next. The first non-success status
/// short-circuits the rest; a transport error anywhere lands in the single
/// `Errored` bucket. Every failure mode comes back as a [`DeletionOutcome`],
/// never as an `Err` past this boundary.
///
/// The subject-management root is fixed at construction from
/// [`ConsoleConfig`]; only the customer-store root travels with the request.
pub struct DeletionFlow {
    client: Client,
    subject_mgmt_url: String,
    hook: Arc<dyn CompensationHook>,
}

impl DeletionFlow {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_hook(config, Arc::new(NoCompensation))
    }

    pub fn with_hook(config: &ConsoleConfig, hook: Arc<dyn CompensationHook>) -> Self {
        info!(
            "Deletion flow initialized (subject_mgmt={})",
            config.subject_mgmt_url
        );
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout))
                .build()
                .expect("Failed to create HTTP client"),
            subject_mgmt_url: config.subject_mgmt_url.trim_end_matches('/').to_string(),
            hook,
        }
    }

    /// Run the full sequence for one customer.
    ///
    /// Not idempotent: after a completed run the subject is gone from the
    /// DEP system, so a second run for the same customer is rejected at the
    /// first step.
    pub async fn execute(&self, request: &DeletionRequest) -> DeletionOutcome {
        info!(
            "Starting deletion flow (subject='{}', customer_id='{}')",
            request.subject_name, request.customer_id
        );

        let mut completed: Vec<DeletionStep> = Vec::new();
        let outcome = match self.run_steps(request, &mut completed).await {
            Ok(outcome) => outcome,
            Err(cause) => {
                error!("Deletion flow transport error: {cause}");
                DeletionOutcome::Errored { cause }
            }
        };

        if !outcome.is_success() {
            // Completed steps are irreversible; give the hook a chance to
            // record or undo them, most recent first.
            for step in completed.iter().rev() {
                self.hook.compensate(*step, request).await;
            }
        }

        outcome
    }

    async fn run_steps(
        &self,
        request: &DeletionRequest,
        completed: &mut Vec<DeletionStep>,
    ) -> Result<DeletionOutcome, reqwest::Error> {
        let body = SubjectDeleteBody {
            username: &request.subject_name,
        };

        let status = self
            .subject_delete(DeletionStep::First, DEP_USER_DELETE_PATH, &body)
            .await?;
        if status != StatusCode::OK {
            error!("First step rejected (status {status})");
            return Ok(DeletionOutcome::Rejected {
                step: DeletionStep::First,
                status: status.as_u16(),
            });
        }
        completed.push(DeletionStep::First);

        let status = self
            .subject_delete(DeletionStep::Second, ARX_USER_DELETE_PATH, &body)
            .await?;
        if status != StatusCode::OK {
            error!("Second step rejected (status {status})");
            return Ok(DeletionOutcome::Rejected {
                step: DeletionStep::Second,
                status: status.as_u16(),
            });
        }
        completed.push(DeletionStep::Second);

        // The customer store's response is not status-checked; the call
        // completing at the transport level counts as overall success.
        let url = format!("{}/customers/{}", request.customer_api_url, request.customer_id);
        debug!("Calling final step: DELETE {url}");
        let response = self.client.delete(&url).send().await?;
        debug!("Final step status: {}", response.status());
        completed.push(DeletionStep::Final);

        info!(
            "Deletion flow completed (subject='{}', customer_id='{}')",
            request.subject_name, request.customer_id
        );
        Ok(DeletionOutcome::Completed)
    }

    async fn subject_delete(
        &self,
        step: DeletionStep,
        path: &str,
        body: &SubjectDeleteBody<'_>,
    ) -> Result<StatusCode, reqwest::Error> {
        let url = format!("{}/{}", self.subject_mgmt_url, path);
        debug!("Calling {step} step: POST {url} (username='{}')", body.username);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        // Drain the body even when it goes unused; a mid-stream failure here
        // is a transport error like any other.
        let text = response.text().await?;
        debug!("{step} step status: {status}, response: {text}");

        Ok(status)
    }
}
