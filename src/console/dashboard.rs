use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::api::{ApiError, CustomerApiClient, CustomerSummary};
use crate::core::config::ConsoleConfig;
use crate::core::error::ConsoleError;
use crate::deletion::{DeletionFlow, DeletionOutcome, DeletionRequest};

/// Source of the dashboard's customer table. Re-queried only after a
/// successful deletion.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn list_onboarded(&self) -> Result<Vec<CustomerSummary>, ApiError>;
}

#[async_trait]
impl CustomerDirectory for CustomerApiClient {
    async fn list_onboarded(&self) -> Result<Vec<CustomerSummary>, ApiError> {
        CustomerApiClient::list_onboarded(self).await
    }
}

/// Blocking yes/no gate shown to the operator before anything irreversible.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Operator-facing success/failure messages. The deletion flow itself never
/// talks to the operator; this is the only place messages are emitted.
pub trait NotificationSurface: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

/// Result of one delete action on the dashboard.
#[derive(Debug)]
pub enum DeleteAction {
    /// Operator declined the confirmation; nothing was called.
    Declined,
    /// Flow completed; carries the refreshed customer table.
    Deleted { customers: Vec<CustomerSummary> },
    /// Flow did not complete; displayed state is left untouched.
    Failed { outcome: DeletionOutcome },
}

/// Caller-side coordination around the deletion flow: confirmation before,
/// notification and list refresh after.
pub struct Dashboard {
    directory: Arc<dyn CustomerDirectory>,
    flow: DeletionFlow,
    prompt: Arc<dyn ConfirmationPrompt>,
    notifier: Arc<dyn NotificationSurface>,
    customer_api_url: String,
}

impl Dashboard {
    /// Wire a dashboard against real clients. Fails fast on missing or
    /// malformed base URLs so deletion is never offered unconfigured.
    pub fn new(
        config: &ConsoleConfig,
        prompt: Arc<dyn ConfirmationPrompt>,
        notifier: Arc<dyn NotificationSurface>,
    ) -> Result<Self, ConsoleError> {
        config.validate()?;
        Ok(Self::with_parts(
            Arc::new(CustomerApiClient::new(config)),
            DeletionFlow::new(config),
            prompt,
            notifier,
            &config.customer_api_url,
        ))
    }

    pub fn with_parts(
        directory: Arc<dyn CustomerDirectory>,
        flow: DeletionFlow,
        prompt: Arc<dyn ConfirmationPrompt>,
        notifier: Arc<dyn NotificationSurface>,
        customer_api_url: &str,
    ) -> Self {
        Self {
            directory,
            flow,
            prompt,
            notifier,
            customer_api_url: customer_api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn customers(&self) -> Result<Vec<CustomerSummary>, ApiError> {
        self.directory.list_onboarded().await
    }

    /// Delete one customer end to end: confirm, run the flow, then notify
    /// and refresh the table on success only.
    pub async fn delete_customer(
        &self,
        full_name: &str,
        customer_id: &str,
    ) -> Result<DeleteAction, ApiError> {
        let message = format!("Are you sure you want to delete {full_name}?");
        if !self.prompt.confirm(&message) {
            info!("Deletion of customer '{customer_id}' declined by operator");
            return Ok(DeleteAction::Declined);
        }

        let request = DeletionRequest::new(full_name, customer_id, &self.customer_api_url);
        let outcome = self.flow.execute(&request).await;

        if outcome.is_success() {
            self.notifier.notify_success("Success! User deleted.");
            let customers = self.directory.list_onboarded().await?;
            Ok(DeleteAction::Deleted { customers })
        } else {
            warn!(
                "Delete failed at step: {}",
                outcome.failed_step().unwrap_or("unknown")
            );
            self.notifier
                .notify_failure("Failed to delete user. Please try again.");
            Ok(DeleteAction::Failed { outcome })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct PanickingDirectory;

    #[async_trait]
    impl CustomerDirectory for PanickingDirectory {
        async fn list_onboarded(&self) -> Result<Vec<CustomerSummary>, ApiError> {
            panic!("directory must not be queried");
        }
    }

    struct FixedPrompt(bool);

    impl ConfirmationPrompt for FixedPrompt {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        successes: AtomicUsize,
        failures: AtomicUsize,
    }

    impl NotificationSurface for CountingNotifier {
        fn notify_success(&self, _message: &str) {
            self.successes.fetch_add(1, Ordering::SeqCst);
        }
        fn notify_failure(&self, _message: &str) {
            self.failures.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_declined_confirmation_calls_nothing() {
        let notifier = Arc::new(CountingNotifier::default());
        let dashboard = Dashboard::with_parts(
            Arc::new(PanickingDirectory),
            DeletionFlow::new(&ConsoleConfig::default()),
            Arc::new(FixedPrompt(false)),
            notifier.clone(),
            "http://api.local",
        );

        let action = dashboard.delete_customer("Jane Doe", "2345678901").await.unwrap();
        assert!(matches!(action, DeleteAction::Declined));
        assert_eq!(notifier.successes.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.failures.load(Ordering::SeqCst), 0);
    }
}
