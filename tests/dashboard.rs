use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mockito::Server;

use onboard_console::console::{ConfirmationPrompt, NotificationSurface};
use onboard_console::deletion::DeletionFlow;
use onboard_console::{ConsoleConfig, CustomerApiClient, Dashboard, DeleteAction, DeletionOutcome};

struct AlwaysConfirm;

impl ConfirmationPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
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

fn dashboard_for(
    subjects: &Server,
    customers: &Server,
    notifier: Arc<CountingNotifier>,
) -> Dashboard {
    let config = ConsoleConfig::new(&customers.url(), &subjects.url());
    Dashboard::with_parts(
        Arc::new(CustomerApiClient::new(&config)),
        DeletionFlow::new(&config),
        Arc::new(AlwaysConfirm),
        notifier,
        &config.customer_api_url,
    )
}

#[tokio::test]
async fn successful_deletion_refreshes_the_table() {
    let mut subjects = Server::new_async().await;
    let mut customers = Server::new_async().await;

    subjects
        .mock("POST", "/DEPuserDelete")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    subjects
        .mock("POST", "/ARXUserDelete")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    customers
        .mock("DELETE", "/customers/2345678901")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let refresh = customers
        .mock("GET", "/customers/onboarded")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "full_name": "Other Person",
                "iqama_id": "1111111111",
                "mobile_number": "+966511111111",
                "dep_reference_number": "DEP-7",
                "created_at": "2026-02-20T12:00:00Z",
                "status": "onboarded"
            }]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let notifier = Arc::new(CountingNotifier::default());
    let dashboard = dashboard_for(&subjects, &customers, notifier.clone());

    let action = dashboard
        .delete_customer("Jane Doe", "2345678901")
        .await
        .unwrap();

    match action {
        DeleteAction::Deleted { customers } => {
            assert_eq!(customers.len(), 1);
            assert_eq!(customers[0].iqama_id, "1111111111");
        }
        other => panic!("expected a completed deletion, got {other:?}"),
    }
    assert_eq!(notifier.successes.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.failures.load(Ordering::SeqCst), 0);
    refresh.assert_async().await;
}

#[tokio::test]
async fn failed_deletion_leaves_the_table_alone() {
    let mut subjects = Server::new_async().await;
    let mut customers = Server::new_async().await;

    subjects
        .mock("POST", "/DEPuserDelete")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let refresh = customers
        .mock("GET", "/customers/onboarded")
        .expect(0)
        .create_async()
        .await;

    let notifier = Arc::new(CountingNotifier::default());
    let dashboard = dashboard_for(&subjects, &customers, notifier.clone());

    let action = dashboard
        .delete_customer("Jane Doe", "2345678901")
        .await
        .unwrap();

    match action {
        DeleteAction::Failed { outcome } => {
            assert!(matches!(outcome, DeletionOutcome::Rejected { .. }));
            assert_eq!(outcome.failed_step(), Some("first"));
        }
        other => panic!("expected a failed deletion, got {other:?}"),
    }
    assert_eq!(notifier.successes.load(Ordering::SeqCst), 0);
    assert_eq!(notifier.failures.load(Ordering::SeqCst), 1);
    refresh.assert_async().await;
}
