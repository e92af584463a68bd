use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use onboard_console::console::{ConfirmationPrompt, NotificationSurface};
use onboard_console::{
    format_date, format_status, ConsoleConfig, Credentials, CustomerApiClient, Dashboard,
    DeleteAction, Session,
};

/// Blocking yes/no prompt on stdin.
struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

struct StdoutNotifier;

impl NotificationSurface for StdoutNotifier {
    fn notify_success(&self, message: &str) {
        println!("{message}");
    }
    fn notify_failure(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Login gate for destructive commands, operator credentials on stdin.
fn login(config: &ConsoleConfig) -> anyhow::Result<Session> {
    let mut username = String::new();
    let mut password = String::new();
    print!("Username: ");
    std::io::stdout().flush()?;
    std::io::stdin().lock().read_line(&mut username)?;
    print!("Password: ");
    std::io::stdout().flush()?;
    std::io::stdin().lock().read_line(&mut password)?;

    let session = Session::login(
        config,
        &Credentials::new(username.trim(), password.trim()),
    )?;
    Ok(session)
}

fn usage() -> ! {
    eprintln!("Usage: onboard-console <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  customers                      list onboarded customers");
    eprintln!("  customer <iqama_id>            show one customer's full record");
    eprintln!("  theme                          show current theme settings");
    eprintln!("  delete <full_name> <iqama_id>  run the customer-deletion flow");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("onboard_console=info".parse()?),
        )
        .init();

    let config = ConsoleConfig::from_env();
    config
        .validate()
        .context("Console is not configured; set ONBOARD_API_BASE_URL and ONBOARD_SUBJECT_MGMT_URL")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("customers") => {
            let client = CustomerApiClient::new(&config);
            let customers = client.list_onboarded().await?;
            for c in &customers {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    c.iqama_id,
                    c.full_name,
                    c.mobile_number,
                    format_date(&c.created_at),
                    format_status(&c.status)
                );
            }
        }
        Some("customer") => {
            let Some(iqama_id) = args.get(1) else { usage() };
            let client = CustomerApiClient::new(&config);
            let details = client.customer_details(iqama_id).await?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Some("theme") => {
            let client = CustomerApiClient::new(&config);
            let theme = client.theme_settings_or_default().await;
            println!("{}", serde_json::to_string_pretty(&theme)?);
        }
        Some("delete") => {
            let (Some(full_name), Some(iqama_id)) = (args.get(1), args.get(2)) else {
                usage()
            };
            let session = login(&config)?;
            println!("Authenticated as {}.", session.operator());
            let dashboard =
                Dashboard::new(&config, Arc::new(StdinPrompt), Arc::new(StdoutNotifier))?;
            match dashboard.delete_customer(full_name, iqama_id).await? {
                DeleteAction::Declined => println!("Aborted."),
                DeleteAction::Deleted { customers } => {
                    println!("{} customers remaining.", customers.len());
                }
                DeleteAction::Failed { outcome } => {
                    bail!(
                        "deletion failed at step '{}'",
                        outcome.failed_step().unwrap_or("unknown")
                    );
                }
            }
        }
        _ => usage(),
    }

    Ok(())
}
