//! Client library for the customer-onboarding administrative console.
//!
//! The interesting part lives in [`deletion`]: removing a customer is a
//! three-step sequence against two subject-management systems and the
//! customer store, with short-circuit failure reporting. Everything else
//! (customer listing, detail lookup, theme settings, login) is plain
//! remote-API plumbing around it.

pub mod api;
pub mod auth;
pub mod console;
pub mod core;
pub mod deletion;
pub mod utils;

pub use utils::{format_date, format_status, normalize_subject_name};

pub use crate::core::config::ConsoleConfig;
pub use crate::core::error::{ConsoleError, Result};
pub use api::{ApiError, CustomerApiClient, CustomerDetails, CustomerSummary, ThemeSettings};
pub use auth::{AuthError, Credentials, Session};
pub use console::{Dashboard, DeleteAction};
pub use deletion::{DeletionFlow, DeletionOutcome, DeletionRequest, DeletionStep};

pub const DEFAULT_CUSTOMER_API_URL: &str = "http://localhost:8000";

pub const DEFAULT_SUBJECT_MGMT_URL: &str = "http://localhost:8100";

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
