use thiserror::Error;

/// Top-level error for console operations.
///
/// The deletion flow deliberately does NOT surface through this type: its
/// contract is to normalize every failure into a
/// [`DeletionOutcome`](crate::deletion::DeletionOutcome) instead of erroring
/// past its own boundary.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(#[from] crate::auth::AuthError),

    #[error("Customer API error: {0}")]
    Api(#[from] crate::api::ApiError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
