pub mod config;
pub mod error;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
