pub mod customers;
pub mod models;
pub mod theme;

pub use customers::{ApiError, CustomerApiClient};
pub use models::{CustomerDetails, CustomerSummary};
pub use theme::ThemeSettings;
