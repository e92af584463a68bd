pub mod flow;
pub mod hooks;
pub mod models;

pub use flow::DeletionFlow;
pub use hooks::{CompensationHook, NoCompensation};
pub use models::{DeletionOutcome, DeletionRequest, DeletionStep};
