pub mod dashboard;

pub use dashboard::{
    ConfirmationPrompt, CustomerDirectory, Dashboard, DeleteAction, NotificationSurface,
};
