use crate::{db::dao::DaoLayerError, error::AppError};

pub mod actions;
mod entry;
pub mod health;
pub mod projects;
pub mod validators;

pub use entry::{app, router};

/// Collaborator failures surface as a fixed 500; the cause is only logged.
pub(crate) fn store_failure(err: DaoLayerError, message: &'static str) -> AppError {
    tracing::error!(error = %err, "{message}");
    AppError::internal(message)
}
