use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Carries the user-facing message for the missing entity.
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(message: &str) -> Self { Self::NotFound(message.to_string()) }

    /// Log and count a failed statement.
    pub(crate) fn store(op: &'static str, e: DbErr) -> Self {
        common::metrics::record_store_error();
        error!(op, err = %e, "store statement failed");
        Self::Db(e.to_string())
    }
}
