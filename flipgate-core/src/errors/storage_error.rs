//! Storage collaborator errors.

use super::error_code::{self, ErrorCode};

/// Errors surfaced by the storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    Sqlite { message: String },

    #[error("migration v{version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("record (de)serialization failed: {message}")]
    Serialization { message: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
