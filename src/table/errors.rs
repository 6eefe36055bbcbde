use thiserror::Error;

use crate::utils::UtilsError;

/// Errors raised while building, loading or querying a lookup table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table build fault: {0}")]
    BuildFault(String),
    #[error("Invalid exported table: {0}")]
    InvalidExport(String),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
