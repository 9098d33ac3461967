//! Error types for draws and exports.

/// Errors that can occur while exporting draw results.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// There are no groups to export.
    #[error("nothing to export: generate groups first")]
    NothingToExport,

    /// Writing CSV rows failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing to JSON failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the export file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;
