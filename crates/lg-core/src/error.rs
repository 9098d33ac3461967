use std::path::PathBuf;

use crate::entry::EntryId;

/// Alias for `Result<T, LgError>`.
pub type LgResult<T> = Result<T, LgError>;

/// Errors that can occur when editing a roster.
#[derive(Debug, thiserror::Error)]
pub enum LgError {
    /// The requested entry ID does not exist in the roster.
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    /// A name file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
