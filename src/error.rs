use std::fmt;

/// Error type for catalog store operations.
///
/// `NotFound` is the only variant callers are expected to branch on; the
/// other two surface failures while persisting the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record in the catalog carries the given id.
    NotFound { id: i64 },
    /// Serialization error while writing the catalog.
    Serde(String),
    /// Backing-file I/O error while writing the catalog.
    Storage(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { id } => {
                write!(f, "record not found: no record with id {} in the catalog", id)
            }
            CatalogError::Serde(msg) => write!(f, "catalog serialization error: {}", msg),
            CatalogError::Storage(msg) => write!(f, "catalog storage error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}
