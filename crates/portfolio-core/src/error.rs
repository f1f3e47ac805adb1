//! Error types for the portfolio core

use thiserror::Error;

use crate::types::ProjectId;

/// Main error type for catalog and presentation operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No project with this identifier exists in the catalog
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    /// The render target for summary cards is absent
    #[error("Render target is missing")]
    MissingContainer,

    /// Two records share one identifier
    #[error("Duplicate project identifier: {0}")]
    DuplicateIdentifier(ProjectId),

    /// A record has an empty title
    #[error("Project {0} has an empty title")]
    EmptyTitle(ProjectId),

    /// A string could not be parsed as a project identifier
    #[error("Invalid project identifier: {0}")]
    InvalidIdentifier(String),

    /// Catalog or config JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Errors the page recovers from without telling the user.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CatalogError::NotFound(_) | CatalogError::MissingContainer)
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound(ProjectId(42));
        assert_eq!(format!("{}", err), "Project not found: 42");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(CatalogError::NotFound(ProjectId(7)).is_recoverable());
        assert!(CatalogError::MissingContainer.is_recoverable());
        assert!(!CatalogError::DuplicateIdentifier(ProjectId(1)).is_recoverable());
    }
}
