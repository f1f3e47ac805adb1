//! Core types for the portfolio catalog

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub mod image;
pub mod project;

pub use image::{DisplayContext, ImageSource};
pub use project::{ExternalLink, LinkKind, Project};

/// Unique identifier for a project record
///
/// The identifier is the sole lookup key for the detail view and is carried
/// by every "More Details" trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl ProjectId {
    /// Get the raw integer value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProjectId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ProjectId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProjectId)
            .map_err(|_| CatalogError::InvalidIdentifier(s.to_string()))
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_parse() {
        assert_eq!("3".parse::<ProjectId>().unwrap(), ProjectId(3));
        assert_eq!(" -1 ".parse::<ProjectId>().unwrap(), ProjectId(-1));
    }

    #[test]
    fn test_project_id_parse_rejects_garbage() {
        let err = "three".parse::<ProjectId>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidIdentifier(ref s) if s == "three"));
    }

    #[test]
    fn test_project_id_display() {
        assert_eq!(ProjectId(6).to_string(), "6");
    }

    #[test]
    fn test_project_id_serde_is_bare_integer() {
        let json = serde_json::to_string(&ProjectId(4)).unwrap();
        assert_eq!(json, "4");
        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectId(4));
    }
}
