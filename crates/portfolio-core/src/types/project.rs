//! Project record - one entry in the portfolio catalog

use serde::{Deserialize, Deserializer, Serialize};

use super::ProjectId;

/// The two optional external links a project may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Source repository (GitHub)
    Source,
    /// Live demo
    Live,
}

impl LinkKind {
    /// Label shown on summary cards
    pub fn summary_label(&self) -> &'static str {
        match self {
            LinkKind::Source => "GitHub",
            LinkKind::Live => "Live Demo",
        }
    }

    /// Label shown in the detail view
    pub fn detail_label(&self) -> &'static str {
        match self {
            LinkKind::Source => "GitHub Repository",
            LinkKind::Live => "Live Demo",
        }
    }

    /// Stable name, unique per kind; used as the render key of link controls
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Source => "source",
            LinkKind::Live => "live",
        }
    }
}

/// A present external link (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub kind: LinkKind,
    pub url: String,
}

/// A single portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique, stable identifier
    pub id: ProjectId,
    /// Display title (non-empty)
    pub title: String,
    /// Text shown on the summary card
    pub short_summary: String,
    /// Text shown only in the detail view
    pub full_summary: String,
    /// Technologies in presentation order
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Image path or URI; may fail to load
    pub image: String,
    /// Source repository link
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Live demo link
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl Project {
    /// Present links, source first.
    pub fn links(&self) -> Vec<ExternalLink> {
        [
            (LinkKind::Source, &self.source_url),
            (LinkKind::Live, &self.live_url),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| ExternalLink {
                    kind,
                    url: u.to_string(),
                })
        })
        .collect()
    }
}

/// Empty strings mean "no link"
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
