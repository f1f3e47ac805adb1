//! Catalog Store
//!
//! The read-only, ordered set of portfolio projects. A catalog is built once
//! at startup and never changes afterwards: iteration order is presentation
//! order, and lookup is by exact identifier only.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Project, ProjectId};

/// Immutable, ordered collection of projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers and empty titles.
    pub fn new(projects: Vec<Project>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateIdentifier(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(project.id));
            }
        }
        Ok(Self { projects })
    }

    /// Parse a JSON array of projects
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "Loaded project catalog");
        Ok(catalog)
    }

    /// All projects in presentation order
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by exact identifier.
    ///
    /// A missing identifier is an ordinary `NotFound` value; callers such as
    /// the detail view recover from it silently.
    pub fn find(&self, id: ProjectId) -> CatalogResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Serialize back to the JSON form accepted by [`Catalog::from_json_str`]
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.projects)?)
    }

    /// The built-in portfolio entries
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(
    id: i64,
    title: &str,
    short_summary: &str,
    full_summary: &str,
    technologies: &[&str],
    image: &str,
) -> Project {
    Project {
        id: ProjectId(id),
        title: title.to_string(),
        short_summary: short_summary.to_string(),
        full_summary: full_summary.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: image.to_string(),
        source_url: None,
        live_url: None,
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        entry(
            1,
            "Cell Test Hardware Validation Pipeline",
            "Automated validation process for cell test hardware, reducing validation time from 23 to 4 hours.",
            "Created a comprehensive tool that automates the validation of cell test hardware across multiple lab locations. The solution includes a data pipeline with a custom front-end interface, allowing users to complete the validation process with a single button press. This innovation dramatically decreased the equipment validation time from 23 hours to just 4 hours, significantly improving lab efficiency.",
            &["Python", "SQL", "Data Visualization", "Front-end Development"],
            "assets/images/project-validation.jpg",
        ),
        entry(
            2,
            "Auction Site Platform",
            "Created an auction website for Third Coast Supply Company with over $1.2 million in transactions.",
            "Developed a comprehensive auction website for Third Coast Supply Company, enabling customers to bid on company products. The platform features robust functionality including mass product uploading, product image handling, and a responsive mobile interface. The site has successfully facilitated over $1.2 million in transactions since its launch, becoming an essential business tool for the company.",
            &["JavaScript", "HTML/CSS", "E-commerce", "Database Design"],
            "assets/images/project-auction.jpg",
        ),
        entry(
            3,
            "Battery Analysis GitHub Repository",
            "Collection of analysis scripts for processing, visualizing, and validating cell electrical test data.",
            "Created and maintained a centralized GitHub repository containing specialized analysis scripts for the Tesla battery team. These scripts provide powerful tools for processing, visualizing, and validating cell electrical test data across various testing scenarios. The repository has become a crucial resource for the team, standardizing analysis approaches and improving consistency in data interpretation.",
            &["Python", "Data Analysis", "GitHub", "Battery Testing"],
            "assets/images/project-analysis.jpg",
        ),
        entry(
            4,
            "Inventory Management System",
            "Internal inventory system with barcode functionality and document generation capabilities.",
            "Designed and implemented a comprehensive inventory management system for Third Coast Supply Company to track and maintain their product catalog. The system features barcode printing and scanning functionality, along with automated generation of Purchase Orders and Invoices in PDF format. This solution has streamlined inventory processes and improved tracking accuracy throughout the organization.",
            &["Python", "Django", "Database Design", "PDF Generation", "Barcode Technology"],
            "assets/images/project-inventory.jpg",
        ),
        entry(
            5,
            "Multi-Species Gas Diffusion Model",
            "MATLAB model for analyzing gas diffusion through membranes for combustion research.",
            "Developed a sophisticated MATLAB model for the UC Berkeley Combustion Modeling Lab that simulates multi-species gas diffusion through specialized membranes. The model was created to support graduate student research investigating flame propagation in stratified fuel mixtures. The project included designing and conducting validation experiments to measure local gas concentration, confirming the model's accuracy and enabling further research applications.",
            &["MATLAB", "Scientific Modeling", "Experimental Design", "Data Validation"],
            "assets/images/project-diffusion.jpg",
        ),
        entry(
            6,
            "Battery Performance Dashboard",
            "Automated Python and Power BI dashboard for proactive battery formation analysis.",
            "Created an automated dashboard tool using Python and Power BI that provides real-time insights into battery formation processes. This tool enables proactive analysis of battery performance metrics and identifies potential issues before they impact production. The dashboard aggregates data from multiple sources and presents key performance indicators in an intuitive visual format, allowing quick decision-making by engineering and production teams.",
            &["Python", "Power BI", "Data Analysis", "Automation"],
            "assets/images/project-dashboard.jpg",
        ),
    ]
}
