//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for checking catalog files and contact
//! validation from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # List projects in presentation order
//! portfolio list
//!
//! # Show one project in full
//! portfolio show 3
//!
//! # Use a catalog file instead of the built-in entries
//! portfolio --catalog projects.json list
//!
//! # Check a catalog file
//! portfolio validate-catalog projects.json
//!
//! # Dump the active catalog as JSON
//! portfolio export
//!
//! # Run contact form validation
//! portfolio contact --name Ada --email ada@example.com --message "Hello"
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::{logging, Catalog, ContactForm, Project, ProjectId, SUCCESS_MESSAGE};

/// Portfolio - project catalog tools
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio - project catalog tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog JSON file (default: built-in projects)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all projects
    List,

    /// Show one project
    Show {
        /// Project identifier
        id: String,
    },

    /// Load and validate a catalog file
    ValidateCatalog {
        /// Path to the catalog JSON
        path: PathBuf,
    },

    /// Print the active catalog as JSON
    Export,

    /// Validate contact form input
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn print_project(project: &Project) {
    println!("{}", project.title);
    println!("  ID: {}", project.id);
    println!("  Summary: {}", project.short_summary);
    println!();
    println!("{}", project.full_summary);
    println!();
    println!("Technologies: {}", project.technologies.join(", "));
    let links = project.links();
    if links.is_empty() {
        println!("Links: none");
    } else {
        println!("Links:");
        for link in links {
            println!("  {}: {}", link.kind.detail_label(), link.url);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::List => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            if catalog.is_empty() {
                println!("No projects found.");
            } else {
                println!("Projects ({}):", catalog.len());
                println!();
                for project in catalog.list() {
                    println!("  {} {}", project.id, project.title);
                }
            }
        }
        Commands::Show { id } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            let id: ProjectId = id.parse()?;
            let project = catalog.find(id)?;
            print_project(project);
        }
        Commands::ValidateCatalog { path } => {
            let catalog = load_catalog(Some(&path))?;
            println!("Catalog OK: {} projects", catalog.len());
        }
        Commands::Export => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            println!("{}", catalog.to_json_pretty()?);
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm::new(name, email, message);
            match form.validate() {
                Ok(()) => println!("{}", SUCCESS_MESSAGE),
                Err(errors) => {
                    for error in &errors {
                        eprintln!("{}: {}", error.field.id(), error.message);
                    }
                    bail!("Contact form has {} invalid field(s)", errors.len());
                }
            }
        }
    }

    Ok(())
}
