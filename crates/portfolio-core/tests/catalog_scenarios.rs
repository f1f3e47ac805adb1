//! End-to-end catalog and detail view scenarios
//!
//! These tests drive the catalog, the summary renderer and the detail view
//! controller together, the way the page does.

use portfolio_core::types::image::{DETAIL_FALLBACK_IMAGE, SUMMARY_FALLBACK_IMAGE};
use portfolio_core::{
    render_summaries, Catalog, CatalogError, DetailContent, DetailEvent, DetailState,
    DetailViewController, LinkKind, PresentationConfig, Project, ProjectId, ScrollLock,
    SummaryCard,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn project(id: i64, source: Option<&str>, live: Option<&str>) -> Project {
    Project {
        id: ProjectId(id),
        title: format!("Project {}", id),
        short_summary: format!("Short {}", id),
        full_summary: format!("Full description of project {}", id),
        technologies: vec!["Rust".to_string(), "Dioxus".to_string()],
        image: format!("assets/images/missing-{}.jpg", id),
        source_url: source.map(String::from),
        live_url: live.map(String::from),
    }
}

fn linked_catalog() -> Catalog {
    Catalog::new(vec![
        project(1, None, None),
        project(2, Some("https://github.com/example/two"), None),
        project(3, Some("https://github.com/example/three"), Some("https://three.example")),
    ])
    .unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_open_three_shows_record_three() {
    let catalog = Catalog::builtin();
    let config = PresentationConfig::default();
    let mut detail = DetailViewController::new();

    let content = detail.open(&catalog, ProjectId(3), &config).unwrap();
    let expected = catalog.find(ProjectId(3)).unwrap();

    assert_eq!(content.id, ProjectId(3));
    assert_eq!(content.title, expected.title);
    assert_eq!(content.full_summary, expected.full_summary);
    assert_eq!(content.technologies, expected.technologies);
    assert_eq!(detail.state(), DetailState::Open(ProjectId(3)));

    assert!(detail.close(&catalog));
    assert_eq!(detail.state(), DetailState::Closed);
    assert_eq!(detail.scroll(), ScrollLock::Released);
}

#[test]
fn test_unknown_identifiers_never_open() {
    let catalog = Catalog::builtin();
    let config = PresentationConfig::default();
    let mut detail = DetailViewController::new();

    for id in [7, 1000, -1, 0] {
        assert!(detail.open(&catalog, ProjectId(id), &config).is_none());
        assert_eq!(detail.state(), DetailState::Closed);
        assert!(matches!(
            catalog.find(ProjectId(id)),
            Err(CatalogError::NotFound(_))
        ));
    }
}

#[test]
fn test_link_controls_match_present_links() {
    let catalog = linked_catalog();
    let config = PresentationConfig::default();

    let mut cards: Vec<SummaryCard> = Vec::new();
    render_summaries(&catalog, Some(&mut cards), &config).unwrap();
    let link_counts: Vec<usize> = cards.iter().map(|c| c.links.len()).collect();
    assert_eq!(link_counts, vec![0, 1, 2]);

    for (id, expected) in [(1, 0), (2, 1), (3, 2)] {
        let content = DetailContent::resolve(&catalog, ProjectId(id), &config).unwrap();
        assert_eq!(content.links.len(), expected, "detail links for project {}", id);
    }

    let three = DetailContent::resolve(&catalog, ProjectId(3), &config).unwrap();
    assert_eq!(three.links[0].kind, LinkKind::Source);
    assert_eq!(three.links[0].label, "GitHub Repository");
    assert_eq!(cards[2].links[0].label, "GitHub");
}

#[test]
fn test_failed_images_use_context_fallbacks() {
    let catalog = linked_catalog();
    let config = PresentationConfig::default();

    let mut card = SummaryCard::from_project(catalog.find(ProjectId(1)).unwrap(), &config);
    card.image.mark_failed();

    let mut content = DetailContent::resolve(&catalog, ProjectId(1), &config).unwrap();
    content.image.mark_failed();

    assert_eq!(card.image.current(), SUMMARY_FALLBACK_IMAGE);
    assert_eq!(content.image.current(), DETAIL_FALLBACK_IMAGE);
    assert_ne!(card.image.current(), content.image.current());
}

#[test]
fn test_dismiss_triggers() {
    let catalog = Catalog::builtin();
    let dismissals = [
        DetailEvent::CloseControl,
        DetailEvent::PointerDown { on_backdrop: true },
        DetailEvent::KeyPressed("Escape".to_string()),
    ];

    for event in dismissals {
        let mut detail = DetailViewController::new();
        detail.handle(&catalog, DetailEvent::Open(ProjectId(1)));
        assert!(detail.is_open());
        assert!(detail.handle(&catalog, event.clone()), "{:?} should close", event);
        assert!(!detail.is_open());
    }
}

#[test]
fn test_clicks_inside_content_keep_view_open() {
    let catalog = Catalog::builtin();
    let mut detail = DetailViewController::new();
    detail.handle(&catalog, DetailEvent::Open(ProjectId(2)));
    assert!(!detail.handle(&catalog, DetailEvent::PointerDown { on_backdrop: false }));
    assert_eq!(detail.state(), DetailState::Open(ProjectId(2)));
}

#[test]
fn test_catalog_loaded_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(&path, linked_catalog().to_json_pretty().unwrap()).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    assert_eq!(loaded, linked_catalog());
}

#[test]
fn test_catalog_file_with_duplicates_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    let dupes = vec![project(4, None, None), project(4, None, None)];
    std::fs::write(&path, serde_json::to_string(&dupes).unwrap()).unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateIdentifier(ProjectId(4))));
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
