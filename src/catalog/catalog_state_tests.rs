//! Tests for CatalogState

use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_new_catalog_needs_load() {
    let catalog = CatalogState::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.status(), CatalogStatus::Empty);
    assert!(catalog.needs_load());
}

#[test]
fn test_loading_catalog_does_not_need_load() {
    let mut catalog = CatalogState::new();
    catalog.mark_loading();
    assert!(!catalog.needs_load());
}

#[test]
fn test_populated_catalog_never_needs_load() {
    let mut catalog = CatalogState::new();
    catalog.mark_loading();
    assert!(catalog.populate(names(&["bulbasaur"])));
    assert_eq!(catalog.status(), CatalogStatus::Ready);
    assert!(!catalog.needs_load());
}

#[test]
fn test_populate_only_once() {
    let mut catalog = CatalogState::new();
    catalog.populate(names(&["bulbasaur", "ivysaur"]));
    assert!(!catalog.populate(names(&["mew"])));
    assert_eq!(catalog.names(), &["bulbasaur", "ivysaur"]);
}

#[test]
fn test_failed_catalog_can_retry() {
    let mut catalog = CatalogState::new();
    catalog.mark_loading();
    catalog.mark_failed();
    assert_eq!(catalog.status(), CatalogStatus::Failed);
    assert!(catalog.needs_load());
}

#[test]
fn test_empty_response_counts_as_failure() {
    let mut catalog = CatalogState::new();
    catalog.mark_loading();
    catalog.populate(Vec::new());
    assert_eq!(catalog.status(), CatalogStatus::Failed);
    assert!(catalog.needs_load());
}

#[test]
fn test_mark_failed_keeps_ready_index() {
    let mut catalog = CatalogState::new();
    catalog.populate(names(&["mew"]));
    catalog.mark_failed();
    assert_eq!(catalog.status(), CatalogStatus::Ready);
}

#[test]
fn test_suggestions_for_uses_cached_names() {
    let mut catalog = CatalogState::new();
    assert!(catalog.suggestions_for("chu").is_empty());

    catalog.populate(names(&["pikachu", "raichu", "pichu", "mew"]));
    assert_eq!(
        catalog.suggestions_for("chu"),
        vec!["pikachu", "raichu", "pichu"]
    );
}
