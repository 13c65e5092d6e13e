use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn store_set_overwrites() {
    let mut store = MemoryStore::with("theme", "dark");
    store.set("theme", "light").unwrap();
    assert_eq!(store.value("theme"), Some("light"));
    assert_eq!(store.len(), 1);
}

// =============================================================
// FixedScheme
// =============================================================

#[test]
fn fixed_scheme_reports_signal() {
    assert!(FixedScheme::DARK.prefers_dark("q").unwrap());
    assert!(!FixedScheme::LIGHT.prefers_dark("q").unwrap());
}

#[test]
fn absent_scheme_is_unavailable() {
    let err = FixedScheme::ABSENT.prefers_dark("q").unwrap_err();
    assert!(matches!(err, ThemeError::Unavailable("matchMedia")));
}

// =============================================================
// MemoryDocument
// =============================================================

#[test]
fn marker_add_and_remove() {
    let mut doc = MemoryDocument::new();
    doc.set_marker("dark", true).unwrap();
    assert!(doc.has_marker("dark").unwrap());
    doc.set_marker("dark", false).unwrap();
    assert!(!doc.has_marker("dark").unwrap());
    assert!(doc.root_classes().is_empty());
}

#[test]
fn markup_on_missing_control_is_noop() {
    let mut doc = MemoryDocument::new();
    doc.set_control_markup("btn", "<svg/>").unwrap();
    assert!(doc.control("btn").is_none());
}

#[test]
fn create_control_without_body_fails() {
    let mut doc = MemoryDocument::without_body();
    let err = doc.create_control("btn", "fixed").unwrap_err();
    assert!(matches!(err, ThemeError::Dom(_)));
    assert_eq!(doc.control_count("btn"), 0);
}

#[test]
fn with_control_is_found_by_id() {
    let doc = MemoryDocument::with_control("btn");
    assert!(doc.has_control("btn").unwrap());
    assert!(!doc.has_control("other").unwrap());
}

#[test]
fn rejecting_store_keeps_previous_value() {
    let mut store = MemoryStore::rejecting_writes();
    let err = store.set("theme", "dark").unwrap_err();
    assert!(matches!(err, ThemeError::Storage(_)));
    assert!(store.is_empty());
}

#[test]
fn created_control_is_wired_markup_control_is_not() {
    let mut doc = MemoryDocument::with_control("markup");
    doc.create_control("created", "fixed").unwrap();
    assert!(doc.control("created").unwrap().wired);
    assert!(!doc.control("markup").unwrap().wired);
}

#[test]
fn label_on_missing_control_is_noop() {
    let mut doc = MemoryDocument::new();
    doc.set_control_label("btn", "Switch to dark mode").unwrap();
    assert!(doc.control("btn").is_none());
}
