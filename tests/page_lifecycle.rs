//! End-to-end page lifecycle against the in-memory host: load, click, reload.

use themeswitch::controller;
use themeswitch::memory::{FixedScheme, MemoryDocument, MemoryStore};
use themeswitch::{Theme, ThemeConfig};

const ICON: &str = "toggle-theme-icon";
const SUN: &str = "bi-sun-fill";
const MOON: &str = "bi-moon-stars-fill";

fn fresh_page() -> MemoryDocument {
    MemoryDocument::new()
        .with_element(ICON, &["bi"])
        .with_element("theme-toggle", &["btn", "btn-link"])
}

#[test]
fn first_visit_on_dark_system_then_one_click() {
    let config = ThemeConfig::default();
    let probe = FixedScheme::dark();
    let mut doc = fresh_page();
    let mut store = MemoryStore::new();

    let theme = controller::initialize(&mut doc, &mut store, &probe, &config).unwrap();
    assert_eq!(theme, Theme::Dark);
    assert_eq!(store.get("theme"), Some("dark"));
    assert_eq!(doc.root_attribute("data-bs-theme"), Some("dark"));
    assert!(doc.has_class(ICON, MOON));
    assert!(!doc.has_class(ICON, SUN));

    let theme = controller::toggle(&mut doc, &mut store, &probe, &config).unwrap();
    assert_eq!(theme, Theme::Light);
    assert_eq!(store.get("theme"), Some("light"));
    assert_eq!(doc.root_attribute("data-bs-theme"), Some("light"));
    assert!(doc.has_class(ICON, SUN));
    assert!(!doc.has_class(ICON, MOON));
}

#[test]
fn choice_survives_reload_on_another_page() {
    let config = ThemeConfig::default();
    let probe = FixedScheme::light();
    let mut store = MemoryStore::new();

    let mut first = fresh_page();
    controller::initialize(&mut first, &mut store, &probe, &config).unwrap();
    controller::toggle(&mut first, &mut store, &probe, &config).unwrap();

    // Same origin storage, new document.
    let mut second = fresh_page();
    let theme = controller::initialize(&mut second, &mut store, &probe, &config).unwrap();
    assert_eq!(theme, Theme::Dark);
    assert_eq!(second.root_attribute("data-bs-theme"), Some("dark"));
    assert!(second.has_class(ICON, MOON));
}

#[test]
fn icon_always_carries_exactly_one_theme_token() {
    let config = ThemeConfig::default();
    let probe = FixedScheme::light();
    let mut doc = fresh_page();
    let mut store = MemoryStore::new();
    controller::initialize(&mut doc, &mut store, &probe, &config).unwrap();

    for _ in 0..5 {
        controller::toggle(&mut doc, &mut store, &probe, &config).unwrap();
        let classes = doc.classes(ICON).unwrap();
        let tokens = [SUN, MOON].iter().filter(|c| classes.contains(**c)).count();
        assert_eq!(tokens, 1);
        assert!(classes.contains("bi"));
    }
}

#[test]
fn page_without_toggle_markup_is_left_alone() {
    let config = ThemeConfig::default();
    let mut doc = MemoryDocument::new();
    let mut store = MemoryStore::new().with_entry("theme", "dark");

    assert!(controller::initialize(&mut doc, &mut store, &FixedScheme::light(), &config).is_err());
    assert_eq!(doc.root_attribute("data-bs-theme"), None);
    assert_eq!(store.get("theme"), Some("dark"));
}
