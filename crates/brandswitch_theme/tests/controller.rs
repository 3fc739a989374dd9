//! Integration tests for the theme controller
//!
//! These tests verify that:
//! - The root class list always ends as exactly `{base, brand-mode}`
//! - Startup restores a stored selection or falls back to defaults
//! - Storage failures never stop a theme from applying
//! - Diagnostic displays follow the active stylesheet pair

use brandswitch_theme::testing::{HeadlessDocument, MemoryStore};
use brandswitch_theme::{Selection, ThemeConfig, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;

/// Page with a base rule and all four brand/mode rules
fn demo_document() -> HeadlessDocument {
    HeadlessDocument::new()
        .with_rule(
            "base",
            [
                ("--color-primary", " #000000 "),
                ("--button-border-radius", "4px"),
                ("--button-font-family", "system-ui"),
                ("--heading-font-family", "serif"),
            ],
        )
        .with_rule("Brand-A-Lightmode", [("--color-primary", "#0055ff")])
        .with_rule("Brand-A-Darkmode", [("--color-primary", "#99bbff")])
        .with_rule(
            "Brand-B-Lightmode",
            [("--color-primary", "#d7263d"), ("--button-border-radius", " 999px")],
        )
        .with_rule(
            "Brand-B-Darkmode",
            [("--color-primary", "#ff8a9a"), ("--button-border-radius", "999px ")],
        )
}

fn controller(
    document: HeadlessDocument,
    store: MemoryStore,
) -> ThemeController<HeadlessDocument, MemoryStore> {
    ThemeController::new(ThemeConfig::default(), document, store)
}

#[test]
fn apply_resets_any_prior_classes() {
    let document = demo_document()
        .with_root_class("no-js Brand-A-Lightmode Brand-B-Darkmode base loading");
    let mut controller = controller(document, MemoryStore::new());

    controller.apply_theme("Brand-B", "Lightmode");

    assert_eq!(
        controller.document().root_classes(),
        ["base", "Brand-B-Lightmode"]
    );
}

#[test]
fn successive_switches_leave_one_theme_class() {
    let mut controller = controller(demo_document(), MemoryStore::new());
    controller.start();

    controller.select_brand("Brand-B");
    controller.select_mode("Darkmode");
    controller.select_brand("Brand-A");

    let classes = controller.document().root_classes();
    assert_eq!(classes, ["base", "Brand-A-Darkmode"]);
    assert_eq!(controller.selection(), &Selection::new("Brand-A", "Darkmode"));
}

#[test]
fn start_restores_stored_selection() {
    let store = MemoryStore::new()
        .with_entry("brand", "Brand-B")
        .with_entry("mode", "Darkmode");
    let mut controller = controller(demo_document(), store);

    let selection = controller.start();

    assert_eq!(selection, Selection::new("Brand-B", "Darkmode"));
    assert_eq!(
        controller.document().root_classes(),
        ["base", "Brand-B-Darkmode"]
    );
}

#[test]
fn start_without_storage_uses_defaults() {
    let mut controller = controller(demo_document(), MemoryStore::new());

    let selection = controller.start();

    assert_eq!(selection, Selection::new("Brand-A", "Lightmode"));
    assert_eq!(
        controller.document().root_classes(),
        ["base", "Brand-A-Lightmode"]
    );
    // Startup reads but never writes
    assert!(controller.store().backend().is_empty());
}

#[test]
fn start_with_failing_reads_uses_defaults() {
    let store = MemoryStore::new()
        .with_entry("brand", "Brand-B")
        .with_entry("mode", "Darkmode")
        .failing_reads();
    let mut controller = controller(demo_document(), store);

    let selection = controller.start();

    assert_eq!(selection, Selection::new("Brand-A", "Lightmode"));
    assert_eq!(controller.document().root_classes().len(), 2);
}

#[test]
fn start_fills_only_missing_half() {
    let store = MemoryStore::new().with_entry("mode", "Darkmode");
    let mut controller = controller(demo_document(), store);

    assert_eq!(controller.start(), Selection::new("Brand-A", "Darkmode"));
}

#[test]
fn changes_are_persisted() {
    let mut controller = controller(demo_document(), MemoryStore::new());
    controller.start();

    controller.select_brand("Brand-B");

    let backend = controller.store().backend();
    assert_eq!(backend.entry("brand"), Some("Brand-B"));
    assert_eq!(backend.entry("mode"), Some("Lightmode"));
}

#[test]
fn write_failure_does_not_block_apply() {
    let store = MemoryStore::new().failing_writes();
    let mut controller = controller(demo_document(), store);
    controller.start();

    controller.select_mode("Darkmode");

    assert_eq!(
        controller.document().root_classes(),
        ["base", "Brand-A-Darkmode"]
    );
    assert!(controller.store().backend().is_empty());
}

#[test]
fn failed_save_keeps_previous_stored_pair() {
    let store = MemoryStore::new()
        .with_entry("brand", "Brand-A")
        .with_entry("mode", "Lightmode")
        .failing_writes_for("mode");
    let mut controller = controller(demo_document(), store);
    controller.start();

    controller.set_selection(Selection::new("Brand-B", "Darkmode"));

    assert_eq!(
        controller.document().root_classes(),
        ["base", "Brand-B-Darkmode"]
    );
    let stored = controller.store().load();
    assert_eq!(stored.brand.as_deref(), Some("Brand-A"));
    assert_eq!(stored.mode.as_deref(), Some("Lightmode"));
}

#[test]
fn unknown_identifiers_still_apply() {
    let mut controller = controller(demo_document(), MemoryStore::new());

    controller.apply_theme("Brand-Z", "Sepia");

    assert_eq!(controller.document().root_classes(), ["base", "Brand-Z-Sepia"]);
    // No rule matches, so the base value shows through
    assert_eq!(controller.resolved_tokens()["--button-border-radius"], "4px");
}

#[test]
fn displays_refresh_after_apply() {
    let document = demo_document();
    let swatch = document.add_tagged("data-var", "--color-primary");
    document.add_element("btn-radius-value");
    document.add_element("current-class");
    let mut controller = controller(document, MemoryStore::new());

    controller.start();
    assert_eq!(controller.document().text(swatch), "#0055ff");
    assert_eq!(
        controller.document().text_of("current-class").as_deref(),
        Some("base Brand-A-Lightmode")
    );

    controller.select_brand("Brand-B");
    let document = controller.document();
    assert_eq!(document.text(swatch), "#d7263d");
    assert_eq!(document.text_of("btn-radius-value").as_deref(), Some("999px"));
    assert_eq!(
        document.text_of("current-class").as_deref(),
        Some("base Brand-B-Lightmode")
    );
}

#[test]
fn cycle_mode_wraps() {
    let mut controller = controller(demo_document(), MemoryStore::new());
    controller.start();

    assert_eq!(controller.cycle_mode().mode(), "Darkmode");
    assert_eq!(controller.cycle_mode().mode(), "Lightmode");

    controller.apply_theme("Brand-A", "Sepia");
    assert_eq!(controller.cycle_mode().mode(), "Lightmode");
    assert_eq!(controller.store().backend().entry("mode"), Some("Lightmode"));
}

#[test]
fn listeners_see_each_apply() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut controller = controller(demo_document(), MemoryStore::new());
    let sink = seen.clone();
    controller.on_change(move |selection| sink.borrow_mut().push(selection.to_string()));

    controller.start();
    controller.select_mode("Darkmode");

    assert_eq!(*seen.borrow(), ["Brand-A-Lightmode", "Brand-A-Darkmode"]);
}

#[test]
fn external_classes_are_dropped_on_next_apply() {
    let mut controller = controller(demo_document(), MemoryStore::new());
    controller.start();

    controller
        .document()
        .set_root_class_externally("base Brand-A-Lightmode modal-open");
    controller.select_mode("Darkmode");

    assert_eq!(
        controller.document().root_classes(),
        ["base", "Brand-A-Darkmode"]
    );
    assert_eq!(controller.document().root_writes(), 2);
}

#[test]
fn custom_config_drives_classes_and_keys() {
    let config = ThemeConfig::from_toml_str(
        r#"
        base_class = "tokens"
        default_brand = "Acme"
        default_mode = "Dark"

        [storage]
        brand_key = "acme.brand"
        mode_key = "acme.mode"
        "#,
    )
    .unwrap();
    let mut controller = ThemeController::new(config, HeadlessDocument::new(), MemoryStore::new());

    controller.start();
    controller.select_mode("Light");

    assert_eq!(controller.document().root_classes(), ["tokens", "Acme-Light"]);
    assert_eq!(controller.store().backend().entry("acme.mode"), Some("Light"));
}
