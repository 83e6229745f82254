//! End-to-end: two tabs on one origin sharing preferences through the public API.

use pageprefs::{MemoryPage, MemoryStore, PageConfig, PreferenceService, PreferenceStore, Theme};

fn dashboard() -> MemoryPage {
    MemoryPage::new()
        .with_control("theme", "light")
        .with_control("currency", "USD")
        .with_text("budget-text", "")
        .with_classed(&["amount"], "$1200")
        .with_classed(&["value"], "$45.5")
}

#[test]
fn preferences_follow_the_user_across_tabs() {
    let origin = MemoryStore::new();
    origin.set("monthlyBudget", "3000").unwrap();

    let settings_tab = origin.open_tab();
    let dashboard_tab = origin.open_tab();
    let settings = PreferenceService::new(settings_tab, MemoryPage::new().with_control("theme", "light"));
    let dashboard = PreferenceService::with_config(dashboard_tab, dashboard(), PageConfig::default());

    settings.init_app();
    dashboard.init_app();
    let _settings_sync = settings.listen();
    let _dashboard_sync = dashboard.listen();

    assert_eq!(dashboard.page().classed_texts(), ["$1,200.00", "$45.50"]);
    assert_eq!(dashboard.page().text("budget-text"), Some("Budget: $3,000.00"));

    settings.apply_theme(Theme::Dark);
    settings.select_currency("EUR");

    let page = dashboard.page();
    assert!(page.has_body_class("dark-theme"));
    assert_eq!(page.control_value("theme"), Some("dark"));
    // "$1,200.00" re-parses only up to the first comma.
    assert_eq!(page.classed_texts(), ["1.00 €", "45.50 €"]);
    assert_eq!(page.text("budget-text"), Some("Budget: 3,000.00 €"));
    assert_eq!(origin.get("currency").unwrap().as_deref(), Some("EUR"));
}

#[test]
fn reload_restores_auto_theme() {
    let origin = MemoryStore::new();
    let first_load = PreferenceService::new(origin.clone(), MemoryPage::new().with_prefers_dark(true));
    first_load.apply_theme(Theme::Auto);

    let reload = PreferenceService::new(origin.clone(), MemoryPage::new().with_control("theme", "light"));
    assert_eq!(reload.init_theme(), Theme::Auto);
    assert_eq!(reload.page().control_value("theme"), Some("auto"));
    assert!(!reload.page().has_body_class("dark-theme"));
}
