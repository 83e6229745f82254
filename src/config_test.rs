use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.keys.theme, "theme");
    assert_eq!(config.keys.currency, "currency");
    assert_eq!(config.keys.monthly_budget, "monthlyBudget");
    assert_eq!(config.dom.theme_control, "theme");
    assert_eq!(config.dom.currency_control, "currency");
    assert_eq!(config.dom.budget_text, "budget-text");
    assert_eq!(config.dom.monetary_classes, ["amount", "value"]);
    assert_eq!(config.dom.dark_class, "dark-theme");
    assert_eq!(config.defaults.theme, Theme::Light);
    assert_eq!(config.defaults.currency, "USD");
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = PageConfig::from_json(r#"{"dom":{"budget_text":"budget-line"},"defaults":{"theme":"auto"}}"#).unwrap();
    assert_eq!(config.dom.budget_text, "budget-line");
    assert_eq!(config.dom.dark_class, "dark-theme");
    assert_eq!(config.defaults.theme, Theme::Auto);
    assert_eq!(config.defaults.currency, "USD");
}

#[test]
fn from_json_rejects_malformed_documents() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn from_json_rejects_unknown_default_theme() {
    assert!(PageConfig::from_json(r#"{"defaults":{"theme":"sepia"}}"#).is_err());
}

#[test]
fn validate_rejects_empty_names() {
    let err = PageConfig::from_json(r#"{"keys":{"theme":""}}"#).unwrap_err();
    assert_eq!(err, PrefsError::Config("keys.theme must not be empty".into()));

    let err = PageConfig::from_json(r#"{"dom":{"monetary_classes":["amount",""]}}"#).unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn validate_rejects_shared_storage_keys() {
    let err = PageConfig::from_json(r#"{"keys":{"currency":"theme"}}"#).unwrap_err();
    assert_eq!(err, PrefsError::Config("storage keys must be distinct".into()));
}
