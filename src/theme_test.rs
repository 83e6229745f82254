use std::cell::Cell;

use super::*;

#[test]
fn parse_accepts_the_three_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("auto"), Some(Theme::Auto));
}

#[test]
fn parse_rejects_other_spellings() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("auto")), Theme::Auto);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn resolve_fixed_themes_ignore_environment() {
    let asked = Cell::new(false);
    let probe = || {
        asked.set(true);
        true
    };
    assert_eq!(Theme::Light.resolve(probe), EffectiveTheme::Light);
    assert!(!asked.get());
    assert_eq!(Theme::Dark.resolve(|| false), EffectiveTheme::Dark);
}

#[test]
fn resolve_auto_follows_environment() {
    assert_eq!(Theme::Auto.resolve(|| true), EffectiveTheme::Dark);
    assert_eq!(Theme::Auto.resolve(|| false), EffectiveTheme::Light);
    assert!(Theme::Auto.resolve(|| true).is_dark());
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Auto).unwrap(), "\"auto\"");
    let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(theme, Theme::Dark);
}
