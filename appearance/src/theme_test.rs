use super::*;

#[test]
fn parse_accepts_exact_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Theme::parse("  dark\n"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_and_case_variants() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse("system"), None);
}

#[test]
fn as_str_matches_persisted_layout() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn from_dark_round_trips_is_dark() {
    assert_eq!(Theme::from_dark(true), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
    assert!(Theme::Dark.is_dark());
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn unresolved_state_is_light_and_pending() {
    let state = AppearanceState::default();
    assert!(!state.is_dark);
    assert!(state.is_pending);
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}
