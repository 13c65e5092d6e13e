use super::*;

// =============================================================
// String form
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_as_str_matches_stored_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn theme_parses_stored_values() {
    assert_eq!("light".parse::<Theme>().ok(), Some(Theme::Light));
    assert_eq!("dark".parse::<Theme>().ok(), Some(Theme::Dark));
}

#[test]
fn theme_parse_rejects_unknown_value() {
    let err = "Dark".parse::<Theme>().unwrap_err();
    assert!(matches!(err, ThemeError::InvalidTheme(ref v) if v == "Dark"));
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn theme_from_marker() {
    assert_eq!(Theme::from_marker(true), Theme::Dark);
    assert_eq!(Theme::from_marker(false), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

// =============================================================
// Serde
// =============================================================

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}
