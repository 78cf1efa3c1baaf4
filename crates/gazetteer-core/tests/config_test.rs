#![allow(clippy::field_reassign_with_default)]
//! Config serde resilience and validation.
//!
//! Config files are hand-written and often partial: missing fields must
//! fall back to defaults, unknown locales must not fail the load, and
//! out-of-range delay windows must be rejected before reaching the engine.

use gazetteer_core::config::temporal_config::{GREGORIAN_CALENDAR, MAX_DELAY_WINDOW_YEARS};
use gazetteer_core::config::{DisplayConfig, GazetteerConfig, TemporalConfig};
use gazetteer_core::models::Locale;
use gazetteer_core::{GazetteerError, TemporalError};

// ═══════════════════════════════════════════════════════════════════════════
// Defaults
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn default_temporal_config_has_no_window() {
    let config = TemporalConfig::default();
    assert_eq!(config.delay_window_years, None);
    assert_eq!(config.calendar.as_deref(), Some(GREGORIAN_CALENDAR));
    assert_eq!(config.geometry_attribute, "Geometry");
    assert_eq!(config.name_attribute, "Name");
}

#[test]
fn empty_json_yields_defaults() {
    let config: TemporalConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, TemporalConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let json = r#"{ "delay_window_years": 20 }"#;
    let config: TemporalConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.delay_window_years, Some(20));
    assert_eq!(config.calendar.as_deref(), Some(GREGORIAN_CALENDAR));
    assert_eq!(config.name_attribute, "Name");
}

#[test]
fn custom_window_roundtrips_through_json() {
    let mut config = TemporalConfig::default();
    config.delay_window_years = Some(5);
    config.geometry_attribute = "Geom".to_string();

    let json = serde_json::to_string(&config).unwrap();
    let back: TemporalConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn explicit_null_calendar_disables_the_check() {
    let json = r#"{ "calendar": null }"#;
    let config: TemporalConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.calendar, None);
}

// ═══════════════════════════════════════════════════════════════════════════
// TOML loading
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_toml_yields_defaults() {
    let config = GazetteerConfig::from_toml("").unwrap();
    assert_eq!(config, GazetteerConfig::default());
    assert_eq!(config.display.locale, Locale::French);
}

#[test]
fn toml_sections_are_read() {
    let toml = r#"
        [temporal]
        delay_window_years = 20
        name_attribute = "Label"

        [display]
        locale = "en"
    "#;
    let config = GazetteerConfig::from_toml(toml).unwrap();
    assert_eq!(config.temporal.delay_window_years, Some(20));
    assert_eq!(config.temporal.name_attribute, "Label");
    assert_eq!(config.temporal.geometry_attribute, "Geometry");
    assert_eq!(config.display.locale, Locale::English);
}

#[test]
fn unknown_locale_falls_back_to_french() {
    let toml = r#"
        [display]
        locale = "de-DE"
    "#;
    let config = GazetteerConfig::from_toml(toml).unwrap();
    assert_eq!(config.display, DisplayConfig::default());
}

#[test]
fn regional_locale_tags_resolve_to_language() {
    assert_eq!(Locale::from_tag("fr-FR"), Locale::French);
    assert_eq!(Locale::from_tag("en_GB"), Locale::English);
    assert_eq!(Locale::from_tag("EN"), Locale::English);
    assert_eq!(Locale::English.tag(), "en");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GazetteerConfig::from_toml("[temporal\ndelay_window_years = 1").unwrap_err();
    assert!(matches!(err, GazetteerError::ConfigParseError(_)));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = GazetteerConfig::from_toml("[temporal]\ndelay_window_years = \"twenty\"").unwrap_err();
    assert!(matches!(err, GazetteerError::ConfigParseError(_)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn zero_window_is_valid() {
    let config = GazetteerConfig::from_toml("[temporal]\ndelay_window_years = 0").unwrap();
    assert_eq!(config.temporal.delay_window_years, Some(0));
}

#[test]
fn maximum_window_is_valid() {
    let mut config = TemporalConfig::default();
    config.delay_window_years = Some(MAX_DELAY_WINDOW_YEARS);
    assert!(config.validate().is_ok());
}

#[test]
fn oversized_window_is_rejected() {
    let toml = format!(
        "[temporal]\ndelay_window_years = {}",
        MAX_DELAY_WINDOW_YEARS + 1
    );
    let err = GazetteerConfig::from_toml(&toml).unwrap_err();
    assert!(matches!(
        err,
        GazetteerError::TemporalError(TemporalError::InvalidDelayWindow(_))
    ));
    assert!(err.to_string().contains("invalid delay window"));
}
