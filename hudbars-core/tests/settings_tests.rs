//! Integration tests for core settings and values.

use hudbars_core::{BarSettings, BarValues, CoreError, MainBarRole};

#[test]
fn test_settings_serialization_roundtrip() {
    let settings = BarSettings::default();
    let json = serde_json::to_string(&settings).unwrap();
    let parsed: BarSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_default_colors_cover_main_bars() {
    let settings = BarSettings::default();
    for role in MainBarRole::all() {
        assert_eq!(settings.color_for(role.bar_name()), role.default_color());
    }
}

#[test]
fn test_zero_width_rejected() {
    let settings = BarSettings {
        width: 0.0,
        ..BarSettings::default()
    };
    let err = settings.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));
    assert!(!err.is_setup_error());
}

#[test]
fn test_values_validation() {
    let mut values = BarValues::new(0.0, 50.0, 200.0);
    assert!(values.is_valid());

    values.max = 0.0;
    assert!(!values.is_valid());
    values.normalize();
    assert!(values.is_valid());
}
