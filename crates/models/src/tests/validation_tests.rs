use crate::errors::ModelError;
use crate::line::{validate_color, validate_name, COLOR_MAX_LEN, NAME_MAX_LEN};

#[test]
fn name_is_trimmed() {
    assert_eq!(validate_name("  신분당선 ").unwrap(), "신분당선");
}

#[test]
fn blank_values_are_rejected() {
    assert!(matches!(validate_name(""), Err(ModelError::Validation(_))));
    assert!(matches!(validate_name("   "), Err(ModelError::Validation(_))));
    assert!(matches!(validate_color("\t"), Err(ModelError::Validation(_))));
}

#[test]
fn length_limits_count_characters_not_bytes() {
    // Hangul syllables are 3 bytes each in UTF-8
    let name = "선".repeat(NAME_MAX_LEN);
    assert!(validate_name(&name).is_ok());
    let too_long = "선".repeat(NAME_MAX_LEN + 1);
    assert!(validate_name(&too_long).is_err());

    let color = "a".repeat(COLOR_MAX_LEN + 1);
    let err = validate_color(&color).unwrap_err();
    assert!(err.to_string().contains("color"));
}
