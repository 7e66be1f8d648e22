use super::*;

#[test]
fn missing_element_is_routine() {
    assert!(SiteError::MissingElement("#menuToggle").is_routine());
    assert!(SiteError::Unsupported("clipboard").is_routine());
}

#[test]
fn js_and_config_errors_are_not_routine() {
    assert!(!SiteError::Js("TypeError".to_owned()).is_routine());
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(!SiteError::from(err).is_routine());
}

#[test]
fn display_names_the_missing_selector() {
    let err = SiteError::MissingElement(".header");
    assert_eq!(err.to_string(), "element not found: .header");
}
