use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_site_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.dark_class, "dark-mode");
    assert_eq!(config.dark_stylesheet_id, "dark-mode-style");
    assert_eq!(config.scroll_threshold, 100.0);
}

#[test]
fn default_delays() {
    let config = SiteConfig::default();
    assert_eq!(config.form_restore_delay(), Duration::from_secs(3));
    assert_eq!(config.share_confirm_delay(), Duration::from_secs(2));
}

// =============================================================
// Override block
// =============================================================

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"form_restore_ms": 1500, "log_level": "debug"}"#).unwrap();
    assert_eq!(config.form_restore_delay(), Duration::from_millis(1500));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.share_confirm_ms, 2000);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn resolve_without_block_uses_defaults() {
    let (config, err) = SiteConfig::resolve(None);
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());
}

#[test]
fn resolve_blank_block_uses_defaults() {
    let (config, err) = SiteConfig::resolve(Some("  \n "));
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());
}

#[test]
fn resolve_malformed_block_falls_back_and_reports() {
    let (config, err) = SiteConfig::resolve(Some("{not json"));
    assert_eq!(config, SiteConfig::default());
    assert!(matches!(err, Some(SiteError::Config(_))));
}

#[test]
fn resolve_wrong_field_type_falls_back() {
    let (config, err) = SiteConfig::resolve(Some(r#"{"scroll_threshold": "high"}"#));
    assert_eq!(config.scroll_threshold, 100.0);
    assert!(err.is_some());
}
