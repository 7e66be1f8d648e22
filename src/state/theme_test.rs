use super::*;

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn stored_dark_wins_over_light_os() {
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn stored_light_wins_over_dark_os() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn missing_preference_follows_os() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn empty_preference_follows_os() {
    assert_eq!(resolve_initial(Some(""), true), Theme::Dark);
}

#[test]
fn unknown_stored_value_is_light() {
    assert_eq!(resolve_initial(Some("sepia"), true), Theme::Light);
}

#[test]
fn startup_render_only_for_dark() {
    assert_eq!(startup_render(Theme::Light), None);
    let render = startup_render(Theme::Dark).unwrap();
    assert!(render.body_dark_class);
    assert!(!render.stylesheet_disabled);
    assert_eq!(render.stored, "dark");
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_light_enables_all_three() {
    let (next, render) = toggle(Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(
        render,
        ThemeRender { body_dark_class: true, stylesheet_disabled: false, stored: "dark" }
    );
}

#[test]
fn toggle_from_dark_disables_all_three() {
    let (next, render) = toggle(Theme::Dark);
    assert_eq!(next, Theme::Light);
    assert_eq!(
        render,
        ThemeRender { body_dark_class: false, stylesheet_disabled: true, stored: "light" }
    );
}

#[test]
fn double_toggle_restores_class_and_stored_value() {
    for start in [Theme::Light, Theme::Dark] {
        let (middle, _) = toggle(start);
        let (end, render) = toggle(middle);
        assert_eq!(end, start);
        assert_eq!(render.body_dark_class, start.is_dark());
        assert_eq!(render.stored, start.as_str());
    }
}

#[test]
fn from_body_reads_marker_class() {
    assert_eq!(Theme::from_body(true), Theme::Dark);
    assert_eq!(Theme::from_body(false), Theme::Light);
}
