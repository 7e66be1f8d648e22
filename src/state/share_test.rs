use super::*;

const CAPTION: &str = "Check out this video from Teni Scribes: {title}";
const CONFIRM: Duration = Duration::from_millis(2000);

fn payload() -> SharePayload {
    SharePayload::new("  Morning Pages  ", "https://teniscribes.com/videos.html", CAPTION)
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_trims_title_and_fills_caption() {
    let p = payload();
    assert_eq!(p.title, "Morning Pages");
    assert_eq!(p.caption, "Check out this video from Teni Scribes: Morning Pages");
}

#[test]
fn clipboard_text_is_title_dash_url() {
    assert_eq!(payload().clipboard_text(), "Morning Pages - https://teniscribes.com/videos.html");
}

#[test]
fn intent_url_encodes_title_and_url() {
    let url = payload().intent_url("https://twitter.com/intent/tweet");
    assert_eq!(
        url,
        "https://twitter.com/intent/tweet?text=Morning%20Pages&url=https%3A%2F%2Fteniscribes.com%2Fvideos.html"
    );
}

#[test]
fn intent_url_escapes_query_delimiters_in_title() {
    let p = SharePayload::new("Faith & Reflection?", "https://x.test/", CAPTION);
    assert!(p.intent_url("https://i.test").contains("text=Faith%20%26%20Reflection%3F&"));
}

// =============================================================
// Fallback plan
// =============================================================

#[test]
fn plan_with_everything_tries_native_first() {
    let tiers = plan(Capabilities { native_share: true, clipboard: true });
    assert_eq!(tiers, vec![ShareTier::Native, ShareTier::Clipboard, ShareTier::Intent]);
}

#[test]
fn plan_without_native_starts_at_clipboard() {
    let tiers = plan(Capabilities { native_share: false, clipboard: true });
    assert_eq!(tiers, vec![ShareTier::Clipboard, ShareTier::Intent]);
}

#[test]
fn plan_without_clipboard_skips_to_intent() {
    let tiers = plan(Capabilities { native_share: true, clipboard: false });
    assert_eq!(tiers, vec![ShareTier::Native, ShareTier::Intent]);
}

#[test]
fn plan_without_capabilities_only_opens_intent() {
    assert_eq!(plan(Capabilities::default()), vec![ShareTier::Intent]);
}

// =============================================================
// Copied confirmation
// =============================================================

#[test]
fn confirm_shows_copied_for_two_seconds() {
    let mut state = ShareButtonState::default();
    let render = state.confirm("Share", CONFIRM).unwrap();
    assert_eq!(render.label, COPIED_LABEL);
    assert_eq!(render.class, SUCCESS_CLASS);
    assert_eq!(render.revert_after, CONFIRM);
}

#[test]
fn revert_restores_original_label() {
    let mut state = ShareButtonState::default();
    state.confirm(r#"<i class="fas fa-share"></i> Share"#, CONFIRM);
    assert_eq!(state.revert().as_deref(), Some(r#"<i class="fas fa-share"></i> Share"#));
    assert_eq!(state, ShareButtonState::Idle);
}

#[test]
fn second_copy_during_confirmation_keeps_first_label() {
    let mut state = ShareButtonState::default();
    state.confirm("Share", CONFIRM);
    assert!(state.confirm(COPIED_LABEL, CONFIRM).is_none());
    assert_eq!(state.revert().as_deref(), Some("Share"));
}

#[test]
fn revert_when_idle_is_noop() {
    assert_eq!(ShareButtonState::default().revert(), None);
}
