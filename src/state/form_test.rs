use super::*;

const RESTORE: Duration = Duration::from_millis(3000);

// =============================================================
// FormKind
// =============================================================

#[test]
fn selectors_target_named_forms() {
    assert_eq!(FormKind::Newsletter.selector(), r#"form[name="newsletter"]"#);
    assert_eq!(FormKind::Contact.selector(), r#"form[name="contact"]"#);
}

#[test]
fn busy_labels_carry_spinner_and_text() {
    assert_eq!(
        FormKind::Newsletter.busy_label(),
        r#"<i class="fas fa-spinner fa-spin"></i> Subscribing..."#
    );
    assert!(FormKind::Contact.busy_label().ends_with("Sending..."));
}

// =============================================================
// SubmitState
// =============================================================

#[test]
fn begin_marks_busy_and_schedules_restore() {
    let mut state = SubmitState::new(FormKind::Newsletter);
    let render = state.begin("Subscribe", RESTORE).unwrap();
    assert!(state.is_busy());
    assert_eq!(render.restore_after, RESTORE);
    assert_eq!(render.label, FormKind::Newsletter.busy_label());
}

#[test]
fn restore_returns_original_label() {
    let mut state = SubmitState::new(FormKind::Contact);
    state.begin("Send Message", RESTORE);
    assert_eq!(state.restore().as_deref(), Some("Send Message"));
    assert!(!state.is_busy());
}

#[test]
fn second_submit_while_busy_is_ignored() {
    let mut state = SubmitState::new(FormKind::Newsletter);
    state.begin("Subscribe", RESTORE);
    assert!(state.begin(&FormKind::Newsletter.busy_label(), RESTORE).is_none());
    assert_eq!(state.restore().as_deref(), Some("Subscribe"));
}

#[test]
fn restore_when_idle_is_noop() {
    let mut state = SubmitState::new(FormKind::Contact);
    assert_eq!(state.restore(), None);
    assert_eq!(state.phase, ButtonPhase::Idle);
}

#[test]
fn can_submit_again_after_restore() {
    let mut state = SubmitState::new(FormKind::Newsletter);
    state.begin("Subscribe", RESTORE);
    state.restore();
    assert!(state.begin("Subscribe", RESTORE).is_some());
}
