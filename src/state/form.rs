//! Newsletter and contact submit-button state.
//!
//! DESIGN
//! ======
//! Submission itself is never intercepted: the form posts to the external
//! form host, which owns delivery, validation, and the thank-you redirect.
//! This module only models the button: busy while the request is in flight,
//! restored after a fixed delay whatever the outcome.

use std::time::Duration;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Spinner glyph prefixed to busy labels.
pub const SPINNER_MARKUP: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// Selector for the submit control inside a form.
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Newsletter,
    Contact,
}

impl FormKind {
    pub const ALL: [Self; 2] = [Self::Newsletter, Self::Contact];

    pub fn selector(self) -> &'static str {
        match self {
            Self::Newsletter => r#"form[name="newsletter"]"#,
            Self::Contact => r#"form[name="contact"]"#,
        }
    }

    pub fn busy_text(self) -> &'static str {
        match self {
            Self::Newsletter => "Subscribing...",
            Self::Contact => "Sending...",
        }
    }

    pub fn busy_label(self) -> String {
        format!("{SPINNER_MARKUP} {}", self.busy_text())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Busy {
        original_label: String,
    },
}

/// Button swap to apply when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusyRender {
    pub label: String,
    pub restore_after: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitState {
    pub kind: FormKind,
    pub phase: ButtonPhase,
}

impl SubmitState {
    pub fn new(kind: FormKind) -> Self {
        Self { kind, phase: ButtonPhase::Idle }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, ButtonPhase::Busy { .. })
    }

    /// Enter the busy phase, remembering `current_label` for the restore.
    ///
    /// Returns `None` while already busy so a repeated submit neither
    /// overwrites the remembered label with the spinner nor schedules a
    /// second restore.
    pub fn begin(&mut self, current_label: &str, restore_after: Duration) -> Option<BusyRender> {
        if self.is_busy() {
            return None;
        }
        self.phase = ButtonPhase::Busy { original_label: current_label.to_owned() };
        Some(BusyRender { label: self.kind.busy_label(), restore_after })
    }

    /// Leave the busy phase, returning the label to put back.
    pub fn restore(&mut self) -> Option<String> {
        match std::mem::take(&mut self.phase) {
            ButtonPhase::Busy { original_label } => Some(original_label),
            ButtonPhase::Idle => None,
        }
    }
}
