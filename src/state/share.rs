//! "Share this video" payload and fallback chain.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three tiers are tried in order until one succeeds: the platform share
//! sheet, a clipboard copy with a short "Copied!" confirmation on the
//! button, and finally a share-intent URL opened in a new tab. Capability
//! absence and rejections only move on to the next tier; nothing is shown to
//! the visitor as a failure.

use std::time::Duration;

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Label shown on the share control after a successful clipboard copy.
pub const COPIED_LABEL: &str = r#"<i class="fas fa-check"></i> Copied!"#;

/// Class added to the share control during the confirmation.
pub const SUCCESS_CLASS: &str = "btn-success";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub url: String,
    pub caption: String,
}

impl SharePayload {
    /// Build a payload, substituting `{title}` in `caption_template`.
    pub fn new(title: &str, url: &str, caption_template: &str) -> Self {
        let title = title.trim().to_owned();
        Self {
            caption: caption_template.replace("{title}", &title),
            url: url.to_owned(),
            title,
        }
    }

    /// Text copied by the clipboard tier.
    pub fn clipboard_text(&self) -> String {
        format!("{} - {}", self.title, self.url)
    }

    /// Share-intent URL carrying the encoded title and page URL.
    pub fn intent_url(&self, base: &str) -> String {
        format!(
            "{base}?text={}&url={}",
            urlencoding::encode(&self.title),
            urlencoding::encode(&self.url)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTier {
    Native,
    Clipboard,
    Intent,
}

/// Feature-detected platform capabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub native_share: bool,
    pub clipboard: bool,
}

/// Tiers to attempt, in order. The intent link needs nothing from the
/// platform and always closes the chain.
pub fn plan(capabilities: Capabilities) -> Vec<ShareTier> {
    let mut tiers = Vec::with_capacity(3);
    if capabilities.native_share {
        tiers.push(ShareTier::Native);
    }
    if capabilities.clipboard {
        tiers.push(ShareTier::Clipboard);
    }
    tiers.push(ShareTier::Intent);
    tiers
}

/// Confirmation state of the share control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ShareButtonState {
    #[default]
    Idle,
    Confirming {
        original_label: String,
    },
}

/// Label swap to apply after a successful copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRender {
    pub label: &'static str,
    pub class: &'static str,
    pub revert_after: Duration,
}

impl ShareButtonState {
    /// Start the "Copied!" confirmation.
    ///
    /// While a confirmation is already showing this returns `None`, keeping
    /// the first remembered label and the first revert timer.
    pub fn confirm(&mut self, current_label: &str, revert_after: Duration) -> Option<ConfirmRender> {
        if matches!(self, Self::Confirming { .. }) {
            return None;
        }
        *self = Self::Confirming { original_label: current_label.to_owned() };
        Some(ConfirmRender { label: COPIED_LABEL, class: SUCCESS_CLASS, revert_after })
    }

    /// End the confirmation, returning the label to put back.
    pub fn revert(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Confirming { original_label } => Some(original_label),
            Self::Idle => None,
        }
    }
}
