//! Site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tunable constant the controllers use lives in [`SiteConfig`]. Pages
//! may override any subset of fields with an inline
//! `<script type="application/json" id="site-config">` block; absent fields
//! keep their defaults.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SiteError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional inline JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` slot holding `"dark"` or `"light"`.
    pub theme_storage_key: String,
    /// Class placed on `<body>` while dark mode is enabled.
    pub dark_class: String,
    /// Id of the alternate stylesheet toggled with dark mode.
    pub dark_stylesheet_id: String,
    /// Delay before a submit button leaves its busy state.
    pub form_restore_ms: u32,
    /// How long the share control shows its "Copied!" confirmation.
    pub share_confirm_ms: u32,
    /// Vertical scroll offset above which the header is styled as scrolled.
    pub scroll_threshold: f64,
    /// Caption passed to the native share sheet; `{title}` is substituted.
    pub share_caption: String,
    /// Share-intent endpoint used when the clipboard is unavailable.
    pub share_intent_url: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            dark_class: "dark-mode".to_owned(),
            dark_stylesheet_id: "dark-mode-style".to_owned(),
            form_restore_ms: 3000,
            share_confirm_ms: 2000,
            scroll_threshold: 100.0,
            share_caption: "Check out this video from Teni Scribes: {title}".to_owned(),
            share_intent_url: "https://twitter.com/intent/tweet".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Config` when the block is not a valid JSON object
    /// of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve the effective config from an optional override block.
    ///
    /// A malformed block yields the defaults together with the parse error so
    /// the caller can log it once a logger exists.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<SiteError>) {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    pub fn form_restore_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.form_restore_ms))
    }

    pub fn share_confirm_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.share_confirm_ms))
    }
}
