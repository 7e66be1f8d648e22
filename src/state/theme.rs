//! Dark/light theme model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored preference wins over the OS color-scheme preference. Enabling
//! dark mode touches three things at once: the body class, the alternate
//! stylesheet, and the stored flag. [`ThemeRender`] carries all three so the
//! browser layer cannot update one without the others.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Current theme as observed from the body's dark marker class.
    pub fn from_body(has_dark_class: bool) -> Self {
        if has_dark_class { Self::Dark } else { Self::Light }
    }
}

/// Pick the startup theme.
///
/// Any non-empty stored value other than `"dark"` counts as an explicit light
/// preference; only a missing or empty slot defers to the OS.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(value) if !value.is_empty() => Theme::Light,
        _ if prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Everything the browser layer writes for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeRender {
    pub body_dark_class: bool,
    pub stylesheet_disabled: bool,
    pub stored: &'static str,
}

impl From<Theme> for ThemeRender {
    fn from(theme: Theme) -> Self {
        Self {
            body_dark_class: theme.is_dark(),
            stylesheet_disabled: !theme.is_dark(),
            stored: theme.as_str(),
        }
    }
}

/// Render needed at page load.
///
/// Light pages are left untouched, so a visitor who never toggles leaves no
/// stored preference behind.
pub fn startup_render(theme: Theme) -> Option<ThemeRender> {
    theme.is_dark().then(|| ThemeRender::from(theme))
}

/// Flip the theme observed on the page and return what to render.
pub fn toggle(current: Theme) -> (Theme, ThemeRender) {
    let next = current.toggled();
    (next, ThemeRender::from(next))
}
