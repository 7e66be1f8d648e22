//! Rules for classes the behavior layer adds at runtime.
//!
//! Injected once at startup so the static stylesheets do not need to know
//! about `scrolled`, `loaded`, `btn-success`, or the library status lines.

/// Id of the injected `<style>` element; injection is skipped if present.
pub const STYLE_ELEMENT_ID: &str = "site-behavior-styles";

pub const BEHAVIOR_CSS: &str = r"
.header.scrolled {
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

img[data-src] {
    opacity: 0;
    transition: opacity 0.3s;
}

img.loaded {
    opacity: 1;
}

.btn-success {
    background-color: var(--color-secondary) !important;
    border-color: var(--color-secondary) !important;
    color: white !important;
}

.fa-spinner {
    margin-right: 8px;
}

.filter-message,
.search-message {
    margin-bottom: var(--space-md);
    font-style: italic;
}

.demo-video-placeholder {
    padding: 2rem;
    color: white;
    text-align: center;
    max-width: 600px;
}

.demo-video-info h3 {
    color: white;
    margin-bottom: 1rem;
}

.demo-video-info p {
    margin-bottom: 1.5rem;
    opacity: 0.9;
}
";
