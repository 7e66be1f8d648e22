//! # scribes-site
//!
//! WASM behavior layer for the Teni Scribes static site. The HTML pages are
//! plain static markup; this crate attaches the interactive behavior once the
//! document has been parsed.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | DOM-free models for every controller, tested natively |
//! | [`config`] | Tunable constants with an optional inline JSON override |
//! | [`error`] | Error type shared by the controller initializers |
//! | [`styles`] | Rules injected at startup for dynamic classes |
//! | [`components`] | Leptos views for runtime-built page sections |
//! | `dom` | Browser bindings (`hydrate` feature only) |

pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod state;
pub mod styles;

/// Browser entry point.
///
/// Installs the panic hook and console logger, then attaches every controller
/// as soon as the document structure is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let (config, config_error) = dom::load_config();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    // Drives `leptos::task::spawn_local` on pages that never mount a view.
    if leptos::task::Executor::init_wasm_bindgen().is_err() {
        log::debug!("task executor already initialized");
    }
    if let Some(err) = config_error {
        log::warn!("{err}; using default site config");
    }

    dom::run_when_ready(std::rc::Rc::new(config));
}
