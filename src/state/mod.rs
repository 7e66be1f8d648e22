//! DOM-free controller state.
//!
//! DESIGN
//! ======
//! Each controller keeps its toggles as explicit fields and describes the DOM
//! change a transition needs instead of performing it. The `dom` layer renders
//! those descriptions, so every rule here is testable without a browser.

pub mod demo_video;
pub mod form;
pub mod header;
pub mod lazy;
pub mod library;
pub mod nav;
pub mod share;
pub mod theme;
