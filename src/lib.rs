//! Light/dark theme toggle for server-rendered pages, compiled to WebAssembly.
//!
//! On page load the controller resolves the theme (stored preference, else the
//! system color scheme), sets `data-bs-theme` on `<html>`, persists the value
//! in `localStorage`, and shows the matching sun/moon icon. Each click on the
//! toggle flips and persists the theme.
//!
//! The controller is written against the traits in [`host`], so it runs
//! unchanged against the browser (feature `hydrate`) and the in-memory host in
//! [`memory`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `Theme` enum and its pure toggle transition |
//! | [`controller`] | Initialization and toggle against the host traits |
//! | [`host`] | Storage, system-preference, and document traits |
//! | [`config`] | Storage key, element ids, and icon classes |
//! | [`memory`] | In-memory host implementations |
//! | [`error`] | Error types |
//! | [`consts`] | Default markup contract |
//! | `browser` | `web_sys` bindings and exported entry points (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod theme;

pub use config::{ConfigError, IconClasses, ThemeConfig};
pub use error::{ElementRole, ThemeError};
pub use theme::{Theme, ThemeParseError};
