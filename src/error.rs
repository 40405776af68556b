//! Error types for the theme controller.

use std::fmt;

use crate::config::ConfigError;

/// Which element of the markup contract a lookup was for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    /// The icon whose class tokens mirror the theme.
    Icon,
    /// The control the user clicks to flip the theme.
    Toggle,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Icon => "theme icon",
            Self::Toggle => "theme toggle",
        })
    }
}

/// Error returned by controller operations.
///
/// A missing element is fatal to setup on that page. Storage and DOM errors
/// carry the host's message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("{role} element #{id} not found")]
    MissingElement { role: ElementRole, id: String },
    #[error("theme storage failed: {0}")]
    Storage(String),
    #[error("document update failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
