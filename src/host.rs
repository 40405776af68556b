//! Seams between the controller and its environment.
//!
//! The controller only talks to these traits, so the same code drives the
//! real page (see `browser`) and the in-memory host used by tests.

use crate::error::ThemeError;

/// Durable, origin-scoped key-value storage.
pub trait PreferenceStore {
    /// Read the raw value for `key`. Unavailable storage reads as absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the write is refused.
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Reports the operating system's color-scheme preference.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// The parts of the page the controller mutates.
pub trait ThemeDocument {
    /// Set `name="value"` on the root element.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the root element is missing or rejects the attribute.
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Value of an attribute on the element with this id, if both exist.
    fn element_attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Set `name="value"` on the element with this id.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element is missing or rejects the attribute.
    fn set_element_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Add a class token to the element with this id.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element is missing or the token is rejected.
    fn add_class(&mut self, id: &str, class: &str) -> Result<(), ThemeError>;

    /// Remove a class token from the element with this id. Absent tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element is missing or the token is rejected.
    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), ThemeError>;
}
