//! In-memory host for headless rendering and tests.

use std::collections::{BTreeSet, HashMap};

use crate::error::ThemeError;
use crate::host::{ColorSchemeProbe, PreferenceStore, ThemeDocument};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Key-value store backed by a `HashMap`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every write, like a browser with storage disabled.
    #[must_use]
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    /// Seed a value without going through [`PreferenceStore::write`].
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Drop a key, e.g. to simulate the user clearing site data.
    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::Storage(format!("store is read-only, cannot set {key}")));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// System preference fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme {
    pub dark: bool,
}

impl FixedScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self { dark: true }
    }

    #[must_use]
    pub fn light() -> Self {
        Self { dark: false }
    }
}

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// One element: its class tokens and attributes.
#[derive(Clone, Debug, Default)]
struct MemoryElement {
    classes: BTreeSet<String>,
    attributes: HashMap<String, String>,
}

/// A document reduced to root attributes and elements addressed by id.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    root: HashMap<String, String>,
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with the given id and initial class tokens.
    #[must_use]
    pub fn with_element(mut self, id: &str, classes: &[&str]) -> Self {
        let element = MemoryElement {
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            attributes: HashMap::new(),
        };
        self.elements.insert(id.to_owned(), element);
        self
    }

    /// Value of an attribute on the root element.
    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root.get(name).map(String::as_str)
    }

    /// Class tokens of an element, or `None` if it does not exist.
    #[must_use]
    pub fn classes(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.elements.get(id).map(|el| &el.classes)
    }

    /// Whether the element exists and carries the class token.
    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|el| el.classes.contains(class))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut MemoryElement, ThemeError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| ThemeError::Dom(format!("no element #{id}")))
    }
}

impl ThemeDocument for MemoryDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn element_attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attributes.get(name).cloned()
    }

    fn set_element_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element_mut(id)?.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn add_class(&mut self, id: &str, class: &str) -> Result<(), ThemeError> {
        self.element_mut(id)?.classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), ThemeError> {
        self.element_mut(id)?.classes.remove(class);
        Ok(())
    }
}
