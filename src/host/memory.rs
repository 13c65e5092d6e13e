//! In-memory host used off the browser.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{BTreeSet, HashMap};

use super::{ColorScheme, PreferenceStore, ThemeDocument};
use crate::error::{Result, ThemeError};

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, as if written on an earlier visit.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self {
            entries,
            reject_writes: false,
        }
    }

    /// Store that can be read but refuses every write, like a full quota.
    #[must_use]
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes {
            return Err(ThemeError::Storage(format!("quota exceeded writing {key:?}")));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// COLOR SCHEME
// =============================================================================

/// Fixed system signal. `None` models a host without `matchMedia`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme(pub Option<bool>);

impl FixedScheme {
    pub const DARK: Self = Self(Some(true));
    pub const LIGHT: Self = Self(Some(false));
    pub const ABSENT: Self = Self(None);
}

impl ColorScheme for FixedScheme {
    fn prefers_dark(&self, _media_query: &str) -> Result<bool> {
        self.0.ok_or(ThemeError::Unavailable("matchMedia"))
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryControl {
    pub id: String,
    pub class: String,
    pub markup: String,
    pub label: String,
    /// Whether clicks reach the controller. Only set on created controls;
    /// markup-provided controls are wired by their own template.
    pub wired: bool,
}

#[derive(Clone, Debug)]
pub struct MemoryDocument {
    root_classes: BTreeSet<String>,
    controls: Vec<MemoryControl>,
    has_body: bool,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self {
            root_classes: BTreeSet::new(),
            controls: Vec::new(),
            has_body: true,
        }
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document whose markup already contains a control with `id`.
    #[must_use]
    pub fn with_control(id: &str) -> Self {
        let mut doc = Self::default();
        doc.controls.push(MemoryControl {
            id: id.to_owned(),
            ..MemoryControl::default()
        });
        doc
    }

    /// Document whose body has not been parsed yet.
    #[must_use]
    pub fn without_body() -> Self {
        Self {
            has_body: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn root_classes(&self) -> Vec<&str> {
        self.root_classes.iter().map(String::as_str).collect()
    }

    /// First control with `id`, mirroring `getElementById`.
    #[must_use]
    pub fn control(&self, id: &str) -> Option<&MemoryControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn control_count(&self, id: &str) -> usize {
        self.controls.iter().filter(|c| c.id == id).count()
    }
}

impl ThemeDocument for MemoryDocument {
    fn has_marker(&self, class: &str) -> Result<bool> {
        Ok(self.root_classes.contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<()> {
        if present {
            self.root_classes.insert(class.to_owned());
        } else {
            self.root_classes.remove(class);
        }
        Ok(())
    }

    fn has_control(&self, id: &str) -> Result<bool> {
        Ok(self.control(id).is_some())
    }

    fn create_control(&mut self, id: &str, class: &str) -> Result<()> {
        if !self.has_body {
            return Err(ThemeError::Dom("document has no body".to_owned()));
        }
        self.controls.push(MemoryControl {
            id: id.to_owned(),
            class: class.to_owned(),
            wired: true,
            ..MemoryControl::default()
        });
        Ok(())
    }

    fn set_control_markup(&mut self, id: &str, markup: &str) -> Result<()> {
        if let Some(control) = self.controls.iter_mut().find(|c| c.id == id) {
            markup.clone_into(&mut control.markup);
        }
        Ok(())
    }

    fn set_control_label(&mut self, id: &str, label: &str) -> Result<()> {
        if let Some(control) = self.controls.iter_mut().find(|c| c.id == id) {
            label.clone_into(&mut control.label);
        }
        Ok(())
    }
}
