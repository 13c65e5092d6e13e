//! Collaborators the controller is injected with.
//!
//! DESIGN
//! ======
//! The controller never touches browser globals. Everything it reads or
//! writes goes through these traits so the same logic runs against
//! `web-sys` in the browser and against in-memory fakes in tests.

pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

use crate::error::Result;

/// Origin-scoped key/value storage that survives page loads.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Platform-wide light/dark signal.
pub trait ColorScheme {
    /// Whether `media_query` currently matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal cannot be queried.
    fn prefers_dark(&self, media_query: &str) -> Result<bool>;
}

/// The parts of the page the controller manipulates.
///
/// Implementations that create a control in [`ThemeDocument::create_control`]
/// must route its clicks to [`crate::controller::ThemeController::handle_click`].
pub trait ThemeDocument {
    /// # Errors
    ///
    /// Returns an error if the root element is missing.
    fn has_marker(&self, class: &str) -> Result<bool>;

    /// Add (`present = true`) or remove the marker class on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is missing.
    fn set_marker(&mut self, class: &str, present: bool) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the document cannot be queried.
    fn has_control(&self, id: &str) -> Result<bool>;

    /// Build a control with `id` and `class`, append it to the body and
    /// wire its click handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or the body is missing.
    fn create_control(&mut self, id: &str, class: &str) -> Result<()>;

    /// Replace the control's inner markup. Succeeds without effect if no
    /// control with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be queried.
    fn set_control_markup(&mut self, id: &str, markup: &str) -> Result<()>;

    /// Set the control's `title` and `aria-label`. Succeeds without effect
    /// if no control with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the attributes cannot be written.
    fn set_control_label(&mut self, id: &str, label: &str) -> Result<()>;
}
