//! Theme controller: owns the current theme, its persistence, and the
//! toggle control's icon.
//!
//! DESIGN
//! ======
//! Page startup is two one-shot steps. [`ThemeController::boot`] runs as
//! soon as the script loads and only sets the root marker, so a dark page
//! never flashes light. [`ThemeController::on_structure_ready`] runs once
//! the body exists and makes sure the control is present and showing the
//! right glyph. After that the only entry point is
//! [`ThemeController::handle_click`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::host::{ColorScheme, PreferenceStore, ThemeDocument};
use crate::icon;
use crate::theme::Theme;

// =============================================================================
// TYPES
// =============================================================================

/// The theme last applied through the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

/// Outcome of [`ThemeController::ensure_toggle_control`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlStatus {
    /// The page markup already provided the control.
    Existing,
    /// No control was found, so one was appended to the body.
    Created,
}

pub struct ThemeController<D, S> {
    document: D,
    store: S,
    config: ThemeConfig,
    state: ThemeState,
}

impl<D, S> ThemeController<D, S>
where
    D: ThemeDocument,
    S: PreferenceStore,
{
    pub fn new(document: D, store: S, config: ThemeConfig) -> Self {
        Self {
            document,
            store,
            config,
            state: ThemeState::default(),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // RESOLVE
    // =========================================================================

    /// Pick the theme to start with.
    ///
    /// A non-empty stored value wins over the system signal. Without one,
    /// the system signal decides. Anything unreadable falls back to light,
    /// so this always produces a theme.
    pub fn resolve_initial_theme(&self, scheme: &impl ColorScheme) -> Theme {
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                log::warn!("theme: stored preference unreadable: {err}");
                None
            }
        };

        if let Some(value) = stored {
            // Only the exact string "dark" turns the marker on.
            return value.parse().unwrap_or_else(|err| {
                log::warn!("theme: ignoring stored preference: {err}");
                Theme::Light
            });
        }

        match scheme.prefers_dark(&self.config.media_query) {
            Ok(dark) => Theme::from_marker(dark),
            Err(err) => {
                log::warn!("theme: system color scheme unavailable: {err}");
                Theme::Light
            }
        }
    }

    // =========================================================================
    // APPLY
    // =========================================================================

    /// Set the root marker, persist `theme`, and swap the control's glyph.
    ///
    /// # Errors
    ///
    /// Propagates any document or store failure.
    pub fn apply_theme(&mut self, theme: Theme) -> Result<()> {
        self.document
            .set_marker(&self.config.marker_class, theme.is_dark())?;
        self.store.set(&self.config.storage_key, theme.as_str())?;
        self.state.theme = theme;
        self.update_icon(theme)?;
        log::debug!("theme: applied {theme}");
        Ok(())
    }

    /// Show the glyph and label for the theme a click would switch to.
    ///
    /// # Errors
    ///
    /// Propagates document failures. A missing control is not an error.
    pub fn update_icon(&mut self, theme: Theme) -> Result<()> {
        let id = &self.config.control_id;
        self.document.set_control_markup(id, icon::icon_for(theme))?;
        self.document.set_control_label(id, icon::label_for(theme))
    }

    /// Reuse the control from the markup, or create the floating one.
    ///
    /// # Errors
    ///
    /// Propagates document failures, including a missing body on creation.
    pub fn ensure_toggle_control(&mut self) -> Result<ControlStatus> {
        if self.document.has_control(&self.config.control_id)? {
            return Ok(ControlStatus::Existing);
        }
        self.document
            .create_control(&self.config.control_id, &self.config.control_class)?;
        log::debug!("theme: created control #{}", self.config.control_id);
        Ok(ControlStatus::Created)
    }

    /// Click handler body: invert whatever the root currently shows.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::apply_theme`].
    pub fn handle_click(&mut self) -> Result<Theme> {
        let shown = Theme::from_marker(self.document.has_marker(&self.config.marker_class)?);
        let next = shown.toggled();
        self.apply_theme(next)?;
        Ok(next)
    }

    // =========================================================================
    // STARTUP
    // =========================================================================

    /// Startup step one: resolve and, if dark, mark the root immediately.
    ///
    /// Nothing is persisted here; the store is only written on a click.
    ///
    /// # Errors
    ///
    /// Propagates document failures.
    pub fn boot(&mut self, scheme: &impl ColorScheme) -> Result<Theme> {
        let initial = self.resolve_initial_theme(scheme);
        self.state.theme = initial;
        if initial.is_dark() {
            self.document.set_marker(&self.config.marker_class, true)?;
        }
        log::debug!("theme: booted as {initial}");
        Ok(initial)
    }

    /// Startup step two: ensure the control exists and matches the theme.
    ///
    /// # Errors
    ///
    /// Propagates document failures.
    pub fn on_structure_ready(&mut self) -> Result<ControlStatus> {
        let status = self.ensure_toggle_control()?;
        self.update_icon(self.state.theme)?;
        Ok(status)
    }
}
