//! # theme-toggle
//!
//! Light/dark theme switching for a web page, compiled to WASM.
//!
//! Resolves the starting theme from `localStorage` or the system color
//! scheme, marks the `<html>` element with a `dark` class, persists the
//! choice under the `theme` key, and keeps a toggle button's icon in sync.
//! All page and storage access goes through the traits in [`host`], so the
//! [`controller`] runs unchanged against in-memory fakes in tests.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod icon;
#[cfg(feature = "hydrate")]
pub mod start;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::{ControlStatus, ThemeController, ThemeState};
pub use error::ThemeError;
pub use theme::Theme;
