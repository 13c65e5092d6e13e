//! Leptos components for pages that render the control themselves.

pub mod theme_toggle;
