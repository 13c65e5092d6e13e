//! Glyphs shown on the toggle control.
//!
//! The control always shows the theme it will switch *to*: a moon while
//! the page is light, a sun while it is dark.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use crate::theme::Theme;

/// Crescent moon, offered while the page is light.
pub const MOON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-6 h-6"><path stroke-linecap="round" stroke-linejoin="round" d="M21.752 15.002A9.718 9.718 0 0118 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 003 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 009.002-5.998z" /></svg>"#;

/// Sun, offered while the page is dark.
pub const SUN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-6 h-6"><path stroke-linecap="round" stroke-linejoin="round" d="M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z" /></svg>"#;

/// Markup for the control while `theme` is applied.
#[must_use]
pub fn icon_for(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => MOON_SVG,
        Theme::Dark => SUN_SVG,
    }
}

/// Accessible label describing what a click will do.
#[must_use]
pub fn label_for(theme: Theme) -> &'static str {
    match theme.toggled() {
        Theme::Light => "Switch to light mode",
        Theme::Dark => "Switch to dark mode",
    }
}
