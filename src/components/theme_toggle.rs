//! Toggle button rendered from the page template.
//!
//! When a page includes this component, the startup sequence finds the
//! control by id and reuses it instead of appending the floating one. Both
//! must agree on [`ThemeConfig`]: pass it as the `config` prop or provide it
//! with `provide_context`, using the same values given to `startWithConfig`.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::icon;
use crate::theme::Theme;

/// Button showing the glyph of the theme a click switches to.
///
/// `initial` is only what the server renders. Once mounted in the browser
/// the button follows the root marker, which reflects the stored preference.
#[component]
pub fn ThemeToggle(
    #[prop(optional)] initial: Theme,
    #[prop(optional)] config: Option<ThemeConfig>,
) -> impl IntoView {
    let config = config
        .or_else(use_context::<ThemeConfig>)
        .unwrap_or_default();
    let theme = RwSignal::new(initial);

    #[cfg(feature = "hydrate")]
    {
        let marker_config = config.clone();
        Effect::new(move |_| match crate::host::web::shown_theme(&marker_config) {
            Ok(shown) => theme.set(shown),
            Err(err) => log::warn!("theme: cannot read root marker: {err}"),
        });
    }

    #[cfg(feature = "hydrate")]
    let click_config = config.clone();
    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            match crate::host::web::toggle(&click_config) {
                Ok(next) => theme.set(next),
                Err(err) => log::error!("theme: toggle failed: {err}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            theme.update(|t| *t = t.toggled());
        }
    };

    view! {
        <button
            id=config.control_id
            class=config.control_class
            title=move || icon::label_for(theme.get())
            aria-label=move || icon::label_for(theme.get())
            on:click=on_click
            inner_html=move || icon::icon_for(theme.get())
        ></button>
    }
}
