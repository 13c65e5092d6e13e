//! Browser entry points.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::host::web::{self, WebScheme};

/// Run the startup sequence with the default names.
#[wasm_bindgen]
pub fn start() {
    init_logging();
    if let Err(err) = run(ThemeConfig::default()) {
        log::error!("theme: startup failed: {err}");
    }
}

/// Run the startup sequence with JSON overrides for [`ThemeConfig`].
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) {
    init_logging();
    let result = ThemeConfig::from_json(json).and_then(run);
    if let Err(err) = result {
        log::error!("theme: startup failed: {err}");
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("theme: logger already installed: {err}");
    }
}

fn run(config: ThemeConfig) -> Result<()> {
    let window = web::window()?;
    let mut controller = web::connect(&window, config)?;

    // Before first paint: only the marker, so a dark page never flashes light.
    controller.boot(&WebScheme::new(window.clone()))?;

    if controller.document().ready_state() != "loading" {
        controller.on_structure_ready()?;
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || match controller.on_structure_ready() {
        Ok(status) => log::debug!("theme: control ready ({status:?})"),
        Err(err) => log::error!("theme: control setup failed: {err}"),
    });
    window
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|err| ThemeError::Dom(format!("addEventListener: {err:?}")))
}
