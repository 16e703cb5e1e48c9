//! radarscope - decorative animated radar sweep
//!
//! Concentric rings, a rotating gradient wedge, and fixed target blips
//! on a 2D surface, redrawn once per host frame. Runs natively in an
//! eframe window and on the web attached to a canvas element.

pub mod app;
pub mod config;
pub mod sweep;
pub mod theme;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Web entry point: attach the scope to its canvas.
///
/// The canvas id comes from the `window.__scope_canvas` global (default
/// `"radar"`); the surface takes the canvas element's own dimensions. A
/// missing canvas is a configuration error and fails startup outright.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Route tracing to the browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas_id = js_sys::eval("window.__scope_canvas")
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "radar".to_string());

        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id(&canvas_id)
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        let mut config = config::ScopeConfig::default();
        config.surface_width = canvas.width() as f32;
        config.surface_height = canvas.height() as f32;
        if let Some(json) = js_sys::eval("window.__scope_targets")
            .ok()
            .and_then(|v| v.as_string())
        {
            config = config.with_targets_json(&json);
        }

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::ScopeApp::new(cc, config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
