//! Viewport synchronization between the DOM, the engine, and Leptos signals.

use leptos::prelude::*;

use canvas::engine::Engine;

use crate::state::view::ViewState;

/// Read the canvas element's CSS dimensions and device pixel ratio, then
/// push them to the engine.
///
/// Called before handling any input event and on resize notifications so
/// coordinate transforms stay accurate. Uses CSS pixel dimensions
/// (`client_width` / `client_height`) rather than backing-store pixels; the
/// engine multiplies by DPR internally when sizing the backing store.
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}

/// Publish the engine's camera and map statistics to the reactive view
/// state. `render_ms` is recorded when a render just happened.
pub fn sync_view_state(engine: &Engine, view: RwSignal<ViewState>, render_ms: Option<f64>) {
    let camera = engine.camera();
    let segment_count = engine.segment_count();
    view.update(|v| {
        v.zoom = camera.zoom;
        v.pan_x = camera.pan_x;
        v.pan_y = camera.pan_y;
        v.segment_count = segment_count;
        if render_ms.is_some() {
            v.last_render_ms = render_ms;
        }
    });
}
