//! Rendering: strokes the road network to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! map and camera and produces pixels — it does not mutate any application
//! state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use mapgen::map::{MapData, Segment};

use crate::camera::Camera;
use crate::consts::{HIGHWAY_COLOR, ROAD_COLOR};

/// Draw the full scene.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device
/// pixel ratio. Every frame starts from the identity transform and reapplies
/// pan/zoom fresh, so no transform state leaks between frames.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    map: Option<&MapData>,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: reset to identity (scaled for DPR), clear, apply the camera.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: segments in sequence order (no z-sorting).
    let Some(map) = map else {
        return Ok(());
    };
    ctx.set_line_cap("round");
    for segment in &map.segments {
        draw_segment(ctx, segment);
    }
    Ok(())
}

/// Stroke one segment. Highways draw in the highway color at half the
/// segment width; ordinary roads at full width. Round caps keep zero-length
/// segments visible as dots.
fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
    if segment.highway {
        ctx.set_stroke_style_str(HIGHWAY_COLOR);
        ctx.set_line_width(segment.width * 0.5);
    } else {
        ctx.set_stroke_style_str(ROAD_COLOR);
        ctx.set_line_width(segment.width);
    }
    ctx.begin_path();
    ctx.move_to(segment.start.x, segment.start.y);
    ctx.line_to(segment.end.x, segment.end.y);
    ctx.stroke();
}
