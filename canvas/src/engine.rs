//! Top-level engine: owns the camera, the current map, and the canvas.
//!
//! [`EngineCore`] holds everything that does not depend on the browser and is
//! unit-tested on native targets. [`Engine`] wraps it together with the
//! `HtmlCanvasElement`, keeps the backing store sized to the viewport, and
//! drives the renderer.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use mapgen::map::{MapData, Point};

use crate::camera::Camera;
use crate::consts::WHEEL_ZOOM_STEP;
use crate::input::{Button, InputState, WheelDelta};
use crate::render;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The view changed; the host should schedule a redraw.
    RenderNeeded,
    /// The host should set the CSS cursor on the canvas element.
    SetCursor(String),
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug)]
pub struct EngineCore {
    /// The current map, replaced wholesale on regeneration. `None` until the
    /// first generation completes.
    pub map: Option<MapData>,
    pub camera: Camera,
    pub input: InputState,
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
    /// Device pixel ratio used to size the backing store.
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            map: None,
            camera: Camera::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the map wholesale and fit the new content into view.
    pub fn set_map(&mut self, map: MapData) -> Action {
        self.map = Some(map);
        self.fit_to_content()
    }

    /// Fit the current map's bounding box into the viewport.
    ///
    /// A missing map, an empty map, or a degenerate bounding box (zero width
    /// or height) leaves the camera untouched; a redraw is requested either
    /// way so the canvas never shows stale content.
    pub fn fit_to_content(&mut self) -> Action {
        if let Some(bounds) = self.map.as_ref().and_then(MapData::bounds) {
            self.camera
                .fit_to_bounds(&bounds, self.viewport_width, self.viewport_height);
        }
        Action::RenderNeeded
    }

    /// Record new viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// Does not refit: this runs before every input event to keep transforms
    /// accurate, and refitting there would fight an active drag. The host
    /// calls [`Self::fit_to_content`] explicitly on real resize events.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Input events ---

    /// Begin a pan drag. Only the primary button starts a gesture.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Panning { last_screen: screen };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// Continue the active drag; a no-op while idle.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let InputState::Panning { last_screen } = self.input else {
            return Vec::new();
        };
        self.camera
            .pan_by(screen.x - last_screen.x, screen.y - last_screen.y);
        self.input = InputState::Panning { last_screen: screen };
        vec![Action::RenderNeeded]
    }

    /// End the active drag, wherever the pointer lands.
    pub fn on_pointer_up(&mut self, _screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("grab".to_owned())]
    }

    /// Zoom around the cursor. Only the sign of the vertical delta matters:
    /// one wheel notch is one `WHEEL_ZOOM_STEP` step.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        let factor = if delta.dy < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        self.camera.zoom_at(screen, factor);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Number of segments in the current map (0 when no map is loaded).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.map.as_ref().map_or(0, MapData::len)
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn set_map(&mut self, map: MapData) -> Action {
        self.core.set_map(map)
    }

    pub fn fit_to_content(&mut self) -> Action {
        self.core.fit_to_content()
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.sync_backing_store();
    }

    /// Size the pixel buffer to `css * dpr`, touching the element only when
    /// the value actually changed (assigning width/height clears the canvas).
    fn sync_backing_store(&self) {
        let device_w = device_size(self.core.viewport_width, self.core.dpr);
        let device_h = device_size(self.core.viewport_height, self.core.dpr);
        if self.canvas.width() != device_w {
            self.canvas.set_width(device_w);
        }
        if self.canvas.height() != device_h {
            self.canvas.set_height(device_h);
        }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen, button)
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen, button)
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call
    /// fails; the previous frame stays on screen.
    pub fn render(&self) -> Result<(), JsValue> {
        self.sync_backing_store();
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            self.core.map.as_ref(),
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.core.segment_count()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_size(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().max(0.0) as u32
}
