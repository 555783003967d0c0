//! Pan/zoom camera and coordinate conversions.
//!
//! The camera is the affine transform from generator space to screen space:
//! `screen = world * zoom + pan`. All camera mutations keep `zoom` inside
//! `[ZOOM_MIN, ZOOM_MAX]`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use mapgen::map::{Bounds, Point};

use crate::consts::{FIT_MARGIN, ZOOM_MAX, ZOOM_MIN};

/// Camera state for pan/zoom over the generated map.
///
/// `pan_x` / `pan_y` are in CSS pixels. `zoom` is a scale factor
/// (1.0 = one world unit per pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Shift the view by a raw screen-space delta.
    ///
    /// The delta is not zoom-corrected: dragging follows the pointer
    /// one-to-one at every zoom level.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Scale the zoom by `factor` while keeping the world point under
    /// `anchor` fixed on screen.
    ///
    /// The anchor is converted to world space under the current transform,
    /// the zoom is scaled and clamped, then the pan is recomputed so the
    /// same world point maps back to `anchor`.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        let world = self.screen_to_world(anchor);
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
        self.pan_x = anchor.x - world.x * self.zoom;
        self.pan_y = anchor.y - world.y * self.zoom;
    }

    /// Fit `bounds` into a `viewport_w` × `viewport_h` viewport, centered,
    /// with a margin of `FIT_MARGIN`.
    ///
    /// Degenerate bounds (zero width or height) would force an infinite
    /// zoom; the camera is left untouched and `false` is returned so the
    /// caller keeps the previous view.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, viewport_w: f64, viewport_h: f64) -> bool {
        if bounds.is_degenerate() {
            return false;
        }
        let zoom = f64::min(
            viewport_w / (bounds.width() * FIT_MARGIN),
            viewport_h / (bounds.height() * FIT_MARGIN),
        )
        .clamp(ZOOM_MIN, ZOOM_MAX);
        let center = bounds.center();
        self.zoom = zoom;
        self.pan_x = viewport_w * 0.5 - center.x * zoom;
        self.pan_y = viewport_h * 0.5 - center.y * zoom;
        true
    }
}
