//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.01;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 50.0;

/// Bounding-box inflation applied by fit-to-content; reserves a 10% margin
/// around the map.
pub const FIT_MARGIN: f64 = 1.1;

/// Zoom multiplier applied per wheel notch (wheel-down applies the inverse).
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ── Palette ─────────────────────────────────────────────────────

/// Stroke color for highway segments.
pub const HIGHWAY_COLOR: &str = "hsl(54, 78%, 70%)";

/// Stroke color for ordinary road segments.
pub const ROAD_COLOR: &str = "#b0b0b0";
