//! Input model: mouse buttons, wheel deltas, and the drag gesture machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. The only gesture in this viewer is panning; it carries the
//! previous pointer position so each pointer-move can emit an incremental
//! screen-space delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use mapgen::map::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning the view by dragging.
    Panning {
        /// Screen-space position of the previous pointer event, used to
        /// compute the next pan delta.
        last_screen: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
