//! Pointer/wheel event mapping helpers.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::{Button, WheelDelta};
use mapgen::map::Point;

/// Map a DOM button index to the engine's button type.
#[must_use]
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Pointer position in CSS pixels relative to the canvas element.
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Wheel position in CSS pixels relative to the canvas element.
#[must_use]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Wheel scroll delta in pixels.
#[must_use]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }
}
