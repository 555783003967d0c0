//! Helpers bridging DOM events and Leptos signals to the canvas engine.

pub mod canvas_input;
pub mod canvas_viewport;
