//! UI components.

pub mod canvas_host;
pub mod controls;
pub mod status_bar;
