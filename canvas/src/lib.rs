//! Canvas rendering and input engine for the road-network viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the viewport: translating raw DOM input events into camera mutations,
//! fitting generated content into view, and rendering the road network to a
//! 2D canvas context. The host UI layer is responsible only for wiring DOM
//! events to the engine and scheduling redraws when handlers return
//! [`engine::Action::RenderNeeded`].
//!
//! Everything except the canvas element itself lives in
//! [`engine::EngineCore`], which is unit-tested on native targets without a
//! browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Pan/zoom camera, coordinate conversions, fit-to-content |
//! | [`input`] | Input event types and the drag gesture state machine |
//! | [`render`] | Road-network rendering to a Canvas2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, palette, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
