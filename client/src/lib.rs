//! # client
//!
//! Leptos (CSR) frontend for the procedural road-network viewer.
//!
//! This crate contains the page shell, components, and application state. It
//! integrates with the `canvas` crate for imperative rendering via the
//! `CanvasHost` bridge component, and with `mapgen` for map generation from
//! the seed input.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
