//! Procedural road-network generation.
//!
//! This crate is the leaf of the viewer: it defines the road-network data
//! model and the generator strategies that produce it from a seed string.
//! It has no browser dependencies and is fully testable on native targets.
//! The viewport engine consumes only the output shape (segments and their
//! bounding box); the UI layer consumes the generator registry.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`map`] | Points, segments, generated maps, and bounding boxes |
//! | [`generator`] | The `generate(seed) -> MapData` capability and its implementations |

pub mod generator;
pub mod map;
