//! Reactive application state shared through Leptos contexts.

pub mod map;
pub mod view;
