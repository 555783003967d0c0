//! Root application component and shared context provision.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::canvas_host::CanvasHost;
use crate::components::controls::GeneratorControls;
use crate::components::status_bar::StatusBar;
use crate::state::map::MapState;
use crate::state::view::ViewState;

/// Root application component.
///
/// Provides the shared state contexts and lays out the page: header with the
/// generation controls, the canvas, and the status bar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let map = RwSignal::new(MapState::default());
    let view = RwSignal::new(ViewState::default());
    provide_context(map);
    provide_context(view);

    view! {
        <Title text="Procedural Road Network"/>

        <div class="app-container">
            <header class="app-header">
                <h1>"Procedural Road Network"</h1>
                <GeneratorControls/>
            </header>
            <div class="canvas-container">
                <CanvasHost/>
            </div>
            <StatusBar/>
        </div>
    }
}
