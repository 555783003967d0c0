//! Viewport and map telemetry readout.

use leptos::prelude::*;

use crate::state::view::ViewState;

/// Bottom status bar: zoom percentage, segment count, last frame time.
#[component]
pub fn StatusBar() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    let zoom_label = move || format!("{:.0}%", view.with(|v| v.zoom) * 100.0);
    let segment_label = move || view.with(|v| v.segment_count).to_string();
    let frame_label = move || {
        view.with(|v| v.last_render_ms)
            .map_or_else(|| "-".to_owned(), |ms| format!("{ms:.1} ms"))
    };

    view! {
        <footer class="status-bar">
            <span class="status-bar__item">"Zoom " {zoom_label}</span>
            <span class="status-bar__item">"Segments " {segment_label}</span>
            <span class="status-bar__item">"Frame " {frame_label}</span>
        </footer>
    }
}
