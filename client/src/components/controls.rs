//! Seed input and generation trigger.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use mapgen::generator::{MapGenerator, generator_by_name};

use crate::state::map::MapState;

/// Generator backend requested by the UI.
const GENERATOR_NAME: &str = "sprawl";

/// Delay before generation runs, giving the disabled button a chance to
/// paint before the (potentially slow) generator blocks the thread.
const GENERATION_DELAY_MS: u32 = 10;

/// Seed input plus generate button.
///
/// The button is disabled while a request is in flight and its label swaps
/// to a progress caption; Enter in the input triggers the same path. One
/// generation fires automatically on startup for the default seed.
#[component]
pub fn GeneratorControls() -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();

    Effect::new(move || {
        if map.with_untracked(|m| m.request_seq) == 0 {
            start_generation(map);
        }
    });

    let on_click = move |_ev: leptos::ev::MouseEvent| start_generation(map);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            start_generation(map);
        }
    };
    let on_input = move |ev: leptos::ev::Event| {
        map.update(|m| m.seed = event_target_value(&ev));
    };

    view! {
        <div class="controls">
            <input
                type="text"
                class="seed-input"
                prop:value=move || map.with(|m| m.seed.clone())
                on:input=on_input
                on:keydown=on_keydown
                placeholder="Map generation seed"
                aria-label="Map generation seed"
            />
            <button
                class="generate-button"
                on:click=on_click
                prop:disabled=move || map.with(|m| m.generating)
            >
                {move || {
                    if map.with(|m| m.generating) { "Generating..." } else { "Generate Map" }
                }}
            </button>
        </div>
    }
}

/// Kick off a deferred generation run.
///
/// The request is flagged in flight immediately; the generator call itself
/// is deferred by a short timeout so the loading state paints first. The
/// completion echoes the request's sequence number and is dropped by
/// `MapState` if a newer request was issued meanwhile. The in-flight flag is
/// cleared on success and failure alike.
fn start_generation(map: RwSignal<MapState>) {
    if map.with_untracked(|m| m.generating) {
        return;
    }
    let mut seq = 0;
    map.update(|m| seq = m.begin_request());
    let seed = map.with_untracked(|m| m.seed.clone());

    Timeout::new(GENERATION_DELAY_MS, move || {
        let result = generator_by_name(GENERATOR_NAME).and_then(|g| g.generate(&seed));
        match result {
            Ok(data) => {
                log::info!("generated {} segments for seed {seed:?}", data.len());
                map.update(|m| m.finish_request(seq, Some(data)));
            }
            Err(err) => {
                log::error!("map generation failed: {err}");
                map.update(|m| m.finish_request(seq, None));
            }
        }
    })
    .forget();
}
