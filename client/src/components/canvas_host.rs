//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! The engine owns the camera and the live map; this host maps DOM events
//! and state changes into engine operations, publishes viewport telemetry,
//! and schedules coalesced redraws on the browser's animation-frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use canvas::engine::{Action, Engine};

use crate::state::map::MapState;
use crate::state::view::ViewState;
use crate::util::canvas_input::{map_button, pointer_point, wheel_delta, wheel_point};
use crate::util::canvas_viewport::{sync_view_state, sync_viewport};

/// Engine slot shared between handlers; populated on mount.
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Pending animation-frame request: the browser handle plus the callback
/// closure, which must stay alive until it fires or is canceled.
type RafSlot = Rc<RefCell<Option<(i32, Closure<dyn FnMut(f64)>)>>>;

fn render_and_track(engine: &mut Engine, view: RwSignal<ViewState>) {
    let started_ms = js_sys::Date::now();
    if let Err(err) = engine.render() {
        // Keep the last good frame on screen; nothing to update.
        log::error!("render failed: {err:?}");
        return;
    }
    let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
    sync_view_state(engine, view, Some(elapsed_ms));
}

/// Schedule exactly one redraw on the next animation frame.
///
/// A pending request is canceled and replaced rather than stacked, so a
/// burst of pointer events collapses into a single frame's worth of work.
fn request_render(engine: &SharedEngine, view: RwSignal<ViewState>, raf: &RafSlot) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Some((handle, _stale_cb)) = raf.borrow_mut().take() {
        if let Err(err) = window.cancel_animation_frame(handle) {
            log::warn!("cancel_animation_frame failed: {err:?}");
        }
    }

    let engine_for_cb = Rc::clone(engine);
    let raf_for_cb = Rc::clone(raf);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_for_cb.borrow_mut().take();
        if let Some(engine) = engine_for_cb.borrow_mut().as_mut() {
            render_and_track(engine, view);
        }
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(handle) => {
            *raf.borrow_mut() = Some((handle, cb));
        }
        Err(err) => {
            // No frame clock available; render synchronously rather than
            // dropping the update.
            log::warn!("request_animation_frame failed: {err:?}");
            if let Some(engine) = engine.borrow_mut().as_mut() {
                render_and_track(engine, view);
            }
        }
    }
}

fn process_actions(
    actions: Vec<Action>,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    engine: &SharedEngine,
    view: RwSignal<ViewState>,
    raf: &RafSlot,
) {
    for action in actions {
        match action {
            Action::RenderNeeded => request_render(engine, view, raf),
            Action::SetCursor(cursor) => set_canvas_cursor(canvas_ref, &cursor),
        }
    }
}

fn set_canvas_cursor(canvas_ref: &NodeRef<leptos::html::Canvas>, cursor: &str) {
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    if let Err(err) = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor) {
        log::warn!("failed to set cursor: {err:?}");
    }
}

/// Canvas host component.
///
/// Mounts the `<canvas>`, creates the engine once the element exists, and
/// keeps the engine fed with viewport dimensions, generated maps, and input
/// events. Pointer capture keeps a drag alive until release even when the
/// pointer leaves the canvas.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();
    let view = expect_context::<RwSignal<ViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    let raf: RafSlot = Rc::new(RefCell::new(None));
    // One-shot readiness signal: flips true once the engine exists, so the
    // map-sync effect below re-runs instead of dropping an early completion.
    let engine_ready = RwSignal::new(false);

    // Mount: create the engine as soon as the canvas element exists.
    {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        Effect::new(move || {
            let Some(canvas_el) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = Engine::new(canvas_el);
            sync_viewport(&mut instance, &canvas_ref);
            sync_view_state(&instance, view, None);
            *engine.borrow_mut() = Some(instance);
            engine_ready.set(true);
            request_render(&engine, view, &raf);
        });
    }

    // Map sync: pick up completed generations and push them into the engine.
    {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        Effect::new(move || {
            if !engine_ready.get() || map.with(|m| m.completed.is_none()) {
                return;
            }
            let Some(data) = map.try_update(MapState::take_completed).flatten() else {
                return;
            };
            let mut actions = Vec::new();
            if let Some(engine_ref) = engine.borrow_mut().as_mut() {
                sync_viewport(engine_ref, &canvas_ref);
                actions.push(engine_ref.set_map(data));
                sync_view_state(engine_ref, view, None);
            }
            process_actions(actions, &canvas_ref, &engine, view, &raf);
        });
    }

    // Resize: update the backing store and refit the current map so the
    // content stays centered. Installed once; the listener lives as long as
    // the page does.
    {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        Effect::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let engine_for_cb = Rc::clone(&engine);
            let raf_for_cb = Rc::clone(&raf);
            let on_resize = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                let mut actions = Vec::new();
                if let Some(engine_ref) = engine_for_cb.borrow_mut().as_mut() {
                    sync_viewport(engine_ref, &canvas_ref);
                    actions.push(engine_ref.fit_to_content());
                    sync_view_state(engine_ref, view, None);
                }
                process_actions(actions, &canvas_ref, &engine_for_cb, view, &raf_for_cb);
            }) as Box<dyn FnMut(web_sys::Event)>);
            if window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("failed to attach resize listener");
            }
            on_resize.forget();
        });
    }

    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(canvas_el) = canvas_ref.get() {
                if let Err(err) = canvas_el.set_pointer_capture(ev.pointer_id()) {
                    log::warn!("pointer capture failed: {err:?}");
                }
            }
            let mut actions = Vec::new();
            if let Some(engine_ref) = engine.borrow_mut().as_mut() {
                sync_viewport(engine_ref, &canvas_ref);
                actions = engine_ref.on_pointer_down(pointer_point(&ev), map_button(ev.button()));
            }
            process_actions(actions, &canvas_ref, &engine, view, &raf);
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        move |ev: leptos::ev::PointerEvent| {
            let mut actions = Vec::new();
            if let Some(engine_ref) = engine.borrow_mut().as_mut() {
                sync_viewport(engine_ref, &canvas_ref);
                actions = engine_ref.on_pointer_move(pointer_point(&ev));
            }
            process_actions(actions, &canvas_ref, &engine, view, &raf);
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas_el) = canvas_ref.get() {
                if let Err(err) = canvas_el.release_pointer_capture(ev.pointer_id()) {
                    log::warn!("pointer release failed: {err:?}");
                }
            }
            let mut actions = Vec::new();
            if let Some(engine_ref) = engine.borrow_mut().as_mut() {
                sync_viewport(engine_ref, &canvas_ref);
                actions = engine_ref.on_pointer_up(pointer_point(&ev), map_button(ev.button()));
            }
            process_actions(actions, &canvas_ref, &engine, view, &raf);
        }
    };

    let on_wheel = {
        let engine = Rc::clone(&engine);
        let raf = Rc::clone(&raf);
        move |ev: leptos::ev::WheelEvent| {
            // Zoom must not scroll the page.
            ev.prevent_default();
            let mut actions = Vec::new();
            if let Some(engine_ref) = engine.borrow_mut().as_mut() {
                sync_viewport(engine_ref, &canvas_ref);
                actions = engine_ref.on_wheel(wheel_point(&ev), wheel_delta(&ev));
            }
            process_actions(actions, &canvas_ref, &engine, view, &raf);
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class="map-canvas"
            aria-label="Generated road network"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:wheel=on_wheel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
