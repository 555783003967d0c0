#![allow(clippy::float_cmp)]

use super::*;
use mapgen::generator::{MapGenerator, RandomSprawl};
use mapgen::map::Segment;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn core_with_viewport(w: f64, h: f64) -> EngineCore {
    let mut core = EngineCore::new();
    core.set_viewport(w, h, 1.0);
    core
}

fn segment(sx: f64, sy: f64, ex: f64, ey: f64) -> Segment {
    Segment {
        start: Point::new(sx, sy),
        end: Point::new(ex, ey),
        width: 2.0,
        highway: false,
    }
}

fn reference_map() -> MapData {
    // Bounding box exactly (0,0)-(100,50).
    MapData::new(vec![segment(0.0, 0.0, 100.0, 50.0)])
}

// --- Defaults ---

#[test]
fn new_core_is_empty_and_idle() {
    let core = EngineCore::new();
    assert!(core.map.is_none());
    assert_eq!(core.segment_count(), 0);
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.camera(), Camera::default());
    assert_eq!(core.dpr, 1.0);
}

// --- set_map / fit_to_content ---

#[test]
fn set_map_fits_content() {
    let mut core = core_with_viewport(800.0, 600.0);
    let action = core.set_map(reference_map());
    assert_eq!(action, Action::RenderNeeded);
    assert!(approx_eq(core.camera.zoom, 800.0 / 110.0));
    let center = core.camera.world_to_screen(Point::new(50.0, 25.0));
    assert!(approx_eq(center.x, 400.0));
    assert!(approx_eq(center.y, 300.0));
}

#[test]
fn set_map_replaces_wholesale() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.set_map(reference_map());
    core.set_map(MapData::new(vec![segment(0.0, 0.0, 10.0, 10.0), segment(1.0, 1.0, 2.0, 2.0)]));
    assert_eq!(core.segment_count(), 2);
}

#[test]
fn fit_with_no_map_keeps_camera_but_requests_render() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.camera = Camera { pan_x: 5.0, pan_y: 6.0, zoom: 2.0 };
    assert_eq!(core.fit_to_content(), Action::RenderNeeded);
    assert_eq!(core.camera, Camera { pan_x: 5.0, pan_y: 6.0, zoom: 2.0 });
}

#[test]
fn fit_with_empty_map_keeps_camera() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.camera = Camera { pan_x: 5.0, pan_y: 6.0, zoom: 2.0 };
    assert_eq!(core.set_map(MapData::default()), Action::RenderNeeded);
    assert_eq!(core.camera, Camera { pan_x: 5.0, pan_y: 6.0, zoom: 2.0 });
}

#[test]
fn fit_with_degenerate_map_keeps_camera() {
    // A single zero-length segment: legal map, unfittable bounds.
    let mut core = core_with_viewport(800.0, 600.0);
    core.camera = Camera { pan_x: 1.0, pan_y: 2.0, zoom: 3.0 };
    core.set_map(MapData::new(vec![segment(9.0, 9.0, 9.0, 9.0)]));
    assert_eq!(core.camera, Camera { pan_x: 1.0, pan_y: 2.0, zoom: 3.0 });
    assert_eq!(core.segment_count(), 1);
}

#[test]
fn fit_after_resize_recenters() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.set_map(reference_map());
    core.set_viewport(400.0, 300.0, 2.0);
    core.fit_to_content();
    assert!(approx_eq(core.camera.zoom, 400.0 / 110.0));
    let center = core.camera.world_to_screen(Point::new(50.0, 25.0));
    assert!(approx_eq(center.x, 200.0));
    assert!(approx_eq(center.y, 150.0));
}

#[test]
fn fit_handles_generated_maps() {
    let mut core = core_with_viewport(1024.0, 768.0);
    core.set_map(RandomSprawl.generate("test").unwrap());
    assert!(core.camera.zoom > 0.0);
    assert!(core.segment_count() >= 50);
}

// --- set_viewport ---

#[test]
fn set_viewport_records_dimensions_without_refitting() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.set_map(reference_map());
    let before = core.camera;
    core.set_viewport(1000.0, 500.0, 2.0);
    assert_eq!(core.viewport_width, 1000.0);
    assert_eq!(core.viewport_height, 500.0);
    assert_eq!(core.dpr, 2.0);
    assert_eq!(core.camera, before);
}

// --- Pointer gesture machine ---

#[test]
fn primary_down_begins_panning() {
    let mut core = core_with_viewport(800.0, 600.0);
    let actions = core.on_pointer_down(Point::new(10.0, 20.0), Button::Primary);
    assert_eq!(actions, vec![Action::SetCursor("grabbing".to_owned())]);
    assert_eq!(core.input, InputState::Panning { last_screen: Point::new(10.0, 20.0) });
}

#[test]
fn secondary_down_is_ignored() {
    let mut core = core_with_viewport(800.0, 600.0);
    assert!(core.on_pointer_down(Point::new(10.0, 20.0), Button::Secondary).is_empty());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn move_while_idle_does_nothing() {
    let mut core = core_with_viewport(800.0, 600.0);
    assert!(core.on_pointer_move(Point::new(50.0, 50.0)).is_empty());
    assert_eq!(core.camera, Camera::default());
}

#[test]
fn drag_pans_by_screen_delta() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary);
    let actions = core.on_pointer_move(Point::new(130.0, 80.0));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.camera.pan_x, 30.0);
    assert_eq!(core.camera.pan_y, -20.0);
}

#[test]
fn drag_deltas_are_incremental() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary);
    core.on_pointer_move(Point::new(10.0, 0.0));
    core.on_pointer_move(Point::new(25.0, 5.0));
    assert_eq!(core.camera.pan_x, 25.0);
    assert_eq!(core.camera.pan_y, 5.0);
}

#[test]
fn drag_is_not_zoom_corrected() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.camera.zoom = 10.0;
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary);
    core.on_pointer_move(Point::new(15.0, 0.0));
    assert_eq!(core.camera.pan_x, 15.0);
}

#[test]
fn up_ends_drag_and_restores_cursor() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary);
    let actions = core.on_pointer_up(Point::new(500.0, -40.0), Button::Primary);
    assert_eq!(actions, vec![Action::SetCursor("grab".to_owned())]);
    assert_eq!(core.input, InputState::Idle);
    // Moves after release do not pan.
    assert!(core.on_pointer_move(Point::new(600.0, 0.0)).is_empty());
}

#[test]
fn up_while_idle_does_nothing() {
    let mut core = core_with_viewport(800.0, 600.0);
    assert!(core.on_pointer_up(Point::new(0.0, 0.0), Button::Primary).is_empty());
}

// --- Wheel zoom ---

#[test]
fn wheel_up_zooms_in_around_cursor() {
    // Spec scenario: dy = -10 at (400, 300) on the identity camera.
    let mut core = core_with_viewport(800.0, 600.0);
    let actions = core.on_wheel(Point::new(400.0, 300.0), WheelDelta { dx: 0.0, dy: -10.0 });
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(approx_eq(core.camera.zoom, 1.1));
    assert!(approx_eq(core.camera.pan_x, 400.0 - 400.0 * 1.1));
    assert!(approx_eq(core.camera.pan_y, 300.0 - 300.0 * 1.1));
    // The world point under the cursor is unchanged.
    let world = core.camera.screen_to_world(Point::new(400.0, 300.0));
    assert!(approx_eq(world.x, 400.0));
    assert!(approx_eq(world.y, 300.0));
}

#[test]
fn wheel_down_zooms_out() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.on_wheel(Point::new(200.0, 100.0), WheelDelta { dx: 0.0, dy: 25.0 });
    assert!(approx_eq(core.camera.zoom, 1.0 / 1.1));
}

#[test]
fn wheel_magnitude_is_ignored() {
    let mut a = core_with_viewport(800.0, 600.0);
    let mut b = core_with_viewport(800.0, 600.0);
    a.on_wheel(Point::new(100.0, 100.0), WheelDelta { dx: 0.0, dy: -1.0 });
    b.on_wheel(Point::new(100.0, 100.0), WheelDelta { dx: 0.0, dy: -250.0 });
    assert_eq!(a.camera, b.camera);
}

#[test]
fn wheel_with_zero_dy_does_nothing() {
    let mut core = core_with_viewport(800.0, 600.0);
    assert!(core.on_wheel(Point::new(100.0, 100.0), WheelDelta { dx: 12.0, dy: 0.0 }).is_empty());
    assert_eq!(core.camera, Camera::default());
}

#[test]
fn zoom_stays_clamped_through_any_wheel_sequence() {
    let mut core = core_with_viewport(800.0, 600.0);
    for i in 0..200 {
        let dy = if i % 3 == 0 { 1.0 } else { -1.0 };
        core.on_wheel(Point::new(400.0, 300.0), WheelDelta { dx: 0.0, dy });
        assert!(core.camera.zoom >= crate::consts::ZOOM_MIN);
        assert!(core.camera.zoom <= crate::consts::ZOOM_MAX);
    }
}

#[test]
fn wheel_round_trip_restores_camera() {
    let mut core = core_with_viewport(800.0, 600.0);
    core.set_map(reference_map());
    let before = core.camera;
    core.on_wheel(Point::new(123.0, 456.0), WheelDelta { dx: 0.0, dy: -1.0 });
    core.on_wheel(Point::new(123.0, 456.0), WheelDelta { dx: 0.0, dy: 1.0 });
    assert!(approx_eq(core.camera.zoom, before.zoom));
    assert!(approx_eq(core.camera.pan_x, before.pan_x));
    assert!(approx_eq(core.camera.pan_y, before.pan_y));
}
