//! Browser entry point: logger setup and Leptos mount.

use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed; keep going with whatever is there.
    }
    leptos::mount::mount_to_body(App);
}
