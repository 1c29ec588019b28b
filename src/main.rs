mod app;
mod core;
mod features;

use app::App;
use leptos::mount::mount_to_body;

fn main() {
    // Surface Rust panics in the browser console instead of a silent abort
    console_error_panic_hook::set_once();

    mount_to_body(App);
}
