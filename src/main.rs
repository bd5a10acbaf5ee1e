//
// Copyright (c) 2025 Tudor Caloian
//

//! Client-side entry point that mounts the application to the page body.

use dashexecs::preso::leptos::App;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
