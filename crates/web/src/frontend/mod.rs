//! Leptos frontend for the catalog page.

pub mod app;
pub mod filters;

use chrono::Utc;
use leptos::*;

use crate::bootstrap;
use app::App;

/// Mount the page into `<body>`. Called once from the wasm entry point.
pub fn mount() {
    console_error_panic_hook::set_once();

    match bootstrap::mount_embedded(Utc::now()) {
        Ok(catalog_view) => mount_to_body(move || view! { <App initial=catalog_view/> }),
        Err(err) => {
            let message = format!("{err:#}");
            mount_to_body(move || view! { <p class="error">{message}</p> })
        }
    }
}
