//! Catalog page entry point.
//!
//! In the browser (wasm32, built with trunk) this mounts the Leptos app.
//! Natively it checks the embedded assets and logs a summary.

#[cfg(target_arch = "wasm32")]
fn main() {
    catalog_web::frontend::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let view = catalog_web::bootstrap::mount_embedded(chrono::Utc::now())?;
    tracing::info!(
        page_count = view.page_count(),
        status = %view.status_line(),
        "embedded catalog verified"
    );
    eprintln!(
        "The catalog UI runs in the browser. Build it with: trunk serve crates/web/index.html"
    );
    Ok(())
}
