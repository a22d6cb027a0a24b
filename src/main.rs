//! Browser entry point. Build with `--features csr` for the WASM bundle.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
        }
        log::info!("studio site starting");
        leptos::mount::mount_to_body(studio_site::app::App);
    }
}
