fn main() {
    dioxus::logger::initialize_default();

    #[cfg(target_arch = "wasm32")]
    {
        let origin = sprofile_web::browser::origin().unwrap_or_default();
        let config = sprofile_web::settings::resolve(&origin);
        sprofile_web::mount::mount("main", config).detach();
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("sprofile-web runs in the browser; build it for wasm32 with `dx build`");
}
