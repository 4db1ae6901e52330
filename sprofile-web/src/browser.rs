//! Thin wrappers over the browser location. Outside wasm they do nothing,
//! so pages still render under tests.

#[cfg(target_arch = "wasm32")]
mod imp {
    use tracing::error;

    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|window| window.location())
    }

    pub fn current_query() -> String {
        location()
            .and_then(|location| location.search().ok())
            .unwrap_or_default()
    }

    pub fn origin() -> Option<String> {
        location().and_then(|location| location.origin().ok())
    }

    pub fn navigate(url: &str) {
        match location() {
            Some(location) => {
                if let Err(e) = location.set_href(url) {
                    error!("Failed to navigate to {url}: {e:?}");
                }
            }
            None => error!("No window to navigate to {url}"),
        }
    }

    pub fn clear_element(id: &str) {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));
        if let Some(element) = element {
            element.set_inner_html("");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use tracing::warn;

    pub fn current_query() -> String {
        String::new()
    }

    pub fn origin() -> Option<String> {
        None
    }

    pub fn navigate(url: &str) {
        warn!("Navigation to {url} needs a browser");
    }

    #[allow(dead_code)]
    pub fn clear_element(_id: &str) {}
}

pub use imp::*;
