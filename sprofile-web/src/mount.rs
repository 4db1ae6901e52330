//! Mounting the app into a page element.

use dioxus::prelude::*;
use futures::future::{AbortHandle, Abortable};
use sprofile_core::{ApiClient, AppConfig};
use tracing::{debug, info};

use crate::api::ApiHandle;
use crate::{browser, Root, RootProps};

/// Stops a mounted app. Dropping it leaves the app running.
#[must_use = "call dispose() to unmount, or detach() to keep the app for the page lifetime"]
pub struct Disposer {
    abort: AbortHandle,
    root_id: String,
}

impl Disposer {
    /// Stop the app, dropping its components, and clear the element.
    pub fn dispose(self) {
        self.abort.abort();
        browser::clear_element(&self.root_id);
        info!("Unmounted from #{}", self.root_id);
    }

    /// Keep the app running until the page goes away.
    pub fn detach(self) {}
}

/// Render the app into the element with id `root_id`.
pub fn mount(root_id: &str, config: AppConfig) -> Disposer {
    let api = ApiHandle::new(ApiClient::from_config(&config));
    let dom = VirtualDom::new_with_props(Root, RootProps::builder().entry(config.entry).build())
        .with_root_context(api);

    let web_config = dioxus::web::Config::new().rootname(root_id);
    let (abort, registration) = AbortHandle::new_pair();
    let app = Abortable::new(dioxus::web::run(dom, web_config), registration);

    wasm_bindgen_futures::spawn_local(async move {
        if app.await.is_err() {
            debug!("App task aborted");
        }
    });

    info!("Mounted into #{root_id}");
    Disposer {
        abort,
        root_id: root_id.to_string(),
    }
}
