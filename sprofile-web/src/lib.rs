pub mod api;
pub mod browser;
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod mount;
pub mod pages;
pub mod settings;

use dioxus::prelude::*;
use sprofile_core::EntryMode;

pub use api::ApiHandle;
pub use pages::{Page, PageProps, ProfilePage, SessionGate, TracksPage};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Document head plus the page. Expects an [`ApiHandle`] in root context.
#[component]
pub fn Root(entry: EntryMode) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Page { entry }
    }
}
