use dioxus::prelude::*;
use sprofile_core::EntryMode;
use sprofile_ui::AppShell;

use super::{ProfilePage, SessionGate};

/// Composition root: picks what mounts first.
#[component]
pub fn Page(#[props(default)] entry: EntryMode) -> Element {
    let body = match entry {
        EntryMode::Gated => rsx! {
            SessionGate {}
        },
        EntryMode::Ungated => rsx! {
            ProfilePage {}
        },
    };

    rsx! {
        AppShell { {body} }
    }
}
