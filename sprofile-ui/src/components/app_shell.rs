//! Outer page frame

use dioxus::prelude::*;

#[component]
pub fn AppShell(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-gray-100", {children} }
    }
}
