//! Page container component

use dioxus::prelude::*;

/// Centered page column with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto max-w-5xl p-6", {children} }
    }
}
