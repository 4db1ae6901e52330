//! Amber notice for non-fatal conditions

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

#[component]
pub fn Notice(message: String) -> Element {
    rsx! {
        div {
            class: "bg-amber-900/30 border border-amber-700/50 rounded-lg p-4 mb-6",
            "data-testid": "notice",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                p { class: "text-sm text-amber-200 break-words", "{message}" }
            }
        }
    }
}
