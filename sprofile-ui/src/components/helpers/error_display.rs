//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

pub const LOGIN_HINT: &str = "Please make sure you're logged in and try again.";

/// Error box with a heading, the failure message and a login hint
#[component]
pub fn ErrorDisplay(
    #[props(default = "Error".to_string())] heading: String,
    message: String,
) -> Element {
    rsx! {
        div {
            class: "bg-red-900/40 border border-red-700 text-red-100 px-4 py-3 rounded-lg mb-4",
            role: "alert",
            "data-testid": "error-display",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-red-400 flex-shrink-0 mt-0.5" }
                div {
                    h2 { class: "font-semibold mb-1", "{heading}" }
                    p { class: "text-sm select-text break-words", "{message}" }
                    p { class: "text-sm text-red-200/70 mt-2", {LOGIN_HINT} }
                }
            }
        }
    }
}
