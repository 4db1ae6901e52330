//! Login prompt view - shown when there is no session

use crate::components::helpers::{Notice, PageContainer};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

pub const LOGIN_HEADING: &str = "Welcome to Spotify User Profile";
pub const LOGIN_BODY: &str =
    "Please log in with your Spotify account to view your profile and top tracks.";
pub const LOGIN_BUTTON: &str = "Login with Spotify";

/// Static call to action. The caller decides what "log in" means
/// (a full-page navigation in the browser).
#[component]
pub fn LoginPromptView(
    /// Outcome of a failed login round trip, shown above the button
    #[props(default)]
    notice: Option<String>,
    on_login: EventHandler<()>,
) -> Element {
    rsx! {
        PageContainer {
            div {
                class: "max-w-lg mx-auto text-center py-16",
                "data-testid": "login-prompt",
                h1 { class: "text-3xl font-bold text-white mb-4", {LOGIN_HEADING} }
                p { class: "text-gray-400 mb-8", {LOGIN_BODY} }
                if let Some(message) = notice {
                    Notice { message }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    testid: "login-button",
                    onclick: move |_| on_login.call(()),
                    {LOGIN_BUTTON}
                }
            }
        }
    }
}
