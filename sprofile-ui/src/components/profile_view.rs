//! Profile view component - pure rendering, no data fetching

use crate::components::helpers::{ErrorDisplay, LoadingSpinner, Notice, PageContainer};
use crate::components::icons::ExternalLinkIcon;
use crate::components::utils::{
    account_type_label, avatar_initial, display_name_or_id, format_count,
};
use crate::components::{ButtonSize, ButtonVariant, LinkButton};
use crate::display_types::ProfileDisplay;
use dioxus::prelude::*;
use sprofile_common::ViewState;

pub const NO_USER_DATA: &str = "No user data available";

/// Renders one profile state. The tracks section is a slot so this view
/// never knows where the artists come from.
#[component]
pub fn ProfileView(
    state: ViewState<ProfileDisplay>,
    /// Mounted beneath the card once the profile is ready
    #[props(default)]
    tracks: Option<Element>,
) -> Element {
    let body = match state {
        ViewState::Loading => rsx! {
            LoadingSpinner { message: "Loading profile...".to_string() }
        },
        ViewState::Failed(message) => rsx! {
            ErrorDisplay { message }
        },
        ViewState::Empty => rsx! {
            Notice { message: NO_USER_DATA.to_string() }
        },
        ViewState::Ready(profile) => rsx! {
            ProfileCard { profile }
            if let Some(tracks) = tracks {
                {tracks}
            }
        },
    };

    rsx! {
        PageContainer { {body} }
    }
}

#[component]
fn ProfileCard(profile: ProfileDisplay) -> Element {
    let name = display_name_or_id(profile.display_name.as_deref(), &profile.id).to_string();
    let initial = avatar_initial(profile.display_name.as_deref());
    let followers = format_count(profile.followers);
    let account_type = account_type_label(profile.account_type.as_deref());
    let id = profile.id.clone();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg shadow-lg p-6 mb-8",
            "data-testid": "profile-card",
            div { class: "flex items-center gap-6",
                if let Some(url) = &profile.avatar_url {
                    img {
                        src: "{url}",
                        alt: "Avatar of {name}",
                        class: "w-24 h-24 rounded-full object-cover",
                        "data-testid": "avatar-image",
                    }
                } else {
                    div {
                        class: "w-24 h-24 rounded-full bg-green-700 flex items-center justify-center text-4xl font-bold text-white",
                        "data-testid": "avatar-placeholder",
                        "{initial}"
                    }
                }
                div { class: "flex-1 min-w-0",
                    h1 { class: "text-3xl font-bold text-white truncate", "{name}" }
                    p { class: "text-sm text-gray-400 mt-1 select-text", "ID: {id}" }
                    if let Some(url) = profile.spotify_url.clone() {
                        LinkButton {
                            href: url,
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            external: true,
                            class: "mt-3".to_string(),
                            testid: "profile-link",
                            "Open in Spotify"
                            ExternalLinkIcon { class: "w-4 h-4" }
                        }
                    }
                }
            }
            div { class: "grid grid-cols-2 gap-4 mt-6",
                div { class: "bg-gray-700/50 rounded-lg p-4",
                    p { class: "text-xs uppercase tracking-wide text-gray-400", "Followers" }
                    p {
                        class: "text-2xl font-semibold text-white",
                        "data-testid": "follower-count",
                        "{followers}"
                    }
                }
                div { class: "bg-gray-700/50 rounded-lg p-4",
                    p { class: "text-xs uppercase tracking-wide text-gray-400", "Account Type" }
                    p {
                        class: "text-2xl font-semibold text-white",
                        "data-testid": "account-type",
                        "{account_type}"
                    }
                }
            }
        }
    }
}
