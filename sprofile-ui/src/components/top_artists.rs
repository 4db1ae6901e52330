//! Top artists view component - pure rendering, no data fetching

use crate::components::artist_card::ArtistCard;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner, Notice};
use crate::components::utils::showing_caption;
use crate::display_types::TopArtistsDisplay;
use dioxus::prelude::*;
use sprofile_common::ViewState;

pub const NO_TRACKS: &str = "No tracks available";

#[component]
pub fn TopArtistsView(state: ViewState<TopArtistsDisplay>) -> Element {
    let body = match state {
        ViewState::Loading => rsx! {
            LoadingSpinner { message: "Loading top artists...".to_string() }
        },
        ViewState::Failed(message) => rsx! {
            ErrorDisplay { heading: "Error Loading Tracks".to_string(), message }
        },
        ViewState::Empty => rsx! {
            Notice { message: NO_TRACKS.to_string() }
        },
        ViewState::Ready(top) => {
            let caption = showing_caption(top.artists.len(), top.total);
            rsx! {
                h2 { class: "text-2xl font-bold text-white mb-4", "Top Artists" }
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-6",
                    for artist in top.artists {
                        ArtistCard { key: "{artist.id}", artist: artist.clone() }
                    }
                }
                if let Some(caption) = caption {
                    p { class: "text-sm text-gray-500 mt-4", "{caption}" }
                }
            }
        }
    };

    rsx! {
        section { "data-testid": "top-artists", {body} }
    }
}
