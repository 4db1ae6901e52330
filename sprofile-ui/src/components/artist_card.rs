//! Artist card component

use crate::components::icons::{ExternalLinkIcon, ImageIcon};
use crate::components::{ButtonSize, ButtonVariant, LinkButton};
use crate::components::utils::{genre_line, popularity_label};
use crate::display_types::ArtistCardDisplay;
use dioxus::prelude::*;

#[component]
pub fn ArtistCard(artist: ArtistCardDisplay) -> Element {
    let genres = genre_line(&artist.genres);
    let popularity = popularity_label(artist.popularity);
    let name = artist.name.clone();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300",
            "data-testid": "artist-card",
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                if let Some(url) = &artist.image_url {
                    img {
                        src: "{url}",
                        alt: "{name}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    div {
                        class: "flex flex-col items-center text-gray-500",
                        "data-testid": "artist-image-placeholder",
                        ImageIcon { class: "w-12 h-12 mb-2" }
                        span { class: "text-sm", "No Image" }
                    }
                }
            }
            div { class: "p-4",
                h3 {
                    class: "font-semibold text-white text-lg truncate",
                    title: "{name}",
                    "{name}"
                }
                p { class: "text-sm text-gray-400 truncate", "data-testid": "genres", "{genres}" }
                p { class: "text-xs text-gray-500 mt-1", "{popularity}" }
                if let Some(url) = &artist.spotify_url {
                    LinkButton {
                        href: url.clone(),
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        external: true,
                        class: "mt-3".to_string(),
                        testid: "artist-link",
                        "Open in Spotify"
                        ExternalLinkIcon { class: "w-3 h-3" }
                    }
                }
            }
        }
    }
}
