use dioxus::prelude::*;
use sprofile_common::ViewState;
use sprofile_core::load_top_artists;
use sprofile_ui::TopArtistsView;

use crate::api::top_artists_display;
use crate::hooks::use_mounted_fetch;

#[component]
pub fn TracksPage() -> Element {
    let state = use_mounted_fetch(ViewState::default, |api| async move {
        load_top_artists(api.api()).await.map(top_artists_display)
    });

    rsx! {
        TopArtistsView { state: state() }
    }
}
