use dioxus::prelude::*;
use sprofile_common::ViewState;
use sprofile_core::load_profile;
use sprofile_ui::ProfileView;

use super::TracksPage;
use crate::api::profile_display;
use crate::hooks::use_mounted_fetch;

#[component]
pub fn ProfilePage() -> Element {
    let state = use_mounted_fetch(ViewState::default, |api| async move {
        load_profile(api.api()).await.map(profile_display)
    });

    rsx! {
        ProfileView {
            state: state(),
            tracks: rsx! {
                TracksPage {}
            },
        }
    }
}
