use dioxus::prelude::*;
use sprofile_common::SessionState;
use sprofile_core::{resolve_session, AuthCallback};
use sprofile_ui::{LoadingSpinner, LoginPromptView, PageContainer};
use tracing::info;

use super::ProfilePage;
use crate::api::ApiHandle;
use crate::browser;
use crate::hooks::use_mounted_fetch;

/// Probes the session once, then shows the login prompt or the profile.
#[component]
pub fn SessionGate() -> Element {
    let session = use_mounted_fetch(SessionState::default, |api| async move {
        resolve_session(api.api()).await
    });

    match session() {
        SessionState::Checking => rsx! {
            PageContainer {
                LoadingSpinner { message: "Checking session...".to_string() }
            }
        },
        SessionState::Anonymous => rsx! {
            LoginPrompt {}
        },
        SessionState::Authenticated => rsx! {
            ProfilePage {}
        },
    }
}

#[component]
fn LoginPrompt() -> Element {
    let api = use_context::<ApiHandle>();
    let login_url = api.api().authorize_url();
    let notice = use_hook(|| {
        AuthCallback::from_query(&browser::current_query()).map(|callback| {
            let notice = callback.anonymous_notice();
            info!("Returned from login still signed out: {notice}");
            notice
        })
    });

    rsx! {
        LoginPromptView {
            notice,
            on_login: move |_| browser::navigate(&login_url),
        }
    }
}
