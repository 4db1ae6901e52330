//! One fetch per mount, reduced to the state a view renders.
//!
//! None of these return errors: every failure becomes a terminal view state
//! so no fetch can take the page down.

use sprofile_common::{SessionState, ViewState};
use tracing::{error, info, warn};

use crate::api::ProfileApi;
use crate::error::Resource;
use crate::models::{TopArtists, UserProfile};

/// Probe the session. Failures of any kind fall open to `Anonymous`.
pub async fn resolve_session(api: &dyn ProfileApi) -> SessionState {
    match api.check_session().await {
        Ok(()) => SessionState::Authenticated,
        Err(e) => {
            info!("No active session: {e}");
            SessionState::Anonymous
        }
    }
}

/// Fetch the profile. A JSON `null` body yields `Empty`.
pub async fn load_profile(api: &dyn ProfileApi) -> ViewState<UserProfile> {
    match api.fetch_profile().await {
        Ok(Some(profile)) => ViewState::Ready(profile),
        Ok(None) => {
            warn!("Profile endpoint returned no user data");
            ViewState::Empty
        }
        Err(e) => {
            error!("Error fetching user profile: {e}");
            ViewState::Failed(e.view_message(Resource::Profile))
        }
    }
}

/// Fetch the top artists. No items yields `Empty`.
pub async fn load_top_artists(api: &dyn ProfileApi) -> ViewState<TopArtists> {
    match api.fetch_top_artists().await {
        Ok(top) => ViewState::settle(top, TopArtists::is_empty),
        Err(e) => {
            error!("Error fetching tracks: {e}");
            ViewState::Failed(e.view_message(Resource::TopArtists))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, AUTH_ERROR_MESSAGE};
    use crate::models::Artist;
    use async_trait::async_trait;

    struct Canned {
        session: Result<(), ApiError>,
        profile: Result<Option<UserProfile>, ApiError>,
        top: Result<TopArtists, ApiError>,
    }

    impl Default for Canned {
        fn default() -> Self {
            Self {
                session: Ok(()),
                profile: Ok(None),
                top: Ok(TopArtists::default()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProfileApi for Canned {
        async fn check_session(&self) -> Result<(), ApiError> {
            self.session.clone()
        }
        async fn fetch_profile(&self) -> Result<Option<UserProfile>, ApiError> {
            self.profile.clone()
        }
        async fn fetch_top_artists(&self) -> Result<TopArtists, ApiError> {
            self.top.clone()
        }
        fn authorize_url(&self) -> String {
            "/api/oauth/authorize".to_string()
        }
    }

    fn artist(id: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: id.to_uppercase(),
            images: vec![],
            genres: vec![],
            popularity: 50,
            external_urls: None,
        }
    }

    #[tokio::test]
    async fn session_outcomes() {
        let api = Canned::default();
        assert_eq!(resolve_session(&api).await, SessionState::Authenticated);

        for err in [
            ApiError::Unauthorized,
            ApiError::Status(404),
            ApiError::Network("offline".to_string()),
        ] {
            let api = Canned {
                session: Err(err),
                ..Default::default()
            };
            assert_eq!(resolve_session(&api).await, SessionState::Anonymous);
        }
    }

    #[tokio::test]
    async fn profile_states() {
        let profile = UserProfile {
            id: "u1".to_string(),
            display_name: Some("Alex".to_string()),
            images: vec![],
            followers: None,
            account_type: None,
            external_urls: None,
        };
        let api = Canned {
            profile: Ok(Some(profile.clone())),
            ..Default::default()
        };
        assert_eq!(load_profile(&api).await, ViewState::Ready(profile));

        let api = Canned::default();
        assert_eq!(load_profile(&api).await, ViewState::Empty);

        let api = Canned {
            profile: Err(ApiError::Unauthorized),
            ..Default::default()
        };
        assert_eq!(
            load_profile(&api).await,
            ViewState::Failed(AUTH_ERROR_MESSAGE.to_string())
        );

        let api = Canned {
            profile: Err(ApiError::Status(500)),
            ..Default::default()
        };
        assert_eq!(
            load_profile(&api).await,
            ViewState::Failed("Failed to fetch user profile".to_string())
        );
    }

    #[tokio::test]
    async fn top_artist_states() {
        let api = Canned::default();
        assert_eq!(load_top_artists(&api).await, ViewState::Empty);

        let top = TopArtists {
            items: vec![artist("a"), artist("b")],
            total: Some(2),
        };
        let api = Canned {
            top: Ok(top.clone()),
            ..Default::default()
        };
        assert_eq!(load_top_artists(&api).await, ViewState::Ready(top));

        let api = Canned {
            top: Err(ApiError::Unauthorized),
            ..Default::default()
        };
        assert_eq!(
            load_top_artists(&api).await,
            ViewState::Failed(AUTH_ERROR_MESSAGE.to_string())
        );

        let api = Canned {
            top: Err(ApiError::Parse("expected value at line 1".to_string())),
            ..Default::default()
        };
        assert_eq!(
            load_top_artists(&api).await,
            ViewState::Failed("unexpected response body: expected value at line 1".to_string())
        );
    }
}
