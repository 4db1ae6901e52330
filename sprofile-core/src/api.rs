//! The seam between pages and the backend.
//!
//! Pages only see `ProfileApi`. The browser build plugs in [`ApiClient`];
//! tests plug in fakes that count calls.
//!
//! [`ApiClient`]: crate::client::ApiClient

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{TopArtists, UserProfile};

/// Login navigation target. Navigated to, never fetched.
pub const AUTHORIZE_PATH: &str = "/api/oauth/authorize";
/// Token-presence probe. Any 2xx means a session exists.
pub const BEARER_TOKEN_PATH: &str = "/api/oauth/bearer-token";
pub const PROFILE_PATH: &str = "/api/users/profile";
pub const TRACKS_PATH: &str = "/api/users/tracks";

/// Read-only access to the backend's OAuth proxy.
///
/// Futures are `?Send` because the browser client's futures are not.
#[async_trait(?Send)]
pub trait ProfileApi {
    /// Probe for a bearer token. `Ok` on any 2xx response.
    async fn check_session(&self) -> Result<(), ApiError>;

    /// Fetch the signed-in user's profile. `Ok(None)` when the body is JSON `null`.
    async fn fetch_profile(&self) -> Result<Option<UserProfile>, ApiError>;

    async fn fetch_top_artists(&self) -> Result<TopArtists, ApiError>;

    /// Absolute or origin-relative URL the login button navigates to.
    fn authorize_url(&self) -> String;
}
