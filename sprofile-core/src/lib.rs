//! sprofile-core - data layer for the profile page
//!
//! Wire models for the backend's JSON, the `ProfileApi` seam with its
//! reqwest implementation, and loaders that reduce fetch results to the
//! view states the pages render.

pub mod api;
pub mod callback;
pub mod client;
pub mod config;
pub mod error;
pub mod loaders;
pub mod models;
pub mod timeout;

pub use api::{ProfileApi, AUTHORIZE_PATH, BEARER_TOKEN_PATH, PROFILE_PATH, TRACKS_PATH};
pub use callback::AuthCallback;
pub use client::ApiClient;
pub use config::{AppConfig, ConfigError, EntryMode};
pub use error::{ApiError, Resource, AUTH_ERROR_MESSAGE};
pub use loaders::{load_profile, load_top_artists, resolve_session};
pub use models::{Artist, ExternalUrls, Followers, Image, TopArtists, UserProfile};
