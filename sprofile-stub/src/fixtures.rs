use std::path::Path;

use serde::Deserialize;
use sprofile_core::{TopArtists, UserProfile};

/// Canned backend behaviour, loaded from YAML.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    /// Start with a stored bearer token, as if the user had already logged in.
    pub signed_in: bool,
    /// When set, `/api/oauth/authorize` fails with this error code instead of
    /// signing the user in.
    pub login_error: Option<String>,
    /// Body of `/api/users/profile`. Absent means 404.
    pub profile: Option<UserProfile>,
    /// Body of `/api/users/tracks`. Absent means 404.
    pub top_artists: Option<TopArtists>,
    /// Replace the normal response of a route.
    pub overrides: Overrides,
    /// Delay before answering the user routes, to exercise loading states.
    pub delay_ms: Option<u64>,
    /// Delay between the user-route headers and their fixture body.
    pub body_delay_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub profile: Option<ResponseOverride>,
    pub tracks: Option<ResponseOverride>,
}

/// A forced response: a status and optionally a raw body (sent as-is, so it
/// can be malformed JSON).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseOverride {
    pub status: u16,
    #[serde(default)]
    pub body: Option<String>,
}

impl Fixtures {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path).map_err(|e| format!("read fixtures: {e}"))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("parse fixtures: {e}"))
    }

    /// Built-in data used when no fixture file is given.
    pub fn demo() -> Self {
        Self::parse(DEMO_FIXTURES).unwrap_or_default()
    }
}

const DEMO_FIXTURES: &str = include_str!("../fixtures/demo.yaml");
