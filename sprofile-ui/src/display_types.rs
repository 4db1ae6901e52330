//! Display types for UI components
//!
//! Lightweight, render-ready versions of the backend payloads. Optional
//! fields stay optional here; the components decide what to show when a
//! value is missing.

/// Signed-in user, as shown in the profile card
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDisplay {
    pub id: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub followers: u64,
    pub account_type: Option<String>,
    pub spotify_url: Option<String>,
}

/// One artist card in the top artists grid
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistCardDisplay {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub popularity: u32,
    pub spotify_url: Option<String>,
}

/// The top artists list in backend order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopArtistsDisplay {
    pub artists: Vec<ArtistCardDisplay>,
    /// Total the backend reports, which can exceed the page it sent.
    pub total: Option<u32>,
}
