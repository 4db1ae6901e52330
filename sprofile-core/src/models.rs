//! Wire types for the backend's JSON resources.
//!
//! The backend forwards Spotify Web API payloads, which drop or null out
//! fields freely. Every collection tolerates `null` or absence and every
//! number falls back to zero, so a partial payload still deserializes.

use serde::{Deserialize, Deserializer, Serialize};

/// Known external URLs for a Spotify object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
}

/// Follower information. Only the total is populated by the Web API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// Spotify image. Dimensions are often null for user avatars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// `GET /api/users/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The Spotify user ID.
    pub id: String,
    /// Name shown on the profile. `None` if the user never set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<Followers>,
    /// Object type as reported by Spotify, normally `"user"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
}

impl UserProfile {
    pub fn follower_count(&self) -> u64 {
        self.followers.as_ref().map(|f| f.total).unwrap_or(0)
    }

    pub fn spotify_url(&self) -> Option<&str> {
        self.external_urls.as_ref()?.spotify.as_deref()
    }
}

/// One entry of the top-artists list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// Widest first, as Spotify returns them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    /// Empty when Spotify has not classified the artist yet.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// 0-100, computed by Spotify from play counts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
}

impl Artist {
    pub fn spotify_url(&self) -> Option<&str> {
        self.external_urls.as_ref()?.spotify.as_deref()
    }
}

/// `GET /api/users/tracks` - a page of the user's top artists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopArtists {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Artist>,
    /// Total number of items available across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl TopArtists {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_from_full_payload() {
        let json = r#"{
            "display_name": "Alex",
            "external_urls": {"spotify": "https://open.spotify.com/user/u1"},
            "followers": {"href": null, "total": 5},
            "href": "https://api.spotify.com/v1/users/u1",
            "id": "u1",
            "images": [{"url": "https://i.scdn.co/image/a", "height": 300, "width": 300}],
            "type": "user",
            "uri": "spotify:user:u1"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.display_name.as_deref(), Some("Alex"));
        assert_eq!(profile.follower_count(), 5);
        assert_eq!(profile.account_type.as_deref(), Some("user"));
        assert_eq!(profile.images[0].url, "https://i.scdn.co/image/a");
        assert_eq!(
            profile.spotify_url(),
            Some("https://open.spotify.com/user/u1")
        );
    }

    #[test]
    fn profile_tolerates_missing_and_null_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id": "u2", "images": null, "display_name": null}"#).unwrap();
        assert_eq!(profile.display_name, None);
        assert!(profile.images.is_empty());
        assert_eq!(profile.follower_count(), 0);
        assert_eq!(profile.account_type, None);
        assert_eq!(profile.spotify_url(), None);
    }

    #[test]
    fn profile_without_id_is_rejected() {
        let result = serde_json::from_str::<UserProfile>(r#"{"display_name": "Alex"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn top_artists_keeps_response_order() {
        let json = r#"{
            "href": "https://api.spotify.com/v1/me/top/artists",
            "limit": 20, "offset": 0, "next": null, "previous": null, "total": 2,
            "items": [
                {"id": "a2", "name": "Second", "genres": ["pop"], "images": [], "popularity": 40,
                 "external_urls": {"spotify": "https://open.spotify.com/artist/a2"}},
                {"id": "a1", "name": "First", "popularity": 90}
            ]
        }"#;
        let top: TopArtists = serde_json::from_str(json).unwrap();
        assert_eq!(top.total, Some(2));
        let ids: Vec<&str> = top.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a1"]);
        assert!(top.items[1].genres.is_empty());
        assert_eq!(top.items[1].spotify_url(), None);
    }

    #[test]
    fn top_artists_without_items_is_empty() {
        let top: TopArtists = serde_json::from_str("{}").unwrap();
        assert!(top.is_empty());
        let top: TopArtists = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(top.is_empty());
    }
}
