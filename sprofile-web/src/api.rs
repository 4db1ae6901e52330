//! The API handle shared through context, and wire to display conversions.

use std::rc::Rc;

use sprofile_core::{Artist, ProfileApi, TopArtists, UserProfile};
use sprofile_ui::{ArtistCardDisplay, ProfileDisplay, TopArtistsDisplay};

/// Backend client provided as root context. Cloning shares the client.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn ProfileApi>);

impl ApiHandle {
    pub fn new(api: impl ProfileApi + 'static) -> Self {
        Self(Rc::new(api))
    }

    pub fn api(&self) -> &dyn ProfileApi {
        self.0.as_ref()
    }
}

fn first_image(images: &[sprofile_core::Image]) -> Option<String> {
    images
        .iter()
        .map(|image| image.url.clone())
        .find(|url| !url.is_empty())
}

pub fn profile_display(profile: UserProfile) -> ProfileDisplay {
    ProfileDisplay {
        avatar_url: first_image(&profile.images),
        followers: profile.follower_count(),
        spotify_url: profile.spotify_url().map(str::to_string),
        id: profile.id,
        display_name: profile.display_name,
        account_type: profile.account_type,
    }
}

fn artist_display(artist: Artist) -> ArtistCardDisplay {
    ArtistCardDisplay {
        image_url: first_image(&artist.images),
        spotify_url: artist.spotify_url().map(str::to_string),
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        popularity: artist.popularity,
    }
}

pub fn top_artists_display(top: TopArtists) -> TopArtistsDisplay {
    TopArtistsDisplay {
        artists: top.items.into_iter().map(artist_display).collect(),
        total: top.total,
    }
}
