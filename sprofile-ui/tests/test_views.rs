use dioxus::prelude::*;
use sprofile_common::ViewState;
use sprofile_ui::{
    ArtistCardDisplay, LoginPromptView, ProfileDisplay, ProfileView, TopArtistsDisplay,
    TopArtistsView,
};

fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Props, Clone, PartialEq)]
struct ProfileHarnessProps {
    state: ViewState<ProfileDisplay>,
    with_tracks: bool,
}

#[allow(non_snake_case)]
fn ProfileHarness(props: ProfileHarnessProps) -> Element {
    if props.with_tracks {
        rsx! {
            ProfileView {
                state: props.state,
                tracks: rsx! {
                    p { "tracks-slot" }
                },
            }
        }
    } else {
        rsx! {
            ProfileView { state: props.state }
        }
    }
}

fn render_profile(state: ViewState<ProfileDisplay>, with_tracks: bool) -> String {
    render(ProfileHarness, ProfileHarnessProps { state, with_tracks })
}

#[derive(Props, Clone, PartialEq)]
struct TopArtistsHarnessProps {
    state: ViewState<TopArtistsDisplay>,
}

#[allow(non_snake_case)]
fn TopArtistsHarness(props: TopArtistsHarnessProps) -> Element {
    rsx! {
        TopArtistsView { state: props.state }
    }
}

fn render_top(state: ViewState<TopArtistsDisplay>) -> String {
    render(TopArtistsHarness, TopArtistsHarnessProps { state })
}

#[derive(Props, Clone, PartialEq)]
struct LoginHarnessProps {
    notice: Option<String>,
}

#[allow(non_snake_case)]
fn LoginHarness(props: LoginHarnessProps) -> Element {
    match props.notice {
        Some(notice) => rsx! {
            LoginPromptView { notice, on_login: move |_| {} }
        },
        None => rsx! {
            LoginPromptView { on_login: move |_| {} }
        },
    }
}

fn render_login(notice: Option<&str>) -> String {
    render(
        LoginHarness,
        LoginHarnessProps {
            notice: notice.map(str::to_string),
        },
    )
}

fn profile(display_name: Option<&str>) -> ProfileDisplay {
    ProfileDisplay {
        id: "u1".to_string(),
        display_name: display_name.map(str::to_string),
        avatar_url: None,
        followers: 1234,
        account_type: None,
        spotify_url: Some("https://open.spotify.com/user/u1".to_string()),
    }
}

fn artist(id: &str, genres: &[&str]) -> ArtistCardDisplay {
    ArtistCardDisplay {
        id: id.to_string(),
        name: format!("Artist {id}"),
        image_url: None,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        popularity: 70,
        spotify_url: None,
    }
}

#[test]
fn test_profile_without_name_shows_question_mark_placeholder() {
    let html = render_profile(ViewState::Ready(profile(None)), false);

    assert!(html.contains("data-testid=\"avatar-placeholder\""));
    assert!(html.contains(">?</div>"));
    assert!(!html.contains("<img"));
    assert!(html.contains("ID: u1"));
    assert!(html.contains("1,234"));
    assert!(html.contains(">User</p>"));
}

#[test]
fn test_profile_with_avatar_and_link() {
    let mut p = profile(Some("alex"));
    p.avatar_url = Some("https://img.example/a.jpg".to_string());
    p.account_type = Some("premium".to_string());

    let html = render_profile(ViewState::Ready(p), false);

    assert!(html.contains("https://img.example/a.jpg"));
    assert!(!html.contains("avatar-placeholder"));
    assert!(html.contains(">alex</h1>"));
    assert!(html.contains("Premium"));
    assert!(html.contains("Open in Spotify"));
    assert!(html.contains("target=\"_blank\""));
}

#[test]
fn test_profile_named_user_gets_initial() {
    let html = render_profile(ViewState::Ready(profile(Some("alex"))), false);
    assert!(html.contains(">A</div>"));
}

#[test]
fn test_profile_ready_mounts_tracks_slot() {
    let html = render_profile(ViewState::Ready(profile(Some("Alex"))), true);
    assert!(html.contains("tracks-slot"));
}

#[test]
fn test_profile_non_ready_states_skip_tracks_slot() {
    for state in [
        ViewState::Loading,
        ViewState::Empty,
        ViewState::Failed("Failed to fetch user profile".to_string()),
    ] {
        let html = render_profile(state, true);
        assert!(!html.contains("tracks-slot"));
        assert!(!html.contains("profile-card"));
    }
}

#[test]
fn test_profile_loading_empty_and_error() {
    let html = render_profile(ViewState::Loading, false);
    assert!(html.contains("Loading profile..."));

    let html = render_profile(ViewState::Empty, false);
    assert!(html.contains("No user data available"));

    let html = render_profile(
        ViewState::Failed("Authentication error. Please log in again.".to_string()),
        false,
    );
    assert!(html.contains(">Error</h2>"));
    assert!(html.contains("Authentication error. Please log in again."));
    assert!(html.contains("Please make sure you"));
}

#[test]
fn test_genre_line_with_fewer_than_two_genres() {
    let top = TopArtistsDisplay {
        artists: vec![
            artist("a", &["pop", "rock", "jazz"]),
            artist("b", &["metal"]),
            artist("c", &[]),
        ],
        total: None,
    };
    let html = render_top(ViewState::Ready(top));

    assert!(html.contains(">pop, rock</p>"));
    assert!(!html.contains("jazz"));
    assert!(html.contains(">metal</p>"));
    assert!(html.contains(">No genres</p>"));
    assert!(html.contains("Popularity: 70/100"));
}

#[test]
fn test_artists_keep_backend_order() {
    let top = TopArtistsDisplay {
        artists: vec![artist("z", &[]), artist("a", &[]), artist("m", &[])],
        total: Some(40),
    };
    let html = render_top(ViewState::Ready(top));

    let z = html.find("Artist z").unwrap();
    let a = html.find("Artist a").unwrap();
    let m = html.find("Artist m").unwrap();
    assert!(z < a && a < m);
    assert!(html.contains("Top Artists"));
    assert!(html.contains("Showing 3 of 40"));
}

#[test]
fn test_artist_without_images_shows_placeholder() {
    let mut with_image = artist("b", &[]);
    with_image.image_url = Some("https://img.example/b.jpg".to_string());
    let top = TopArtistsDisplay {
        artists: vec![artist("a", &[]), with_image],
        total: None,
    };
    let html = render_top(ViewState::Ready(top));

    assert_eq!(html.matches("No Image").count(), 1);
    assert!(html.contains("https://img.example/b.jpg"));
    assert!(!html.contains("Showing"));
}

#[test]
fn test_artist_link_opens_spotify_in_new_tab() {
    let mut linked = artist("a", &[]);
    linked.spotify_url = Some("https://open.spotify.com/artist/a".to_string());
    let top = TopArtistsDisplay {
        artists: vec![linked, artist("b", &[])],
        total: None,
    };
    let html = render_top(ViewState::Ready(top));

    assert_eq!(html.matches("data-testid=\"artist-link\"").count(), 1);
    assert!(html.contains("href=\"https://open.spotify.com/artist/a\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(html.contains("bg-gray-700 hover:bg-gray-600"));
}

#[test]
fn test_top_artists_empty_and_error() {
    let html = render_top(ViewState::Empty);
    assert!(html.contains("data-testid=\"notice\""));
    assert!(html.contains(">No tracks available</p>"));
    assert!(!html.contains("artist-card"));

    let html = render_top(ViewState::Failed("Failed to fetch tracks".to_string()));
    assert!(html.contains("Error Loading Tracks"));
    assert!(html.contains("Failed to fetch tracks"));
}

#[test]
fn test_login_prompt_with_and_without_notice() {
    let html = render_login(None);
    assert!(html.contains("Welcome to Spotify User Profile"));
    assert!(html.contains("Login with Spotify"));
    assert!(!html.contains("data-testid=\"notice\""));

    let html = render_login(Some("Spotify login was cancelled."));
    assert!(html.contains("Spotify login was cancelled."));
}
