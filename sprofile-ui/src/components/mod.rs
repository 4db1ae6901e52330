//! Shared UI components

pub mod app_shell;
pub mod artist_card;
pub mod button;
pub mod helpers;
pub mod icons;
pub mod login_prompt;
pub mod profile_view;
pub mod top_artists;
pub mod utils;

pub use app_shell::AppShell;
pub use artist_card::ArtistCard;
pub use button::{Button, ButtonSize, ButtonVariant, LinkButton};
pub use helpers::{ErrorDisplay, LoadingSpinner, Notice, PageContainer, LOGIN_HINT};
pub use icons::{AlertTriangleIcon, ExternalLinkIcon, ImageIcon};
pub use login_prompt::{LoginPromptView, LOGIN_BODY, LOGIN_BUTTON, LOGIN_HEADING};
pub use profile_view::{ProfileView, NO_USER_DATA};
pub use top_artists::{TopArtistsView, NO_TRACKS};
pub use utils::{
    account_type_label, avatar_initial, display_name_or_id, format_count, genre_line,
    popularity_label, showing_caption, NO_GENRES,
};
