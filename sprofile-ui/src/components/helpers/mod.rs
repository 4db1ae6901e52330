//! Common helper UI components

mod error_display;
mod loading_spinner;
mod notice;
mod page_container;

pub use error_display::{ErrorDisplay, LOGIN_HINT};
pub use loading_spinner::LoadingSpinner;
pub use notice::Notice;
pub use page_container::PageContainer;
