mod page;
mod profile;
mod session_gate;
mod tracks;

pub use page::{Page, PageProps};
pub use profile::ProfilePage;
pub use session_gate::SessionGate;
pub use tracks::TracksPage;
