mod mount_guard;
mod view_state;

pub use mount_guard::MountGuard;
pub use view_state::{SessionState, ViewState};
