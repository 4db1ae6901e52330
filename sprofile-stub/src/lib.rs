//! sprofile-stub - fixture backend for local development
//!
//! Serves the OAuth proxy's routes from a YAML fixture file so the page can
//! be run and exercised without a Spotify app or real tokens.

pub mod fixtures;
pub mod routes;

pub use fixtures::{Fixtures, ResponseOverride};
pub use routes::{stub_router, StubState, STUB_BEARER_TOKEN};
