//! sprofile-ui - view components for the profile page
//!
//! Display types and pure, props-driven components. Nothing in here fetches;
//! the web crate owns data loading and hands states down as props.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
