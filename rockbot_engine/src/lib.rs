#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ROCKBOT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod loader;
pub mod strategy;

// Re-exports for convenience
pub use loader::{RecordError, WorldParseError, load_world, parse_world};
pub use strategy::{Action, choose_action};
