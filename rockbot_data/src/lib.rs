//! Shared data model for the Rockbot trading world.

pub mod bot;
pub mod location;
pub mod validate;
pub mod world;

pub use bot::{Bot, CargoEntry, PrototypeConfig};
pub use location::{Commodity, Location};
pub use validate::{ValidationError, validate_world};
pub use world::{BotId, LocationId, World};
