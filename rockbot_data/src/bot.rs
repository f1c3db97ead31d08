//! Bots and their cargo.

use serde::{Deserialize, Serialize};

use crate::{Commodity, Location, LocationId};

/// Default attribute set applied to every bot at creation time unless
/// overridden by the bot's own record.
///
/// One `PrototypeConfig` lives for the duration of a single parse. Capacity
/// fields are mutated only by starting-parameter records (before any bot
/// exists); turns-left may be updated at any time by turn records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeConfig {
    pub cash: i64,
    pub fuel_level: i64,
    pub fuel_capacity: i64,
    pub maximum_move: i64,
    pub bag_capacity: i64,
    pub turns_left: i64,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            cash: 100,
            fuel_level: 100,
            fuel_capacity: 100,
            maximum_move: 7,
            bag_capacity: 15,
            turns_left: 100,
        }
    }
}

/// One parcel of carried rock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoEntry {
    pub quantity: i64,
    pub rock: String,
}

/// A trading bot somewhere on the ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    /// Unique name; never changes after creation.
    pub name: String,
    pub location: LocationId,
    pub cash: i64,
    pub fuel_level: i64,
    /// Carried parcels, most recently loaded first.
    pub cargo: Vec<CargoEntry>,
    /// Total kg carried across all parcels.
    pub num_rocks: i64,
    pub turns_left: i64,
    pub fuel_capacity: i64,
    pub maximum_move: i64,
    pub bag_capacity: i64,
}

impl Bot {
    /// Create a bot at `location` with the prototype's current attributes.
    pub fn from_prototype(
        name: impl Into<String>,
        location: LocationId,
        prototype: &PrototypeConfig,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            cash: prototype.cash,
            fuel_level: prototype.fuel_level,
            cargo: Vec::new(),
            num_rocks: 0,
            turns_left: prototype.turns_left,
            fuel_capacity: prototype.fuel_capacity,
            maximum_move: prototype.maximum_move,
            bag_capacity: prototype.bag_capacity,
        }
    }

    /// Load a parcel into the bag. Parcels are prepended, so `cargo` reads
    /// newest first.
    pub fn add_cargo(&mut self, quantity: i64, rock: impl Into<String>) {
        self.num_rocks += quantity;
        self.cargo.insert(
            0,
            CargoEntry {
                quantity,
                rock: rock.into(),
            },
        );
    }

    /// Kilograms of the named rock currently carried.
    pub fn carried(&self, rock: &str) -> i64 {
        self.cargo
            .iter()
            .filter(|entry| entry.rock == rock)
            .map(|entry| entry.quantity)
            .sum()
    }

    /// True if this bot could sell part of its cargo at `location`.
    pub fn can_sell_at(&self, location: &Location) -> bool {
        location.buys()
            && location.quantity > 0
            && self
                .cargo
                .iter()
                .any(|entry| entry.quantity > 0 && location.commodity.accepts(&entry.rock))
    }

    /// True if this bot could buy rock at `location`.
    pub fn can_buy_at(&self, location: &Location) -> bool {
        location.sells()
            && !matches!(location.commodity, Commodity::Petrol)
            && location.quantity > 0
            && self.cash > -location.price
            && self.num_rocks < self.bag_capacity
    }

    /// True if this bot could top up its tank at `location`.
    pub fn can_refuel_at(&self, location: &Location) -> bool {
        matches!(location.commodity, Commodity::Petrol)
            && location.sells()
            && location.quantity > 0
            && self.cash > -location.price
            && self.fuel_level < self.fuel_capacity
    }
}
