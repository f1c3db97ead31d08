//! Locations and the commodities they trade.
//!
//! A location is one stop on the circular market ring. Parsing establishes
//! its traded commodity, signed price, and starting stock; ring neighbors are
//! linked only after every location is known.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BotId, LocationId};

/// What a location trades.
///
/// `Anything` buyers accept every rock type, `Petrol` marks a refueling
/// point, and `Nothing` is the sentinel for locations that trade nothing at
/// all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Commodity {
    #[default]
    Nothing,
    Anything,
    Petrol,
    Rock(String),
}

impl Commodity {
    /// Classify a commodity name extracted from a world description.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Nothing" => Commodity::Nothing,
            "Anything" => Commodity::Anything,
            "Petrol" => Commodity::Petrol,
            other => Commodity::Rock(other.to_string()),
        }
    }

    /// True if a location trading this commodity accepts the named rock.
    pub fn accepts(&self, rock: &str) -> bool {
        match self {
            Commodity::Anything => true,
            Commodity::Rock(name) => name == rock,
            Commodity::Nothing | Commodity::Petrol => false,
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commodity::Nothing => write!(f, "Nothing"),
            Commodity::Anything => write!(f, "Anything"),
            Commodity::Petrol => write!(f, "Petrol"),
            Commodity::Rock(name) => write!(f, "{name}"),
        }
    }
}

/// One stop on the market ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub commodity: Commodity,
    /// Positive: buys only. Negative: sells only. Zero: inactive.
    pub price: i64,
    /// Units of rock or petrol still available here. Never increases during
    /// a simulation.
    pub quantity: i64,
    /// Ring neighbor to the left, linked once all locations are known.
    pub left: Option<LocationId>,
    /// Ring neighbor to the right; the inverse direction of `left`.
    pub right: Option<LocationId>,
    /// Bots currently here, most recently arrived first.
    pub bots: Vec<BotId>,
}

impl Location {
    /// Create an inactive location with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commodity: Commodity::Nothing,
            price: 0,
            quantity: 0,
            left: None,
            right: None,
            bots: Vec::new(),
        }
    }

    /// True if this location buys rock from bots.
    pub fn buys(&self) -> bool {
        self.price > 0
    }

    /// True if this location sells rock or petrol to bots.
    pub fn sells(&self) -> bool {
        self.price < 0
    }

    /// True if this location neither buys nor sells.
    pub fn is_inactive(&self) -> bool {
        self.price == 0
    }
}
