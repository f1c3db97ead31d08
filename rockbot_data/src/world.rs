//! The assembled world snapshot handed to a strategy.

use serde::{Deserialize, Serialize};

use crate::{Bot, Location};

/// Index of a location in [`World::locations`]. Ring neighbors are linked by
/// these indices rather than by owning references.
pub type LocationId = usize;

/// Index of a bot in [`World::bots`].
pub type BotId = usize;

/// Complete state of the world at the start of a turn: the market ring, every
/// bot on it, and which bot this program controls.
///
/// A `World` is built once per parse and never mutated afterwards; the
/// strategy only reads from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub locations: Vec<Location>,
    pub bots: Vec<Bot>,
    /// The bot this program acts for. `None` when the description carried no
    /// bot records at all.
    pub controlled: Option<BotId>,
}

impl World {
    /// Look up a location by index.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Look up a bot by index.
    pub fn bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(id)
    }

    /// The controlled bot, if any bot records were present.
    pub fn controlled_bot(&self) -> Option<&Bot> {
        self.controlled.and_then(|id| self.bots.get(id))
    }

    /// Ring neighbor to the left of `id`. `None` before the ring is linked
    /// or for an out-of-range index.
    pub fn left_of(&self, id: LocationId) -> Option<LocationId> {
        self.locations.get(id)?.left
    }

    /// Ring neighbor to the right of `id`.
    pub fn right_of(&self, id: LocationId) -> Option<LocationId> {
        self.locations.get(id)?.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrototypeConfig;

    fn ring_of(names: &[&str]) -> World {
        let n = names.len();
        let locations = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut location = Location::new(*name);
                location.left = Some((i + 1) % n);
                location.right = Some((n + i - 1) % n);
                location
            })
            .collect();
        World {
            locations,
            bots: Vec::new(),
            controlled: None,
        }
    }

    #[test]
    fn ring_neighbors_are_mutual_inverses() {
        let world = ring_of(&["A", "B", "C"]);
        for id in 0..3 {
            let left = world.left_of(id).unwrap();
            let right = world.right_of(id).unwrap();
            assert_eq!(world.right_of(left), Some(id));
            assert_eq!(world.left_of(right), Some(id));
        }
    }

    #[test]
    fn single_location_ring_links_to_itself() {
        let world = ring_of(&["Only"]);
        assert_eq!(world.left_of(0), Some(0));
        assert_eq!(world.right_of(0), Some(0));
    }

    #[test]
    fn controlled_bot_resolves_by_index() {
        let mut world = ring_of(&["A"]);
        world
            .bots
            .push(Bot::from_prototype("Red", 0, &PrototypeConfig::default()));
        world
            .bots
            .push(Bot::from_prototype("Blue", 0, &PrototypeConfig::default()));
        world.controlled = Some(1);
        assert_eq!(world.controlled_bot().unwrap().name, "Blue");
    }

    #[test]
    fn controlled_bot_is_none_for_empty_world() {
        let world = World::default();
        assert!(world.controlled_bot().is_none());
        assert!(world.left_of(0).is_none());
    }
}
