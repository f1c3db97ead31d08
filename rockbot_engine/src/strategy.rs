//! Starter decision logic.
//!
//! This is the single replacement point for a real trading strategy; the
//! loader hands it a read-only [`World`] and the controlled [`Bot`].

use rockbot_data::{Bot, World};
use std::fmt;

/// One turn's command for the controlled bot, printed verbatim for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the given number of locations around the ring (negative for the
    /// opposite direction).
    Move(i64),
    /// Buy the given number of kg (or L at a refueling point).
    Buy(i64),
    /// Sell the given number of kg.
    Sell(i64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(n) => write!(f, "Move {n}"),
            Action::Buy(n) => write!(f, "Buy {n}"),
            Action::Sell(n) => write!(f, "Sell {n}"),
        }
    }
}

/// Starter behavior: buy here if possible, sell here if possible, otherwise
/// keep moving around the ring.
// TODO: replace the fixed trade amounts with a strategy that prices routes.
pub fn choose_action(world: &World, bot: &Bot) -> Action {
    match world.location(bot.location) {
        Some(here) if bot.can_buy_at(here) => Action::Buy(10),
        Some(here) if bot.can_sell_at(here) => Action::Sell(10),
        _ => Action::Move(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockbot_data::{Commodity, Location, PrototypeConfig};

    fn world_with(location: Location) -> World {
        let mut world = World {
            locations: vec![location],
            bots: Vec::new(),
            controlled: Some(0),
        };
        world
            .bots
            .push(Bot::from_prototype("Red", 0, &PrototypeConfig::default()));
        world.locations[0].bots.push(0);
        world
    }

    #[test]
    fn action_display_matches_command_format() {
        assert_eq!(Action::Move(1).to_string(), "Move 1");
        assert_eq!(Action::Buy(10).to_string(), "Buy 10");
        assert_eq!(Action::Sell(3).to_string(), "Sell 3");
    }

    #[test]
    fn buys_when_the_local_seller_has_stock() {
        let mut seller = Location::new("Mine");
        seller.commodity = Commodity::Rock("Gold".into());
        seller.price = -5;
        seller.quantity = 50;
        let world = world_with(seller);
        let bot = world.controlled_bot().unwrap();
        assert_eq!(choose_action(&world, bot), Action::Buy(10));
    }

    #[test]
    fn sells_cargo_to_the_local_buyer() {
        let mut buyer = Location::new("Market");
        buyer.commodity = Commodity::Rock("Gold".into());
        buyer.price = 8;
        buyer.quantity = 50;
        let mut world = world_with(buyer);
        world.bots[0].add_cargo(4, "Gold");
        let bot = world.controlled_bot().unwrap();
        assert_eq!(choose_action(&world, bot), Action::Sell(10));
    }

    #[test]
    fn moves_when_there_is_nothing_to_trade() {
        let world = world_with(Location::new("Quiet Corner"));
        let bot = world.controlled_bot().unwrap();
        assert_eq!(choose_action(&world, bot), Action::Move(1));
    }
}
