#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Rockbot **
//! Reads a world description on standard input and prints one command for
//! the controlled bot. `rockbot dump` pretty-prints the parsed world as JSON
//! instead, for inspection while developing a strategy.

use rockbot_engine::{choose_action, load_world};

use anyhow::{Context, Result};
use log::info;

use std::env;
use std::io::Read;

/// Shown in multiplayer rosters when the input carries no bot records.
const PLAYER_NAME: &str = "Rockbot starter";

fn main() -> Result<()> {
    env_logger::init();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("while reading world description")?;

    let world = load_world(&input).context("while loading world description")?;
    info!(
        "world loaded: {} locations, {} bots",
        world.locations.len(),
        world.bots.len()
    );

    if env::args().nth(1).as_deref() == Some("dump") {
        let rendered =
            serde_json::to_string_pretty(&world).context("while rendering world as JSON")?;
        println!("{rendered}");
        return Ok(());
    }

    match world.controlled_bot() {
        Some(bot) => println!("{}", choose_action(&world, bot)),
        None => println!("{PLAYER_NAME}"),
    }
    Ok(())
}
