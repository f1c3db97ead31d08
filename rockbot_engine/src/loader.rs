//! Loader for building a [`World`] from a textual world description.
//!
//! The description is consumed one line at a time: trailing whitespace is
//! trimmed, the pristine line is kept for diagnostics, and the normalized
//! line is classified by its positional markers and dispatched to exactly one
//! record parser, which mutates the in-progress accumulator. Once the input
//! is exhausted the locations are linked into a circular ring and the
//! controlled bot is resolved.
//!
//! Any record failure aborts the whole parse; there is no skip-and-continue
//! for malformed records.

pub mod bot;
pub mod classify;
pub mod directives;
pub mod location;
pub mod token;

use crate::loader::classify::{LineKind, Phase, classify};

use anyhow::{Context, Result, bail};
use log::info;
use rockbot_data::{Bot, BotId, Location, PrototypeConfig, World, validate_world};
use thiserror::Error;

/// Failure modes of a single record parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing marker '{0}'")]
    MissingMarker(&'static str),
    #[error("missing '{0}' delimiter")]
    MissingDelimiter(char),
    #[error("missing or zero integer for {0}")]
    InvalidInteger(&'static str),
    #[error("unknown {kind} '{name}'")]
    UnknownReference { kind: &'static str, name: String },
    #[error("unrecognized record shape")]
    UnrecognizedLine,
}

/// A fatal parse failure, echoing the offending source line verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("bad line in world description '{line}': {source}")]
pub struct WorldParseError {
    pub line: String,
    #[source]
    pub source: RecordError,
}

/// In-progress parse state: the prototype defaults plus the growing
/// registries that become the final [`World`].
#[derive(Debug, Default)]
struct WorldBuilder {
    prototype: PrototypeConfig,
    locations: Vec<Location>,
    bots: Vec<Bot>,
    controlled: Option<BotId>,
}

impl WorldBuilder {
    fn take_line(&mut self, line: &str) -> Result<(), RecordError> {
        let phase = Phase {
            locations_seen: self.locations.len(),
            bots_seen: self.bots.len(),
        };
        match classify(line, phase) {
            LineKind::Skip => Ok(()),
            LineKind::Turn => {
                let turns_left = directives::parse_turn(line)?;
                self.prototype.turns_left = turns_left;
                for bot in &mut self.bots {
                    bot.turns_left = turns_left;
                }
                Ok(())
            },
            LineKind::YouAre => {
                self.controlled = Some(directives::resolve_you_are(line, &self.bots)?);
                Ok(())
            },
            LineKind::Bot => {
                bot::parse_bot_record(line, &self.prototype, &mut self.locations, &mut self.bots)
            },
            LineKind::Location => location::parse_location_record(line, &mut self.locations),
            LineKind::StartingParameter => {
                directives::apply_starting_parameter(line, &mut self.prototype)
            },
            LineKind::Unrecognized => Err(RecordError::UnrecognizedLine),
        }
    }

    /// Link the ring and resolve the controlled bot. With zero locations the
    /// ring step is a no-op and the world is valid but degenerate.
    fn assemble(mut self) -> World {
        let n = self.locations.len();
        for i in 0..n {
            self.locations[i].left = Some((i + 1) % n);
            self.locations[i].right = Some((n + i - 1) % n);
        }
        let controlled = self.controlled.or((!self.bots.is_empty()).then_some(0));
        World {
            locations: self.locations,
            bots: self.bots,
            controlled,
        }
    }
}

/// Parse a full world description into an assembled [`World`].
///
/// # Errors
/// Fails on the first malformed record with a [`WorldParseError`] naming the
/// offending line; no partial world is produced.
pub fn parse_world(input: &str) -> Result<World, WorldParseError> {
    let mut builder = WorldBuilder::default();
    for raw in input.lines() {
        builder
            .take_line(raw.trim_end())
            .map_err(|source| WorldParseError {
                line: raw.to_string(),
                source,
            })?;
    }
    Ok(builder.assemble())
}

/// Parse and validate a world description.
///
/// # Errors
/// Errors bubble up from parsing; validation findings are aggregated into a
/// single error.
pub fn load_world(input: &str) -> Result<World> {
    let world = parse_world(input).context("while parsing world description")?;
    let errors = validate_world(&world);
    if !errors.is_empty() {
        let details = errors
            .into_iter()
            .map(|err| format!("- {err}"))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("world validation failed:\n{details}");
    }
    info!("{} locations linked into the ring", world.locations.len());
    info!("{} bots registered", world.bots.len());
    Ok(world)
}
