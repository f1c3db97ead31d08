//! World-level directive records: starting parameters, turn counters, and
//! controlled-bot resolution. These mutate the prototype defaults or resolve
//! references instead of allocating entities.

use crate::loader::RecordError;
use crate::loader::classify::TURN_MARKER;
use crate::loader::token;

use log::debug;
use rockbot_data::{Bot, BotId, PrototypeConfig};

const TURN_OF_MARKER: &str = " of ";

/// Apply a `key = value` starting parameter to the prototype defaults.
///
/// Unknown keys are accepted and ignored, for forward compatibility. Zero is
/// reserved as "not a valid override", so a zero value fails the parse.
///
/// # Errors
/// - missing `=`, or nothing before it
/// - value absent or zero
pub fn apply_starting_parameter(
    line: &str,
    prototype: &mut PrototypeConfig,
) -> Result<(), RecordError> {
    let (key, value_text) = line
        .split_once('=')
        .ok_or(RecordError::MissingDelimiter('='))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(RecordError::MissingDelimiter('='));
    }
    let value = token::leading_int(value_text);
    if value == 0 {
        return Err(RecordError::InvalidInteger("parameter value"));
    }
    match key {
        "cash" => prototype.cash = value,
        "fuel_capacity" => {
            prototype.fuel_capacity = value;
            prototype.fuel_level = value;
        },
        "maximum_move" => prototype.maximum_move = value,
        "bag_capacity" => prototype.bag_capacity = value,
        other => debug!("ignoring unknown starting parameter '{other}'"),
    }
    Ok(())
}

/// Parse a `*** Turn N of M ***` line into the turns remaining, counting the
/// current turn itself.
///
/// Turns are 1-indexed, so a zero on either side means the integer failed to
/// parse.
///
/// # Errors
/// - either literal sub-marker absent
/// - either integer absent or zero
pub fn parse_turn(line: &str) -> Result<i64, RecordError> {
    let rest =
        token::after_literal(line, TURN_MARKER).ok_or(RecordError::MissingMarker(TURN_MARKER))?;
    let turn = token::leading_int(rest);
    if turn == 0 {
        return Err(RecordError::InvalidInteger("turn number"));
    }
    let rest = token::after_literal(rest, TURN_OF_MARKER)
        .ok_or(RecordError::MissingMarker(TURN_OF_MARKER))?;
    let total = token::leading_int(rest);
    if total == 0 {
        return Err(RecordError::InvalidInteger("turn count"));
    }
    Ok(total - turn + 1)
}

/// Resolve a `*** You are "Name"` line against the registered bots.
///
/// The named bot must already have been parsed; resolution is not deferred.
///
/// # Errors
/// - either quote missing
/// - no registered bot carries the quoted name
pub fn resolve_you_are(line: &str, bots: &[Bot]) -> Result<BotId, RecordError> {
    let (name, _) = token::quoted(line).ok_or(RecordError::MissingDelimiter('"'))?;
    bots.iter()
        .position(|bot| bot.name == name)
        .ok_or_else(|| RecordError::UnknownReference {
            kind: "bot",
            name: name.to_string(),
        })
}
