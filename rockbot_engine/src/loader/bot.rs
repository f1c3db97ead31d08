//! Bot record parser and the cargo bag-list sub-parser.

use crate::loader::RecordError;
use crate::loader::token;

use rockbot_data::{Bot, Location, PrototypeConfig};

const FUEL_MARKER: &str = "fuel level: ";

/// Parse one bot record, copying defaults from the prototype, then register
/// the bot with its location and the global registry.
///
/// The record is `"<name>" is at "<location>" with $<cash>, fuel level: <n>`
/// with an optional comma-separated cargo list after the fuel field.
///
/// # Errors
/// - a name or location quote missing
/// - the location name not present in the registry
/// - the `$` or `fuel level: ` marker missing
pub fn parse_bot_record(
    line: &str,
    prototype: &PrototypeConfig,
    locations: &mut [Location],
    bots: &mut Vec<Bot>,
) -> Result<(), RecordError> {
    let (name, rest) = token::quoted(line).ok_or(RecordError::MissingDelimiter('"'))?;
    let (location_name, rest) = token::quoted(rest).ok_or(RecordError::MissingDelimiter('"'))?;
    let location_id = locations
        .iter()
        .position(|location| location.name == location_name)
        .ok_or_else(|| RecordError::UnknownReference {
            kind: "location",
            name: location_name.to_string(),
        })?;

    let mut bot = Bot::from_prototype(name, location_id, prototype);

    let rest = token::after_char(rest, '$').ok_or(RecordError::MissingMarker("$"))?;
    bot.cash = token::leading_int(rest);

    let rest = token::after_literal(rest, FUEL_MARKER)
        .ok_or(RecordError::MissingMarker(FUEL_MARKER))?;
    bot.fuel_level = token::leading_int(rest);

    // Cargo is optional: no comma after the fuel field means an empty bag.
    if let Some(bag_text) = token::after_char(rest, ',') {
        parse_bag_list(&mut bot, bag_text);
    }

    let bot_id = bots.len();
    locations[location_id].bots.insert(0, bot_id);
    bots.push(bot);
    Ok(())
}

/// Decode the comma-separated cargo list that follows a bot's fuel field.
/// `text` begins just after the first separating comma.
///
/// Entries are never rejected: a garbled quantity reads as zero and a garbled
/// token as an empty rock name, and the entry is appended either way.
fn parse_bag_list(bot: &mut Bot, text: &str) {
    let mut rest = text;
    loop {
        let (quantity, rock) = parse_bag_entry(rest);
        bot.add_cargo(quantity, rock);
        match token::after_char(rest, ',') {
            Some(tail) => rest = tail,
            None => break,
        }
    }
}

/// Parse one `<n> kg of <rock>` bag entry. The rock token is a single
/// whitespace-delimited word; a trailing comma separating it from the next
/// entry is stripped.
fn parse_bag_entry(text: &str) -> (i64, String) {
    let Some((quantity, rest)) = token::split_leading_int(text) else {
        return (0, String::new());
    };
    let rest = rest.trim_start();
    let Some(rest) = rest.strip_prefix("kg") else {
        return (quantity, String::new());
    };
    let rest = rest.trim_start();
    let Some(rest) = rest.strip_prefix("of") else {
        return (quantity, String::new());
    };
    let word = rest.split_ascii_whitespace().next().unwrap_or("");
    let word = word.strip_suffix(',').unwrap_or(word);
    (quantity, word.to_string())
}
