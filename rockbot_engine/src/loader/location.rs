//! Location record parser.
//!
//! A location line is `<name>: <market description>`. The description is
//! optional in every part: a missing direction keyword leaves the location
//! trading nothing, and a missing rock marker keeps the sentinel commodity
//! while retaining any quantity already extracted.

use crate::loader::RecordError;
use crate::loader::token;

use log::warn;
use rockbot_data::{Commodity, Location};

const ROCK_MARKER: &str = " kg of ";
const ALTERNATE_ROCK_MARKER: &str = " L of ";
const ROCK_END_MARKER: &str = " for ";
const SELL_KEYWORD: &str = "sell";
const BUY_KEYWORD: &str = "buy";

/// Parse one location record and append it to the registry.
///
/// A repeated name is merged into the first instance with a warning; the
/// rest of the duplicate record is discarded unparsed.
///
/// # Errors
/// - no `:` after the name
/// - a `$` with no digits after it, or a price of zero
pub fn parse_location_record(
    line: &str,
    locations: &mut Vec<Location>,
) -> Result<(), RecordError> {
    let (name, rest) = line
        .split_once(':')
        .ok_or(RecordError::MissingDelimiter(':'))?;
    if locations.iter().any(|location| location.name == name) {
        warn!("ignoring duplicate location description '{name}'");
        return Ok(());
    }
    let mut location = Location::new(name);

    if let Some(after_dollar) = token::after_char(rest, '$') {
        location.price = token::leading_int(after_dollar);
        if location.price == 0 {
            return Err(RecordError::InvalidInteger("location price"));
        }
    }

    let after_keyword = if let Some(tail) = token::after_literal(rest, SELL_KEYWORD) {
        location.price = -location.price;
        tail
    } else if let Some(tail) = token::after_literal(rest, BUY_KEYWORD) {
        // The quantity scan starts one character past the keyword.
        tail.get(1..).unwrap_or("")
    } else {
        locations.push(location);
        return Ok(());
    };

    location.quantity = token::leading_int(after_keyword);

    let rock_text = match token::after_literal(after_keyword, ROCK_MARKER)
        .or_else(|| token::after_literal(after_keyword, ALTERNATE_ROCK_MARKER))
    {
        Some(tail) => tail.strip_prefix(' ').unwrap_or(tail),
        None => {
            locations.push(location);
            return Ok(());
        },
    };
    let rock_name = rock_text
        .split_once(ROCK_END_MARKER)
        .map_or(rock_text, |(name, _)| name);
    location.commodity = Commodity::from_name(rock_name);
    locations.push(location);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> Location {
        let mut locations = Vec::new();
        parse_location_record(line, &mut locations).unwrap();
        locations.pop().unwrap()
    }

    #[test]
    fn buyer_line_extracts_all_fields() {
        let location = parse_one("Coogee Recycling: will buy 1000 kg of Anything for $2/kg");
        assert_eq!(location.name, "Coogee Recycling");
        assert_eq!(location.commodity, Commodity::Anything);
        assert_eq!(location.price, 2);
        assert_eq!(location.quantity, 1000);
        assert!(location.buys());
    }

    #[test]
    fn seller_line_negates_the_price() {
        let location = parse_one("Kingsford Pump: will sell 100 L of Petrol for $4/L");
        assert_eq!(location.commodity, Commodity::Petrol);
        assert_eq!(location.price, -4);
        assert_eq!(location.quantity, 100);
        assert!(location.sells());
    }

    #[test]
    fn line_without_direction_trades_nothing() {
        let location = parse_one("Old Depot: other");
        assert_eq!(location.commodity, Commodity::Nothing);
        assert_eq!(location.price, 0);
        assert_eq!(location.quantity, 0);
    }

    #[test]
    fn rock_name_runs_to_end_without_the_for_marker() {
        let location = parse_one("Depot: will buy 5 kg of Gold");
        assert_eq!(location.commodity, Commodity::Rock("Gold".to_string()));
        assert_eq!(location.quantity, 5);
        assert_eq!(location.price, 0);
    }

    #[test]
    fn missing_rock_marker_keeps_the_sentinel() {
        let location = parse_one("Depot: will buy 5 Kg of Gold for $3/kg");
        assert_eq!(location.commodity, Commodity::Nothing);
        assert_eq!(location.quantity, 5);
        assert_eq!(location.price, 3);
    }

    #[test]
    fn dollar_without_digits_is_fatal() {
        let mut locations = Vec::new();
        assert_eq!(
            parse_location_record("Depot: will buy 5 kg of Gold for $", &mut locations),
            Err(RecordError::InvalidInteger("location price"))
        );
        assert!(locations.is_empty());
    }

    #[test]
    fn duplicate_names_reuse_the_first_record() {
        let mut locations = Vec::new();
        parse_location_record("Alpha: buy 5 kg of Iron for $3", &mut locations).unwrap();
        parse_location_record("Alpha: sell $9", &mut locations).unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].commodity, Commodity::Rock("Iron".to_string()));
        assert_eq!(locations[0].price, 3);
        assert_eq!(locations[0].quantity, 5);
    }

    #[test]
    fn missing_colon_is_fatal() {
        let mut locations = Vec::new();
        assert_eq!(
            parse_location_record("no separator here", &mut locations),
            Err(RecordError::MissingDelimiter(':'))
        );
    }
}
