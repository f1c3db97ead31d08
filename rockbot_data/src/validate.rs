use std::collections::HashSet;
use std::fmt;

use crate::{BotId, LocationId, World};

/// Structural problem found in an assembled [`World`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateName {
        kind: &'static str,
        name: String,
    },
    MissingReference {
        kind: &'static str,
        index: usize,
        context: String,
    },
    BrokenRing {
        context: String,
    },
    InvalidValue {
        context: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateName { kind, name } => {
                write!(f, "duplicate {kind} name '{name}'")
            },
            ValidationError::MissingReference {
                kind,
                index,
                context,
            } => {
                write!(f, "missing {kind} #{index} ({context})")
            },
            ValidationError::BrokenRing { context } => {
                write!(f, "broken ring ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate structural invariants of an assembled world.
///
/// Checks that names are unique and non-empty, quantities are non-negative,
/// every reference lands on a real entity, and the ring neighbor links form a
/// single closed cycle over all locations. A world with zero locations is
/// valid (there is simply no ring to check).
///
/// ```
/// use rockbot_data::{validate_world, World};
///
/// let world = World::default();
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    track_names(
        "location",
        world.locations.iter().map(|l| l.name.as_str()),
        &mut errors,
    );
    track_names("bot", world.bots.iter().map(|b| b.name.as_str()), &mut errors);

    for location in &world.locations {
        if location.quantity < 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!(
                    "location '{}' has negative quantity {}",
                    location.name, location.quantity
                ),
            });
        }
        for &bot_id in &location.bots {
            check_location_roster(world, location.name.as_str(), bot_id, &mut errors);
        }
    }

    check_ring(world, &mut errors);

    for (id, bot) in world.bots.iter().enumerate() {
        if world.location(bot.location).is_none() {
            errors.push(ValidationError::MissingReference {
                kind: "location",
                index: bot.location,
                context: format!("bot '{}' is placed there", bot.name),
            });
        } else if !world.locations[bot.location].bots.contains(&id) {
            errors.push(ValidationError::InvalidValue {
                context: format!("bot '{}' is not listed at its location", bot.name),
            });
        }
    }

    if let Some(id) = world.controlled
        && world.bot(id).is_none()
    {
        errors.push(ValidationError::MissingReference {
            kind: "bot",
            index: id,
            context: "controlled bot".to_string(),
        });
    }

    errors
}

fn track_names<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{kind} with empty name"),
            });
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
}

fn check_location_roster(
    world: &World,
    location_name: &str,
    bot_id: BotId,
    errors: &mut Vec<ValidationError>,
) {
    if world.bot(bot_id).is_none() {
        errors.push(ValidationError::MissingReference {
            kind: "bot",
            index: bot_id,
            context: format!("listed at location '{location_name}'"),
        });
    }
}

fn check_ring(world: &World, errors: &mut Vec<ValidationError>) {
    let n = world.locations.len();
    if n == 0 {
        return;
    }

    let sound_before = errors.len();
    for (id, location) in world.locations.iter().enumerate() {
        for (label, neighbor) in [("left", location.left), ("right", location.right)] {
            match neighbor {
                None => errors.push(ValidationError::BrokenRing {
                    context: format!("location '{}' has no {label} neighbor", location.name),
                }),
                Some(other) if other >= n => errors.push(ValidationError::MissingReference {
                    kind: "location",
                    index: other,
                    context: format!("{label} neighbor of '{}'", location.name),
                }),
                Some(_) => {},
            }
        }
        if let (Some(left), Some(right)) = (location.left, location.right)
            && left < n
            && right < n
            && (world.locations[left].right != Some(id) || world.locations[right].left != Some(id))
        {
            errors.push(ValidationError::BrokenRing {
                context: format!("neighbors of '{}' are not mutual inverses", location.name),
            });
        }
    }
    if errors.len() != sound_before {
        return;
    }

    // Links are individually sound; confirm they form one closed cycle.
    let mut visited: HashSet<LocationId> = HashSet::new();
    let mut current = 0;
    for _ in 0..n {
        if !visited.insert(current) {
            break;
        }
        match world.left_of(current) {
            Some(next) => current = next,
            None => break,
        }
    }
    if visited.len() != n || current != 0 {
        errors.push(ValidationError::BrokenRing {
            context: format!(
                "following left links visits {} of {n} locations",
                visited.len()
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bot, Location, PrototypeConfig};

    fn linked_world(names: &[&str]) -> World {
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
    fn empty_world_is_valid() {
        assert!(validate_world(&World::default()).is_empty());
    }

    #[test]
    fn well_linked_ring_is_valid() {
        let world = linked_world(&["A", "B", "C", "D"]);
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn unlinked_neighbor_is_reported() {
        let mut world = linked_world(&["A", "B"]);
        world.locations[0].left = None;
        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::BrokenRing { .. }))
        );
    }

    #[test]
    fn non_mutual_links_are_reported() {
        let mut world = linked_world(&["A", "B", "C"]);
        world.locations[0].left = Some(2);
        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::BrokenRing { .. }))
        );
    }

    #[test]
    fn duplicate_location_names_are_reported() {
        let mut world = linked_world(&["A", "A"]);
        world.locations[1].left = Some(0);
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateName {
            kind: "location",
            name: "A".to_string(),
        }));
    }

    #[test]
    fn bot_must_be_listed_at_its_location() {
        let mut world = linked_world(&["A"]);
        world
            .bots
            .push(Bot::from_prototype("Red", 0, &PrototypeConfig::default()));
        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::InvalidValue { .. }))
        );

        world.locations[0].bots.push(0);
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn out_of_range_bot_location_is_reported() {
        let mut world = linked_world(&["A"]);
        world
            .bots
            .push(Bot::from_prototype("Red", 7, &PrototypeConfig::default()));
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "location", .. }
        )));
    }

    #[test]
    fn controlled_bot_index_must_exist() {
        let mut world = World::default();
        world.controlled = Some(3);
        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::MissingReference { kind: "bot", index: 3, .. })
        ));
    }
}
