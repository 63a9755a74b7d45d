//! Checks that must hold before a dungeon is emitted.

use std::collections::HashSet;

use dungeon_types::Dungeon;

/// Range of valid trap trigger percentages.
pub const TRIGGER_CHANCE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("room '{room}' on floor '{floor}' connects to unknown room '{target}'")]
    DanglingConnection {
        floor: String,
        room: String,
        target: String,
    },
    #[error("trap '{trap}' in room '{room}': triggerChance must be 0-100 (found {value})")]
    TriggerChanceOutOfRange {
        room: String,
        trap: String,
        value: i32,
    },
    #[error("npc '{npc}' in room '{room}': health must not be negative (found {value})")]
    NegativeHealth {
        room: String,
        npc: String,
        value: i32,
    },
}

/// Validate the whole tree, reporting the first violation in traversal order.
///
/// Connection targets resolve against every room in the dungeon, so links
/// between floors are fine. Duplicate names are not an error here.
pub fn validate(dungeon: &Dungeon) -> Result<(), ValidationError> {
    log::debug!("validating dungeon '{}'", dungeon.name);
    let known: HashSet<&str> = dungeon.rooms().map(|r| r.name.as_str()).collect();

    for floor in &dungeon.floors {
        for room in &floor.rooms {
            if let Some(target) = room
                .connections
                .iter()
                .find(|c| !known.contains(c.as_str()))
            {
                return Err(ValidationError::DanglingConnection {
                    floor: floor.name.clone(),
                    room: room.name.clone(),
                    target: target.clone(),
                });
            }
            for trap in &room.traps {
                if !TRIGGER_CHANCE_RANGE.contains(&trap.trigger_chance) {
                    return Err(ValidationError::TriggerChanceOutOfRange {
                        room: room.name.clone(),
                        trap: trap.name.clone(),
                        value: trap.trigger_chance,
                    });
                }
            }
            for npc in &room.npcs {
                if npc.health < 0 {
                    return Err(ValidationError::NegativeHealth {
                        room: room.name.clone(),
                        npc: npc.name.clone(),
                        value: npc.health,
                    });
                }
            }
        }
    }

    log::debug!(
        "dungeon '{}' valid: {} floors, {} rooms",
        dungeon.name,
        dungeon.floors.len(),
        known.len()
    );
    Ok(())
}
