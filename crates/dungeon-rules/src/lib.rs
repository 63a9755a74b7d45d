//! Game-design checks for a dungeon tree.
//!
//! These are advisory: emitting JSON does not depend on them. Callers decide
//! whether [`Severity::Error`] findings should stop generation.

mod connections;
mod contents;
pub mod diagnostic;
mod layout;

use dungeon_types::Dungeon;

pub use diagnostic::{Diagnostic, Report, RuleCode, Severity};

/// Run every rule over `dungeon`.
///
/// Findings are ordered: duplicate names first, then floor by floor (floor
/// rules, then each room followed by its traps and NPCs).
pub fn check(dungeon: &Dungeon) -> Report {
    let mut report = Report::default();

    connections::unique_room_names(dungeon, &mut report);

    for floor in &dungeon.floors {
        layout::floor_has_combat(floor, &mut report);
        layout::treasure_distribution(floor, &mut report);
        connections::all_rooms_connected(dungeon, floor, &mut report);

        for room in &floor.rooms {
            connections::room_connections(dungeon, room, &mut report);
            layout::shop_size(room, &mut report);
            layout::boss_room(room, &mut report);
            for trap in &room.traps {
                contents::trap_probability(trap, &mut report);
                contents::trap_in_puzzle(room, trap, &mut report);
            }
            for npc in &room.npcs {
                contents::npc_health(npc, &mut report);
            }
        }
    }

    log::debug!(
        "design rules for '{}': {} errors, {} warnings",
        dungeon.name,
        report.errors().count(),
        report.warnings().count()
    );
    report
}
