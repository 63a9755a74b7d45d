//! Rules for what sits inside a room.

use dungeon_types::{Npc, Room, RoomType, Trap};

use crate::diagnostic::{Diagnostic, Report, RuleCode};

pub(crate) fn trap_probability(trap: &Trap, report: &mut Report) {
    let chance = trap.trigger_chance;
    if !(0..=100).contains(&chance) {
        report.push(Diagnostic::new(
            RuleCode::InvalidProbability,
            &trap.name,
            format!("triggerChance must be 0-100 (found {chance})"),
        ));
    }
}

/// A trap that cannot be disarmed would make a puzzle unsolvable.
pub(crate) fn trap_in_puzzle(room: &Room, trap: &Trap, report: &mut Report) {
    if !trap.disarmable && room.room_type == RoomType::Puzzle {
        report.push(Diagnostic::new(
            RuleCode::TrapInPuzzle,
            &trap.name,
            "Non-disarmable traps cannot be placed in PUZZLE rooms",
        ));
    }
}

pub(crate) fn npc_health(npc: &Npc, report: &mut Report) {
    if npc.health < 0 {
        report.push(Diagnostic::new(
            RuleCode::NegativeHealth,
            &npc.name,
            format!("health must not be negative (found {})", npc.health),
        ));
    }
}
