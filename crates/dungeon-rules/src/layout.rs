//! Room mix and sizing rules for each floor.

use dungeon_types::{Floor, Room, RoomType, Size};

use crate::diagnostic::{Diagnostic, Report, RuleCode};

pub(crate) fn floor_has_combat(floor: &Floor, report: &mut Report) {
    if !floor.rooms.iter().any(|r| r.room_type == RoomType::Combat) {
        report.push(Diagnostic::new(
            RuleCode::MissingCombatRoom,
            &floor.name,
            "Each floor should contain at least one COMBAT room",
        ));
    }
}

pub(crate) fn shop_size(room: &Room, report: &mut Report) {
    if room.room_type == RoomType::Shop && room.size == Size::Large {
        report.push(Diagnostic::new(
            RuleCode::InvalidShopSize,
            &room.name,
            "SHOP rooms must be SMALL or MEDIUM (found LARGE)",
        ));
    }
}

pub(crate) fn boss_room(room: &Room, report: &mut Report) {
    if room.room_type != RoomType::Boss {
        return;
    }
    if room.size != Size::Large {
        report.push(Diagnostic::new(
            RuleCode::BossRoomSize,
            &room.name,
            "Boss rooms must be LARGE",
        ));
    }
    if room.connections.len() > 1 {
        report.push(Diagnostic::new(
            RuleCode::BossRoomConnections,
            &room.name,
            "Boss rooms should have at most one entrance",
        ));
    }
}

/// At most a third of the rooms on a floor (rounded down) should be treasure
/// rooms.
pub(crate) fn treasure_distribution(floor: &Floor, report: &mut Report) {
    let total = floor.rooms.len();
    if total <= 1 {
        return;
    }
    let treasure = floor
        .rooms
        .iter()
        .filter(|r| r.room_type == RoomType::Treasure)
        .count();
    let max = total / 3;
    if treasure > max {
        report.push(Diagnostic::new(
            RuleCode::TooManyTreasureRooms,
            &floor.name,
            format!("Too many treasure rooms on this floor (max recommended: {max})"),
        ));
    }
}
