//! Naming and connectivity rules.

use std::collections::{HashSet, VecDeque};

use dungeon_types::{Dungeon, Floor, Room};

use crate::diagnostic::{Diagnostic, Report, RuleCode};

/// Room names must be unique across the whole dungeon.
pub(crate) fn unique_room_names(dungeon: &Dungeon, report: &mut Report) {
    let mut seen = HashSet::new();
    for room in dungeon.rooms() {
        if !seen.insert(room.name.as_str()) {
            report.push(Diagnostic::new(
                RuleCode::DuplicateRoomName,
                &room.name,
                format!("Room name '{}' is duplicated", room.name),
            ));
        }
    }
}

/// Every connection must name another room that links back.
pub(crate) fn room_connections(dungeon: &Dungeon, room: &Room, report: &mut Report) {
    for target_name in &room.connections {
        let Some(target) = dungeon.find_room(target_name) else {
            report.push(Diagnostic::new(
                RuleCode::InvalidConnection,
                &room.name,
                format!("Unknown connection: no room named '{target_name}'"),
            ));
            continue;
        };
        // By identity: a duplicate-named room is a different room.
        if std::ptr::eq(target, room) {
            report.push(Diagnostic::new(
                RuleCode::SelfConnection,
                &room.name,
                "A room cannot connect to itself",
            ));
        } else if !target.connects_to(&room.name) {
            report.push(Diagnostic::new(
                RuleCode::AsymmetricConnection,
                &room.name,
                format!(
                    "Connections must be symmetric: '{}' <-> '{}'",
                    room.name, target.name
                ),
            ));
        }
    }
}

/// Breadth-first walk from the first room of the floor; every room on the
/// floor must be reached. Targets resolve across the whole dungeon.
pub(crate) fn all_rooms_connected(dungeon: &Dungeon, floor: &Floor, report: &mut Report) {
    let Some(start) = floor.rooms.first() else {
        return;
    };
    if floor.rooms.len() == 1 {
        return;
    }

    let mut visited: HashSet<&str> = HashSet::from([start.name.as_str()]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for name in &current.connections {
            if let Some(next) = dungeon.find_room(name) {
                if visited.insert(next.name.as_str()) {
                    queue.push_back(next);
                }
            }
        }
    }

    for room in &floor.rooms {
        if !visited.contains(room.name.as_str()) {
            report.push(Diagnostic::new(
                RuleCode::IsolatedRoom,
                &room.name,
                format!(
                    "Room '{}' is isolated and not connected to other rooms",
                    room.name
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_types::{RoomType, Size};

    fn room(name: &str, links: &[&str]) -> Room {
        Room::new(name, Size::Medium, RoomType::Combat, "F", links.iter().copied())
            .expect("room")
    }

    fn dungeon_with(rooms: Vec<Room>) -> Dungeon {
        let mut d = Dungeon::new("D", "T", 1).expect("dungeon");
        let floor = d.add_floor(Floor::new("F").expect("floor"));
        for r in rooms {
            floor.add_room(r);
        }
        d
    }

    fn run(d: &Dungeon) -> Vec<RuleCode> {
        let mut report = Report::default();
        unique_room_names(d, &mut report);
        for floor in &d.floors {
            all_rooms_connected(d, floor, &mut report);
            for r in &floor.rooms {
                room_connections(d, r, &mut report);
            }
        }
        report.codes()
    }

    #[test]
    fn symmetric_pair_is_clean() {
        let d = dungeon_with(vec![room("A", &["B"]), room("B", &["A"])]);
        assert!(run(&d).is_empty());
    }

    #[test]
    fn duplicate_reported_once_per_repeat() {
        let d = dungeon_with(vec![room("A", &[]), room("A", &[]), room("A", &[])]);
        let mut report = Report::default();
        unique_room_names(&d, &mut report);
        assert_eq!(report.codes(), [RuleCode::DuplicateRoomName; 2]);
    }

    #[test]
    fn unknown_self_and_one_way() {
        let d = dungeon_with(vec![room("A", &["Z", "A", "B"]), room("B", &["A"]), room("C", &["A"])]);
        let codes = run(&d);
        assert!(codes.contains(&RuleCode::InvalidConnection));
        assert!(codes.contains(&RuleCode::SelfConnection));
        // C -> A is not mirrored
        assert!(codes.contains(&RuleCode::AsymmetricConnection));
    }

    #[test]
    fn link_to_namesake_is_not_a_self_connection() {
        let d = dungeon_with(vec![room("A", &["B"]), room("B", &["A"]), room("A", &["A"])]);
        let mut report = Report::default();
        room_connections(&d, &d.floors[0].rooms[2], &mut report);
        assert_eq!(report.codes(), [RuleCode::AsymmetricConnection]);
    }

    #[test]
    fn isolated_room_found() {
        let d = dungeon_with(vec![room("A", &["B"]), room("B", &["A"]), room("C", &[])]);
        let mut report = Report::default();
        all_rooms_connected(&d, &d.floors[0], &mut report);
        assert_eq!(report.codes(), [RuleCode::IsolatedRoom]);
        assert_eq!(report.diagnostics[0].subject, "C");
    }

    #[test]
    fn reachability_follows_outgoing_links_only() {
        // B points at A, but nothing leads from A to B
        let d = dungeon_with(vec![room("A", &[]), room("B", &["A"])]);
        let mut report = Report::default();
        all_rooms_connected(&d, &d.floors[0], &mut report);
        assert_eq!(report.codes(), [RuleCode::IsolatedRoom]);
    }

    #[test]
    fn path_through_another_floor_counts() {
        let mut d = dungeon_with(vec![room("A", &["X"]), room("B", &["X"])]);
        d.add_floor(Floor::new("G").expect("floor"))
            .add_room(room("X", &["A", "B"]));
        let mut report = Report::default();
        all_rooms_connected(&d, &d.floors[0], &mut report);
        assert!(report.is_clean());
    }

    #[test]
    fn single_room_floor_skipped() {
        let d = dungeon_with(vec![room("Alone", &[])]);
        let mut report = Report::default();
        all_rooms_connected(&d, &d.floors[0], &mut report);
        assert!(report.is_clean());
    }
}
