use serde::Serialize;

use crate::npc::{Behaviour, NpcType};
use crate::room_type::RoomType;
use crate::size::Size;
use crate::trigger::Trigger;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid {what}: {reason}")]
    InvalidArgument { what: &'static str, reason: String },
}

fn require_name(what: &'static str, name: String) -> Result<String, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::InvalidArgument {
            what,
            reason: "name must not be empty".into(),
        });
    }
    Ok(name)
}

/// Root of a generated dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dungeon {
    pub name: String,
    pub theme: String,
    /// Difficulty level, 1 or higher.
    pub level: u32,
    pub floors: Vec<Floor>,
}

impl Dungeon {
    pub fn new(
        name: impl Into<String>,
        theme: impl Into<String>,
        level: u32,
    ) -> Result<Self, ModelError> {
        let name = require_name("dungeon name", name.into())?;
        if level == 0 {
            return Err(ModelError::InvalidArgument {
                what: "dungeon level",
                reason: format!("must be at least 1, got {level}"),
            });
        }
        Ok(Self {
            name,
            theme: theme.into(),
            level,
            floors: Vec::new(),
        })
    }

    /// Append a floor and return it for further population.
    pub fn add_floor(&mut self, floor: Floor) -> &mut Floor {
        self.floors.push(floor);
        self.floors.last_mut().expect("just pushed")
    }

    /// Every room on every floor, in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.floors.iter().flat_map(|f| f.rooms.iter())
    }

    /// First room with the given name, searching floors in order.
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|r| r.name == name)
    }
}

/// One floor of a dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Floor {
    pub name: String,
    pub rooms: Vec<Room>,
}

impl Floor {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        Ok(Self {
            name: require_name("floor name", name.into())?,
            rooms: Vec::new(),
        })
    }

    pub fn add_room(&mut self, room: Room) -> &mut Room {
        self.rooms.push(room);
        self.rooms.last_mut().expect("just pushed")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub name: String,
    pub size: Size,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Name of the owning floor.
    #[serde(rename = "floorId")]
    pub floor_id: String,
    /// Names of rooms reachable from this one. May point at other floors.
    pub connections: Vec<String>,
    pub traps: Vec<Trap>,
    pub npcs: Vec<Npc>,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        size: Size,
        room_type: RoomType,
        floor_id: impl Into<String>,
        connections: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            name: require_name("room name", name.into())?,
            size,
            room_type,
            floor_id: floor_id.into(),
            connections: connections.into_iter().map(Into::into).collect(),
            traps: Vec::new(),
            npcs: Vec::new(),
        })
    }

    pub fn add_trap(&mut self, trap: Trap) -> &mut Trap {
        self.traps.push(trap);
        self.traps.last_mut().expect("just pushed")
    }

    pub fn add_npc(&mut self, npc: Npc) -> &mut Npc {
        self.npcs.push(npc);
        self.npcs.last_mut().expect("just pushed")
    }

    pub fn connects_to(&self, name: &str) -> bool {
        self.connections.iter().any(|c| c == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trap {
    pub name: String,
    pub trigger: Trigger,
    pub disarmable: bool,
    /// Percentage chance of going off, 0-100. Range is checked when the
    /// dungeon is serialized, not here.
    #[serde(rename = "triggerChance")]
    pub trigger_chance: i32,
}

impl Trap {
    pub fn new(
        name: impl Into<String>,
        trigger: Trigger,
        disarmable: bool,
        trigger_chance: i32,
    ) -> Self {
        Self {
            name: name.into(),
            trigger,
            disarmable,
            trigger_chance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Npc {
    pub name: String,
    pub behaviour: Behaviour,
    #[serde(rename = "type")]
    pub npc_type: NpcType,
    pub health: i32,
}

impl Npc {
    pub fn new(
        name: impl Into<String>,
        behaviour: Behaviour,
        npc_type: NpcType,
        health: i32,
    ) -> Self {
        Self {
            name: name.into(),
            behaviour,
            npc_type,
            health,
        }
    }
}
