//! TOML dungeon manifests.
//!
//! A manifest is the structured hand-off from whatever authored the dungeon.
//! Enumeration values are read as text and resolved through their tags so
//! that both `STEP_ON` and `stepOn` are accepted for triggers.

use std::path::Path;
use std::str::FromStr;

use color_eyre::eyre::{Result, WrapErr, eyre};
use config::{Config, File, FileFormat};
use dungeon_types::{Behaviour, Dungeon, Floor, Npc, NpcType, Room, RoomType, Size, Trap, Trigger};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub dungeon: DungeonEntry,
}

#[derive(Debug, Deserialize)]
pub struct DungeonEntry {
    pub name: String,
    #[serde(default)]
    pub theme: String,
    pub level: u32,
    #[serde(default)]
    pub floors: Vec<FloorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FloorEntry {
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RoomEntry {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub room_type: String,
    /// Defaults to the enclosing floor's name.
    pub floor_id: Option<String>,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub traps: Vec<TrapEntry>,
    #[serde(default)]
    pub npcs: Vec<NpcEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TrapEntry {
    pub name: String,
    pub trigger: String,
    #[serde(default)]
    pub disarmable: bool,
    pub trigger_chance: i32,
}

#[derive(Debug, Deserialize)]
pub struct NpcEntry {
    pub name: String,
    pub behaviour: String,
    #[serde(rename = "type")]
    pub npc_type: String,
    pub health: i32,
}

fn tag<T: FromStr>(kind: &str, owner: &str, value: &str) -> Result<T> {
    T::from_str(value).map_err(|_| eyre!("{owner}: unknown {kind} '{value}'"))
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_source(File::from(path).format(FileFormat::Toml))
            .wrap_err_with(|| format!("reading manifest {}", path.display()))
    }

    #[cfg(test)]
    pub fn parse(toml: &str) -> Result<Self> {
        Self::from_source(File::from_str(toml, FileFormat::Toml))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let manifest = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(manifest)
    }

    /// Build the model, going through the model constructors so their
    /// argument checks apply.
    pub fn into_dungeon(self) -> Result<Dungeon> {
        let entry = self.dungeon;
        let mut dungeon = Dungeon::new(entry.name, entry.theme, entry.level)?;
        for floor_entry in entry.floors {
            let floor = dungeon.add_floor(Floor::new(floor_entry.name)?);
            let floor_name = floor.name.clone();
            for room_entry in floor_entry.rooms {
                let owner = format!("room '{}'", room_entry.name);
                let room = floor.add_room(
                    Room::new(
                        room_entry.name,
                        tag::<Size>("size", &owner, &room_entry.size)?,
                        tag::<RoomType>("room type", &owner, &room_entry.room_type)?,
                        room_entry.floor_id.unwrap_or_else(|| floor_name.clone()),
                        room_entry.connections,
                    )
                    .wrap_err_with(|| format!("on floor '{floor_name}'"))?,
                );
                for t in room_entry.traps {
                    let trigger = tag::<Trigger>("trigger", &owner, &t.trigger)?;
                    room.add_trap(Trap::new(t.name, trigger, t.disarmable, t.trigger_chance));
                }
                for n in room_entry.npcs {
                    let behaviour = tag::<Behaviour>("behaviour", &owner, &n.behaviour)?;
                    let npc_type = tag::<NpcType>("npc type", &owner, &n.npc_type)?;
                    room.add_npc(Npc::new(n.name, behaviour, npc_type, n.health));
                }
            }
        }
        log::debug!(
            "loaded dungeon '{}' with {} floors",
            dungeon.name,
            dungeon.floors.len()
        );
        Ok(dungeon)
    }
}
