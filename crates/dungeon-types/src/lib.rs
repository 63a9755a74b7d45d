pub mod dungeon;
pub mod npc;
pub mod room_type;
pub mod size;
pub mod trigger;

pub use dungeon::{Dungeon, Floor, ModelError, Npc, Room, Trap};
pub use npc::{Behaviour, NpcType};
pub use room_type::RoomType;
pub use size::Size;
pub use trigger::Trigger;
