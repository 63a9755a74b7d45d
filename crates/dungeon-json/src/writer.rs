//! Recursive-descent JSON writer over the dungeon tree.
//!
//! Each level of the tree has its own `write_*` function and passes a
//! `first` flag for every member and element; `serde_json`'s formatter turns
//! that into separators, indentation and string escapes.

use std::io::{self, Write};

use dungeon_types::{Dungeon, Floor, Npc, Room, Trap};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// One member per line, `indent` spaces per nesting level.
    Pretty { indent: u8 },
}

impl JsonStyle {
    pub const DEFAULT_INDENT: u8 = 2;

    pub fn pretty() -> Self {
        Self::Pretty {
            indent: Self::DEFAULT_INDENT,
        }
    }
}

struct Writer<W, F> {
    out: W,
    fmt: F,
}

impl<W: Write, F: Formatter> Writer<W, F> {
    fn string(&mut self, s: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, s)?;
        Ok(())
    }

    /// Write one object member. `first` suppresses the leading comma.
    fn field(
        &mut self,
        key: &str,
        first: bool,
        value: impl FnOnce(&mut Self) -> io::Result<()>,
    ) -> io::Result<()> {
        self.fmt.begin_object_key(&mut self.out, first)?;
        self.string(key)?;
        self.fmt.end_object_key(&mut self.out)?;
        self.fmt.begin_object_value(&mut self.out)?;
        value(self)?;
        self.fmt.end_object_value(&mut self.out)
    }

    fn string_field(&mut self, key: &str, value: &str, first: bool) -> io::Result<()> {
        self.field(key, first, |w| w.string(value))
    }

    fn object(&mut self, body: impl FnOnce(&mut Self) -> io::Result<()>) -> io::Result<()> {
        self.fmt.begin_object(&mut self.out)?;
        body(self)?;
        self.fmt.end_object(&mut self.out)
    }

    fn array<T>(
        &mut self,
        key: &str,
        items: &[T],
        mut write_item: impl FnMut(&mut Self, &T) -> io::Result<()>,
    ) -> io::Result<()> {
        self.field(key, false, |w| {
            w.fmt.begin_array(&mut w.out)?;
            for (i, item) in items.iter().enumerate() {
                w.fmt.begin_array_value(&mut w.out, i == 0)?;
                write_item(w, item)?;
                w.fmt.end_array_value(&mut w.out)?;
            }
            w.fmt.end_array(&mut w.out)
        })
    }

    fn write_document(&mut self, dungeon: &Dungeon) -> io::Result<()> {
        self.object(|w| w.field("dungeon", true, |w| w.write_dungeon(dungeon)))
    }

    fn write_dungeon(&mut self, dungeon: &Dungeon) -> io::Result<()> {
        self.object(|w| {
            w.string_field("name", &dungeon.name, true)?;
            w.string_field("theme", &dungeon.theme, false)?;
            w.field("level", false, |w| w.fmt.write_u32(&mut w.out, dungeon.level))?;
            w.array("floors", &dungeon.floors, Self::write_floor)
        })
    }

    fn write_floor(&mut self, floor: &Floor) -> io::Result<()> {
        self.object(|w| {
            w.string_field("name", &floor.name, true)?;
            w.array("rooms", &floor.rooms, Self::write_room)
        })
    }

    fn write_room(&mut self, room: &Room) -> io::Result<()> {
        self.object(|w| {
            w.string_field("name", &room.name, true)?;
            w.string_field("size", room.size.as_ref(), false)?;
            w.string_field("type", room.room_type.as_ref(), false)?;
            w.string_field("floorId", &room.floor_id, false)?;
            w.array("connections", &room.connections, |w, c| w.string(c))?;
            w.array("traps", &room.traps, Self::write_trap)?;
            w.array("npcs", &room.npcs, Self::write_npc)
        })
    }

    fn write_trap(&mut self, trap: &Trap) -> io::Result<()> {
        self.object(|w| {
            w.string_field("name", &trap.name, true)?;
            w.string_field("trigger", trap.trigger.as_ref(), false)?;
            w.field("disarmable", false, |w| {
                w.fmt.write_bool(&mut w.out, trap.disarmable)
            })?;
            w.field("triggerChance", false, |w| {
                w.fmt.write_i32(&mut w.out, trap.trigger_chance)
            })
        })
    }

    fn write_npc(&mut self, npc: &Npc) -> io::Result<()> {
        self.object(|w| {
            w.string_field("name", &npc.name, true)?;
            w.string_field("behaviour", npc.behaviour.as_ref(), false)?;
            w.string_field("type", npc.npc_type.as_ref(), false)?;
            w.field("health", false, |w| w.fmt.write_i32(&mut w.out, npc.health))
        })
    }
}

/// Render `dungeon` into `out` without validating it. Pretty output ends
/// with a newline.
pub(crate) fn render_to<W: Write>(dungeon: &Dungeon, style: JsonStyle, out: W) -> io::Result<()> {
    match style {
        JsonStyle::Compact => Writer {
            out,
            fmt: CompactFormatter,
        }
        .write_document(dungeon),
        JsonStyle::Pretty { indent } => {
            let indent = vec![b' '; indent as usize];
            let mut w = Writer {
                out,
                fmt: PrettyFormatter::with_indent(&indent),
            };
            w.write_document(dungeon)?;
            w.out.write_all(b"\n")
        }
    }
}

/// Render `dungeon` into a string without validating it.
pub(crate) fn render(dungeon: &Dungeon, style: JsonStyle) -> String {
    let mut buf = Vec::new();
    render_to(dungeon, style, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("serde_json emits UTF-8")
}
