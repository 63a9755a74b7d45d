//! JSON emission for [`dungeon_types::Dungeon`] trees.
//!
//! Output is all-or-nothing: the whole tree is validated before the first
//! byte is rendered, so a failed call never produces a partial document.

pub mod validate;
pub mod writer;

use std::io::Write;

use dungeon_types::Dungeon;

pub use validate::{ValidationError, validate};
pub use writer::JsonStyle;

#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to write dungeon document: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize `dungeon` as a compact JSON document.
pub fn to_json(dungeon: &Dungeon) -> Result<String, ValidationError> {
    to_json_with(dungeon, JsonStyle::Compact)
}

/// Serialize `dungeon` using the given layout.
pub fn to_json_with(dungeon: &Dungeon, style: JsonStyle) -> Result<String, ValidationError> {
    validate(dungeon)?;
    let doc = writer::render(dungeon, style);
    log::debug!("rendered dungeon '{}' ({} bytes)", dungeon.name, doc.len());
    Ok(doc)
}

/// Serialize `dungeon` and hand the finished document to `sink` in a single
/// write. Nothing reaches the sink if validation fails.
pub fn write_json<W: Write>(
    dungeon: &Dungeon,
    style: JsonStyle,
    mut sink: W,
) -> Result<(), SerializeError> {
    let doc = to_json_with(dungeon, style)?;
    sink.write_all(doc.as_bytes())?;
    sink.flush()?;
    Ok(())
}
