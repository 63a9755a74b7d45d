use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Player action that sets off a trap.
///
/// The emitted tag is the camel-case form (`stepOn`); the upper-snake variant
/// name (`STEP_ON`) is accepted when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    AsRefStr,
    Display,
)]
pub enum Trigger {
    #[serde(rename = "stepOn")]
    #[strum(to_string = "stepOn", serialize = "STEP_ON")]
    StepOn,
    #[serde(rename = "openDoor")]
    #[strum(to_string = "openDoor", serialize = "OPEN_DOOR")]
    OpenDoor,
}
