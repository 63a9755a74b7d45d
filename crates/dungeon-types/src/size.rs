use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Room footprint.
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
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Size {
    Large,
    Medium,
    Small,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(Size::COUNT, 3);
    }

    #[test]
    fn tags() {
        assert_eq!(Size::Large.as_ref(), "LARGE");
        assert_eq!(Size::Medium.as_ref(), "MEDIUM");
        assert_eq!(Size::Small.as_ref(), "SMALL");
    }

    #[test]
    fn parse_tag() {
        for size in Size::iter() {
            assert_eq!(Size::from_str(size.as_ref()), Ok(size));
        }
        assert!(Size::from_str("HUGE").is_err());
    }
}
