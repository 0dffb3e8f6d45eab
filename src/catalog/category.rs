use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A named group of metrics. Declaration order is the canonical order:
/// wizard steps, radar axes and report sections all follow it.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Strength,
    Aesthetics,
    Flexibility,
    Coordination,
    Easiness,
}

impl Category {
    /// Number of categories, i.e. the length of every score vector.
    pub const COUNT: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count_matches_variants() {
        assert_eq!(Category::iter().count(), Category::COUNT);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("strength".parse::<Category>().unwrap(), Category::Strength);
        assert_eq!("EASINESS".parse::<Category>().unwrap(), Category::Easiness);
    }
}
