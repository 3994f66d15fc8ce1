/// One of the two course days. The closed enumeration behind the day
/// selector tabs and the day content pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Day {
    #[default]
    One,
    Two,
}

impl Day {
    /// All days, in display order. The first member is the selector default.
    pub const ALL: [Day; 2] = [Day::One, Day::Two];

    /// Short tab label ("Day 1" / "Day 2").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Day::One => "Day 1",
            Day::Two => "Day 2",
        }
    }

    /// Stable slug used for anchors and route paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Day::One => "day1",
            Day::Two => "day2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Day;

    #[test]
    fn default_is_first_member() {
        assert_eq!(Day::default(), Day::ALL[0]);
    }
}
