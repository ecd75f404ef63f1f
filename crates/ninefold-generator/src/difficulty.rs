//! Difficulty levels and their cell-removal table.

use std::str::FromStr;

use derive_more::{Display, Error};

/// Puzzle difficulty, controlling how many cells the generator blanks.
///
/// Each level maps to a fixed number of removed cells; harder levels leave
/// fewer givens on the board. The mapping is a static table, not a measure of
/// solving technique.
///
/// # Examples
///
/// ```
/// use ninefold_generator::Difficulty;
///
/// assert_eq!(Difficulty::default(), Difficulty::Medium);
/// assert_eq!(Difficulty::Medium.removed_cells(), 46);
/// assert_eq!(Difficulty::Medium.given_cells(), 35);
/// assert_eq!("hard".parse(), Ok(Difficulty::Hard));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Difficulty {
    /// Removes 30 cells, leaving 51 givens.
    #[display("very-easy")]
    VeryEasy,
    /// Removes 36 cells, leaving 45 givens.
    #[display("easy")]
    Easy,
    /// Removes 46 cells, leaving 35 givens.
    #[default]
    #[display("medium")]
    Medium,
    /// Removes 54 cells, leaving 27 givens.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// Array containing all difficulty levels, easiest first.
    pub const ALL: [Self; 4] = [Self::VeryEasy, Self::Easy, Self::Medium, Self::Hard];

    /// Number of cells the generator removes from the solved grid.
    #[must_use]
    pub const fn removed_cells(self) -> u8 {
        match self {
            Self::VeryEasy => 30,
            Self::Easy => 36,
            Self::Medium => 46,
            Self::Hard => 54,
        }
    }

    /// Number of given cells a generated puzzle starts with.
    #[must_use]
    pub const fn given_cells(self) -> u8 {
        81 - self.removed_cells()
    }

    /// Human-readable name for display to players.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Error returned when parsing a [`Difficulty`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty: {name}")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a difficulty token (`very-easy`, `easy`, `medium`, `hard`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "very-easy" => Ok(Self::VeryEasy),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError { name: s.to_owned() }),
        }
    }
}
