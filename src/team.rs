//! Team identity and turn order
//!
//! This module defines the fixed two-team set competing over the board.
//! Teams are used as keys into the score table and to track whose turn
//! it is to answer.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// One of the two teams competing in a game
///
/// The team set is fixed at exactly two members. Team A always opens the
/// game; the turn passes to the opponent after every judged answer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Enum,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Team {
    /// The team that opens the game
    #[display("A")]
    A,
    /// The team that answers second
    #[display("B")]
    B,
}

impl Team {
    /// Returns the other team
    ///
    /// Used to pass the turn after a judged answer. Applying this twice
    /// returns the original team.
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl Default for Team {
    /// The starting team is always A
    fn default() -> Self {
        Self::A
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_teams() {
        assert_eq!(Team::A.opponent(), Team::B);
        assert_eq!(Team::B.opponent(), Team::A);
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Team::A.opponent().opponent(), Team::A);
        assert_eq!(Team::B.opponent().opponent(), Team::B);
    }

    #[test]
    fn test_default_is_team_a() {
        assert_eq!(Team::default(), Team::A);
    }

    #[test]
    fn test_display() {
        assert_eq!(Team::A.to_string(), "A");
        assert_eq!(Team::B.to_string(), "B");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Team::A).unwrap(), "\"A\"");

        let team: Team = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(team, Team::B);
    }
}
