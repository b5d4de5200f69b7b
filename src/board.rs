//! Board data and cell identity
//!
//! This module defines the static question grid for a game: categories
//! mapped to point values mapped to clues. The board is supplied once at
//! game construction and never mutated by the core; the grid may be sparse,
//! with different categories carrying different value sets.

use std::collections::BTreeMap;

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants;

/// A composite identifier for a single cell on the board
///
/// A cell is uniquely keyed by its category name and point value. Identity
/// is structural, so the same (category, value) pair always refers to the
/// same cell regardless of where the identifier was constructed.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{category} ({value})")]
pub struct CellId {
    /// The category the cell belongs to
    pub category: String,
    /// The point value of the cell within its category
    pub value: u64,
}

impl CellId {
    /// Creates a cell identifier from a category name and point value
    pub fn new(category: impl Into<String>, value: u64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// A single question/answer pair on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Clue {
    /// The question text shown when the cell is selected
    #[garde(length(min = 1, max = constants::clue::MAX_QUESTION_LENGTH))]
    pub question: String,
    /// The answer text shown once revealed
    #[garde(length(min = 1, max = constants::clue::MAX_ANSWER_LENGTH))]
    pub answer: String,
}

impl Clue {
    /// Creates a clue from question and answer text
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The static question grid for one game
///
/// Maps each category to its point values and their clues. Constructed once
/// from embedding-layer data and treated as read-only afterwards; the core
/// only performs existence checks and clue lookups against it.
///
/// Serializes transparently as the nested category → value → clue mapping,
/// so a board can be loaded directly from its JSON authoring format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Board {
    /// Categories mapped to their point values and clues
    #[garde(custom(category_limits), custom(clue_limits))]
    categories: BTreeMap<String, BTreeMap<u64, Clue>>,
}

/// Validates every clue on the board
///
/// Expressed as a custom rule because garde's `dive` cannot traverse maps
/// with non-string keys (`u64` does not implement `PathComponentKind`).
fn clue_limits(
    categories: &BTreeMap<String, BTreeMap<u64, Clue>>,
    _context: &(),
) -> garde::Result {
    categories
        .values()
        .flat_map(BTreeMap::values)
        .try_for_each(|clue| {
            clue.validate()
                .map_err(|report| garde::Error::new(report.to_string()))
        })
}

/// Checks category count and name length limits for a board
fn category_limits(
    categories: &BTreeMap<String, BTreeMap<u64, Clue>>,
    _context: &(),
) -> garde::Result {
    if categories.len() > constants::board::MAX_CATEGORY_COUNT {
        return Err(garde::Error::new("board has too many categories"));
    }
    if categories
        .keys()
        .any(|name| name.is_empty() || name.len() > constants::board::MAX_CATEGORY_LENGTH)
    {
        return Err(garde::Error::new("category name length is out of bounds"));
    }
    Ok(())
}

impl Board {
    /// Creates a board from a category → value → clue mapping
    pub fn new(categories: BTreeMap<String, BTreeMap<u64, Clue>>) -> Self {
        Self { categories }
    }

    /// Checks whether a cell exists on the board
    pub fn contains(&self, category: &str, value: u64) -> bool {
        self.clue(category, value).is_some()
    }

    /// Looks up the clue for a cell
    ///
    /// # Returns
    ///
    /// The clue at (category, value), or `None` if the board has no such cell
    pub fn clue(&self, category: &str, value: u64) -> Option<&Clue> {
        self.categories.get(category)?.get(&value)
    }

    /// Returns the category names in display order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Returns the distinct point values across all categories in ascending order
    ///
    /// On a sparse grid this is the union of every category's value set,
    /// suitable as the row labels of a rendered board.
    pub fn values(&self) -> Vec<u64> {
        self.categories
            .values()
            .flat_map(|cells| cells.keys().copied())
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// Returns the identifier of every cell on the board
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.categories.iter().flat_map(|(category, cells)| {
            cells
                .keys()
                .map(move |value| CellId::new(category.clone(), *value))
        })
    }

    /// Returns the total number of cells on the board
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Checks if the board contains any cells
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeMap::is_empty)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        serde_json::from_value(serde_json::json!({
            "Sports": {
                "200": { "question": "Q1", "answer": "A1" },
                "1400": { "question": "Q2", "answer": "A2" }
            },
            "Literature": {
                "1400": { "question": "Q3", "answer": "A3" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_board_deserializes_from_authoring_format() {
        let board = sample_board();

        assert_eq!(board.len(), 3);
        assert_eq!(
            board.clue("Sports", 200),
            Some(&Clue::new("Q1", "A1")),
        );
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let board = sample_board();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
    }

    #[test]
    fn test_contains() {
        let board = sample_board();

        assert!(board.contains("Sports", 200));
        assert!(board.contains("Literature", 1400));
        assert!(!board.contains("Sports", 400));
        assert!(!board.contains("History", 200));
    }

    #[test]
    fn test_sparse_value_union_is_sorted_and_distinct() {
        let board = sample_board();

        assert_eq!(board.values(), vec![200, 1400]);
    }

    #[test]
    fn test_categories_in_display_order() {
        let board = sample_board();

        let categories = board.categories().collect::<Vec<_>>();
        assert_eq!(categories, vec!["Literature", "Sports"]);
    }

    #[test]
    fn test_cells_enumerates_every_cell() {
        let board = sample_board();

        let cells = board.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![
                CellId::new("Literature", 1400),
                CellId::new("Sports", 200),
                CellId::new("Sports", 1400),
            ]
        );
    }

    #[test]
    fn test_empty_board() {
        let board = Board::default();

        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert_eq!(board.values(), Vec::<u64>::new());
    }

    #[test]
    fn test_validation_accepts_well_formed_board() {
        assert!(sample_board().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_question() {
        let board = Board::new(BTreeMap::from([(
            "Sports".to_owned(),
            BTreeMap::from([(200, Clue::new("", "A1"))]),
        )]));

        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_category_name() {
        let board = Board::new(BTreeMap::from([(
            String::new(),
            BTreeMap::from([(200, Clue::new("Q1", "A1"))]),
        )]));

        assert!(board.validate().is_err());
    }

    #[test]
    fn test_cell_id_structural_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(CellId::new("Sports", 200));

        assert!(set.contains(&CellId::new("Sports", 200)));
        assert!(!set.contains(&CellId::new("Sports", 400)));
        assert!(!set.contains(&CellId::new("Literature", 200)));
    }

    #[test]
    fn test_cell_id_display() {
        assert_eq!(CellId::new("Sports", 200).to_string(), "Sports (200)");
    }
}
