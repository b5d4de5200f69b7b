//! Configuration constants for the game board
//!
//! This module contains the validation limits used when checking board
//! content supplied by an embedding layer, keeping the boundaries for
//! categories and clue text in one place.

/// Board-level configuration constants
pub mod board {
    /// Maximum number of categories on a single board
    pub const MAX_CATEGORY_COUNT: usize = 12;
    /// Maximum length of a category name in characters
    pub const MAX_CATEGORY_LENGTH: usize = 100;
}

/// Clue text configuration constants
pub mod clue {
    /// Maximum length of a clue's question text in characters
    pub const MAX_QUESTION_LENGTH: usize = 500;
    /// Maximum length of a clue's answer text in characters
    pub const MAX_ANSWER_LENGTH: usize = 200;
}
