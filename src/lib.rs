//! # Jeopardy Game Library
//!
//! This library provides the core game logic for a two-team, turn-based
//! trivia board game. It tracks a grid of question cells organized by
//! category and point value, enforces turn order between two teams, scores
//! correct and incorrect answers, and prevents re-selection of cells that
//! have already been answered.
//!
//! Presentation (layout, modals, audio cues, input wiring) is an external
//! collaborator: it dispatches user intents into [`game::Game`] and renders
//! from the read-only query surface, reacting to the advisory
//! [`game::Signal`]s the core emits.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod board;
pub mod constants;
pub mod game;
pub mod team;

pub use board::{Board, CellId, Clue};
pub use game::{Error, Game, Phase, SelectedClue, Signal, SyncMessage};
pub use team::Team;
