//! Core game state machine
//!
//! This module contains the main game struct and the logic for one trivia
//! session: cell selection, answer reveal, judgment, score accrual, and
//! turn rotation between the two teams. All mutation goes through the
//! operations defined here; the presentation layer renders from the
//! read-only queries and reacts to the advisory [`Signal`]s.
//!
//! The session moves through three phases: idle, a selected cell with its
//! answer hidden, and a selected cell with its answer revealed. Judging a
//! selection resolves it permanently; dismissing one abandons it without
//! side effects.

use std::{collections::HashSet, fmt::Debug};

use enum_map::EnumMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    board::{Board, CellId},
    team::Team,
};

/// The phase of the selection state machine
///
/// A session is idle between selections. Selecting a cell opens it with the
/// answer hidden; revealing shows the answer; judging or dismissing returns
/// the session to idle. There is no terminal phase: once every cell is
/// answered the session simply stays idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No cell is selected
    Idle,
    /// A cell is selected and its answer is still hidden
    SelectedHidden,
    /// A cell is selected and its answer is revealed
    SelectedRevealed,
}

/// The currently open cell and its reveal state
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Selection {
    /// The cell that was selected
    cell: CellId,
    /// Whether the answer has been revealed
    revealed: bool,
}

/// Advisory signals emitted by game operations
///
/// Signals tell the presentation layer which feedback cue to play. They are
/// fire-and-forget: the core never waits on cue playback and ignoring a
/// signal cannot affect game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    /// A cell was selected and its question is now open
    SelectionOpened,
    /// The open selection was judged correct
    JudgedCorrect,
    /// The open selection was judged incorrect
    JudgedIncorrect,
}

impl Signal {
    /// Converts the signal to a JSON string for the presentation layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Errors surfaced by the read-only query layer
///
/// Every invalid operation is a silent no-op, so the only error the core
/// can report is a selection referencing a cell the board does not have.
/// That state is unreachable through the public surface and indicates a
/// programming defect, so the query layer fails loudly instead of guessing.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The current selection references a cell absent from the board
    #[error("selected cell {cell} is missing from the board")]
    MissingCell {
        /// The identifier the selection points at
        cell: CellId,
    },
}

/// The resolved view of the current selection for rendering
///
/// Combines the selected cell's identity with the question and answer text
/// looked up from the board, plus whether the answer is currently revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedClue {
    /// The category of the selected cell
    pub category: String,
    /// The point value of the selected cell
    pub value: u64,
    /// The question text to display
    pub question: String,
    /// The answer text, rendered only once `revealed` is set
    pub answer: String,
    /// Whether the answer has been revealed
    pub revealed: bool,
}

/// A full snapshot of the session for the presentation layer
///
/// Sent to synchronize a renderer with the current game state, typically
/// after every dispatched intent or when a view (re)connects to a session.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct SyncMessage {
    /// Current score of each team
    pub scores: EnumMap<Team, u64>,
    /// The team whose turn it is to answer
    pub active_team: Team,
    /// Identifiers of every resolved cell, in stable order
    pub answered: Vec<CellId>,
    /// The resolved current selection, if one is open
    pub selection: Option<SelectedClue>,
}

impl SyncMessage {
    /// Converts the snapshot to a JSON string for the presentation layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// The state of one two-team trivia session
///
/// Owns the static board plus all mutable session state: the team at play,
/// per-team scores, the set of resolved cells, and the current selection.
/// Created once at game start and mutated only through the operations below;
/// nothing is persisted beyond the life of the value, though it serializes
/// so an embedding layer can snapshot and restore a session mid-flight.
#[derive(Serialize, Deserialize)]
pub struct Game {
    /// The static question grid, read-only for the lifetime of the session
    board: Board,
    /// The team whose turn it is to answer
    current_team: Team,
    /// Points accrued by each team
    scores: EnumMap<Team, u64>,
    /// Cells that have been resolved (correct or incorrect); only grows
    answered: HashSet<CellId>,
    /// The currently open cell, if any
    selection: Option<Selection>,
}

impl Debug for Game {
    /// Custom debug implementation that avoids printing the full board
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("current_team", &self.current_team)
            .field("scores", &self.scores)
            .field("answered", &self.answered.len())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new session over the given board
    ///
    /// The session starts idle with team A at play, both scores at zero,
    /// and no cell answered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jeopardy::{Board, Game, Team};
    ///
    /// let game = Game::new(Board::default());
    /// assert_eq!(game.active_team(), Team::A);
    /// ```
    pub fn new(board: Board) -> Self {
        Self {
            board,
            current_team: Team::default(),
            scores: EnumMap::default(),
            answered: HashSet::new(),
            selection: None,
        }
    }

    /// Opens a cell for the team at play
    ///
    /// Preconditions: no selection is currently open, the cell exists on the
    /// board, and the cell has not been resolved. A call violating any of
    /// them is a silent no-op, so double-clicks and stale clicks from the
    /// presentation layer cannot corrupt state.
    ///
    /// # Returns
    ///
    /// [`Signal::SelectionOpened`] when the cell was opened, `None` on a no-op
    pub fn select_cell(&mut self, category: &str, value: u64) -> Option<Signal> {
        if self.selection.is_some() || !self.board.contains(category, value) {
            return None;
        }

        let cell = CellId::new(category, value);
        if self.answered.contains(&cell) {
            return None;
        }

        self.selection = Some(Selection {
            cell,
            revealed: false,
        });

        Some(Signal::SelectionOpened)
    }

    /// Reveals the answer of the open selection
    ///
    /// No-op when no selection is open or the answer is already revealed.
    /// Never touches scores, the turn, or the answered set.
    pub fn reveal_answer(&mut self) {
        if let Some(selection) = &mut self.selection {
            selection.revealed = true;
        }
    }

    /// Resolves the open selection as correct or incorrect
    ///
    /// The selected cell is permanently marked answered, a correct answer
    /// credits the team at play with exactly the cell's point value, and the
    /// turn passes to the other team regardless of correctness. The
    /// selection is closed in the same step. Valid whether or not the answer
    /// was revealed; a call with no open selection is a silent no-op.
    ///
    /// # Returns
    ///
    /// [`Signal::JudgedCorrect`] or [`Signal::JudgedIncorrect`] matching the
    /// judgment, or `None` on a no-op
    pub fn judge(&mut self, is_correct: bool) -> Option<Signal> {
        let Selection { cell, .. } = self.selection.take()?;

        if is_correct {
            self.scores[self.current_team] += cell.value;
        }
        self.answered.insert(cell);
        self.current_team = self.current_team.opponent();

        Some(if is_correct {
            Signal::JudgedCorrect
        } else {
            Signal::JudgedIncorrect
        })
    }

    /// Abandons the open selection without resolving it
    ///
    /// Models escape-key or click-outside dismissal. The cell stays
    /// selectable, no score changes, and the turn does not pass. Idempotent:
    /// a call with no open selection is a harmless no-op.
    pub fn dismiss_selection(&mut self) {
        self.selection = None;
    }

    /// Checks whether a cell has been resolved
    pub fn is_answered(&self, category: &str, value: u64) -> bool {
        self.answered.contains(&CellId::new(category, value))
    }

    /// Returns the resolved view of the open selection
    ///
    /// Looks up the question and answer text from the board. Returns
    /// `Ok(None)` when the session is idle.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCell`] when the selection references a cell the board
    /// does not have. That state is unreachable through the public surface
    /// (selection checks existence), but a restored or corrupted session
    /// must fail loudly here rather than be trusted blindly.
    pub fn current_selection(&self) -> Result<Option<SelectedClue>, Error> {
        let Some(selection) = &self.selection else {
            return Ok(None);
        };

        let clue = self
            .board
            .clue(&selection.cell.category, selection.cell.value)
            .ok_or_else(|| Error::MissingCell {
                cell: selection.cell.clone(),
            })?;

        Ok(Some(SelectedClue {
            category: selection.cell.category.clone(),
            value: selection.cell.value,
            question: clue.question.clone(),
            answer: clue.answer.clone(),
            revealed: selection.revealed,
        }))
    }

    /// Returns the current score of each team
    pub fn scores(&self) -> EnumMap<Team, u64> {
        self.scores.clone()
    }

    /// Returns the current score of one team
    pub fn score(&self, team: Team) -> u64 {
        self.scores[team]
    }

    /// Returns the team whose turn it is to answer
    pub fn active_team(&self) -> Team {
        self.current_team
    }

    /// Returns the current phase of the selection state machine
    pub fn phase(&self) -> Phase {
        match &self.selection {
            None => Phase::Idle,
            Some(Selection {
                revealed: false, ..
            }) => Phase::SelectedHidden,
            Some(Selection { revealed: true, .. }) => Phase::SelectedRevealed,
        }
    }

    /// Returns the board this session is played over
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Checks whether every cell on the board has been resolved
    ///
    /// A finished session stays idle; every further `select_cell` is a no-op.
    pub fn is_finished(&self) -> bool {
        self.board.cells().all(|cell| self.answered.contains(&cell))
    }

    /// Builds the full synchronization snapshot for the presentation layer
    ///
    /// Answered cells are listed in stable (category, value) order so
    /// renderers can diff consecutive snapshots.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCell`] when the open selection cannot be resolved
    /// against the board, see [`Game::current_selection`].
    pub fn state_message(&self) -> Result<SyncMessage, Error> {
        Ok(SyncMessage {
            scores: self.scores.clone(),
            active_team: self.current_team,
            answered: self.answered.iter().cloned().sorted().collect_vec(),
            selection: self.current_selection()?,
        })
    }
}
