//! The game engine: board, turn order, outcome and the computer opponent.
//!
//! A ply is one mark placed by one side. In human-vs-computer games a single
//! human request can produce two plies; the engine exposes both steps
//! ([`GameEngine::apply_human_move`], [`GameEngine::apply_computer_move_if_due`])
//! and a wrapper that runs them back to back ([`GameEngine::apply_move`]).

use super::action::{Move, MoveError};
use super::config::EngineConfig;
use super::invariants::{EngineInvariants, InvariantSet};
use super::rng::GameRng;
use super::{Board, Difficulty, Mark, Mode, Outcome, Position, Square, rules, strategy};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The mark the computer plays in human-vs-computer games.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Mode and difficulty as one unit, so a pending change is applied atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Settings {
    mode: Mode,
    difficulty: Difficulty,
}

/// What happened in response to one human request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyReport {
    /// The requested move, as applied.
    pub human: Move,
    /// The computer's reply, if one was due.
    pub computer: Option<Move>,
    /// Outcome after both plies.
    pub outcome: Outcome,
}

/// Tic-tac-toe engine.
///
/// Owns the board exclusively. Readers get a shared borrow ([`board`]) or an
/// owned grid ([`board_snapshot`]); only the engine's own methods mutate it.
///
/// [`board`]: GameEngine::board
/// [`board_snapshot`]: GameEngine::board_snapshot
#[derive(Debug, Clone)]
pub struct GameEngine<R = GameRng> {
    pub(crate) board: Board,
    to_move: Mark,
    outcome: Outcome,
    pub(crate) history: Vec<Move>,
    settings: Settings,
    pending: Option<Settings>,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Creates an engine with default settings and a random seed.
    #[instrument]
    pub fn new() -> Self {
        let rng = GameRng::from_entropy();
        debug!(seed = rng.seed(), "Seeded engine");
        Self::with_rng(rng)
    }

    /// Creates an engine whose computer choices are reproducible from `seed`.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Creates an engine from loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = (*config.seed()).map_or_else(GameRng::from_entropy, GameRng::new);
        info!(
            mode = %config.mode(),
            difficulty = %config.difficulty(),
            seed = rng.seed(),
            "Engine configured"
        );
        let mut engine = Self::with_rng(rng);
        engine.settings = Settings {
            mode: *config.mode(),
            difficulty: *config.difficulty(),
        };
        engine
    }

    /// Seed of the engine's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Read-only queries
// ─────────────────────────────────────────────────────────────

impl<R> GameEngine<R> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board, indexed `[row][col]`.
    ///
    /// Each call returns an independent grid; editing it has no effect on the
    /// engine.
    pub fn board_snapshot(&self) -> [[Square; 3]; 3] {
        self.board.rows()
    }

    /// The mark due to move. After the game ends this is the mark that
    /// made the last move.
    pub fn current_turn(&self) -> Mark {
        self.to_move
    }

    /// Active game mode.
    pub fn mode(&self) -> Mode {
        self.settings.mode
    }

    /// Active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    /// Outcome as of the last ply.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The computer's mark, or `None` when two humans are playing.
    pub fn computer_mark(&self) -> Option<Mark> {
        match self.settings.mode {
            Mode::HumanVsComputer => Some(COMPUTER_MARK),
            Mode::HumanVsHuman => None,
        }
    }

    /// True when the next ply belongs to the computer.
    pub fn computer_due(&self) -> bool {
        self.outcome == Outcome::Ongoing && self.computer_mark() == Some(self.to_move)
    }

    /// True when a human may place a mark right now.
    pub fn awaiting_human(&self) -> bool {
        self.outcome == Outcome::Ongoing && !self.computer_due()
    }

    /// Derives the outcome from the board.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    fn check_invariants(&self) {
        let result = EngineInvariants::check_all(self);
        if let Err(violations) = &result {
            warn!(?violations, "Engine invariant violated");
        }
        debug_assert!(result.is_ok(), "Engine invariants violated: {:?}", result);
    }
}

// ─────────────────────────────────────────────────────────────
//  Commands
// ─────────────────────────────────────────────────────────────

impl<R: Rng> GameEngine<R> {
    /// Creates an engine drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
            settings: Settings::default(),
            pending: None,
            rng,
        }
    }

    /// Clears the board, gives X the move and applies any pending settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
        self.outcome = Outcome::Ongoing;
        self.history.clear();
        if let Some(settings) = self.pending.take() {
            self.settings = settings;
        }
        info!(
            mode = %self.settings.mode,
            difficulty = %self.settings.difficulty,
            "Game reset"
        );
    }

    /// Changes the mode.
    ///
    /// Takes effect immediately if no move has been made yet, otherwise at
    /// the next [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.update_settings(|s| s.mode = mode);
    }

    /// Changes the difficulty, with the same timing as [`set_mode`](Self::set_mode).
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.update_settings(|s| s.difficulty = difficulty);
    }

    /// Selects mode and difficulty and starts a fresh game.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, mode: Mode, difficulty: Difficulty) {
        self.set_mode(mode);
        self.set_difficulty(difficulty);
        self.reset();
    }

    fn update_settings(&mut self, change: impl FnOnce(&mut Settings)) {
        if self.history.is_empty() {
            change(&mut self.settings);
        } else {
            let mut next = self.pending.unwrap_or(self.settings);
            change(&mut next);
            debug!(?next, "Settings deferred until reset");
            self.pending = Some(next);
        }
    }

    /// Places a mark for whichever human is due.
    ///
    /// # Errors
    ///
    /// Refuses the move, leaving all state untouched, when the game is over,
    /// the computer is due, or the square is occupied.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn apply_human_move(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        if self.computer_due() {
            return Err(MoveError::ComputerToMove);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.commit(position);
        Ok(self.outcome)
    }

    /// Plays the computer's reply if it is the computer's turn.
    ///
    /// Returns the move that was made, or `None` when no reply was due.
    #[instrument(skip(self))]
    pub fn apply_computer_move_if_due(&mut self) -> Option<Move> {
        if !self.computer_due() {
            return None;
        }
        let position = self.select_computer_move()?;
        let mov = Move::new(self.to_move, position);
        self.commit(position);
        Some(mov)
    }

    /// Chooses a move for the mark due, at the active difficulty.
    ///
    /// Does not touch the board. Returns `None` once the game is over.
    #[instrument(skip(self), fields(difficulty = %self.settings.difficulty))]
    pub fn select_computer_move(&mut self) -> Option<Position> {
        if self.outcome.is_terminal() {
            return None;
        }
        strategy::select_move(
            self.settings.difficulty,
            &self.board,
            self.to_move,
            &mut self.rng,
        )
    }

    /// Applies a human move at `(row, col)` and then any computer reply.
    ///
    /// # Errors
    ///
    /// Returns the reason the human move was illegal; nothing changes in
    /// that case.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, row: usize, col: usize) -> Result<PlyReport, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let human = Move::new(self.to_move, position);
        self.apply_human_move(position)?;
        let computer = self.apply_computer_move_if_due();

        Ok(PlyReport {
            human,
            computer,
            outcome: self.outcome,
        })
    }

    /// Applies a human move at `(row, col)` and then any computer reply.
    ///
    /// Returns true iff the human move was legal and applied.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        match self.try_apply_move(row, col) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, row, col, "Move rejected");
                false
            }
        }
    }

    fn commit(&mut self, position: Position) {
        let mov = Move::new(self.to_move, position);
        self.board.set(position, Square::Occupied(mov.mark));
        self.history.push(mov);
        self.outcome = self.evaluate();

        if self.outcome == Outcome::Ongoing {
            self.to_move = self.to_move.opponent();
        } else {
            info!(outcome = %self.outcome, "Game finished");
        }
        debug!(%mov, outcome = %self.outcome, "Ply committed");

        self.check_invariants();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_new_game_state() {
        let engine = GameEngine::with_seed(3);
        assert_eq!(engine.current_turn(), Mark::X);
        assert_eq!(engine.outcome(), Outcome::Ongoing);
        assert_eq!(engine.mode(), Mode::HumanVsHuman);
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert!(engine.awaiting_human());
        assert_eq!(engine.computer_mark(), None);
    }

    #[test]
    fn test_human_step_leaves_computer_due() {
        let mut engine = GameEngine::with_rng(StepRng::new(0, 0));
        engine.start_new_game(Mode::HumanVsComputer, Difficulty::Hard);

        assert_eq!(engine.apply_human_move(Position::TopLeft), Ok(Outcome::Ongoing));
        assert!(engine.computer_due());
        assert!(!engine.awaiting_human());
        assert_eq!(
            engine.apply_human_move(Position::TopCenter),
            Err(MoveError::ComputerToMove)
        );

        let reply = engine.apply_computer_move_if_due();
        assert_eq!(reply, Some(Move::new(Mark::O, Position::Center)));
        assert_eq!(engine.current_turn(), Mark::X);
        assert_eq!(engine.apply_computer_move_if_due(), None);
    }

    #[test]
    fn test_no_computer_in_two_player_mode() {
        let mut engine = GameEngine::with_seed(8);
        assert_eq!(engine.apply_human_move(Position::Center), Ok(Outcome::Ongoing));
        assert_eq!(engine.apply_computer_move_if_due(), None);
        assert_eq!(engine.current_turn(), Mark::O);
    }

    #[test]
    fn test_mode_change_mid_game_waits_for_reset() {
        let mut engine = GameEngine::with_seed(8);
        assert!(engine.apply_move(1, 1));

        engine.set_mode(Mode::HumanVsComputer);
        engine.set_difficulty(Difficulty::Easy);
        assert_eq!(engine.mode(), Mode::HumanVsHuman);
        assert_eq!(engine.difficulty(), Difficulty::Medium);

        engine.reset();
        assert_eq!(engine.mode(), Mode::HumanVsComputer);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_mode_change_before_first_move_is_immediate() {
        let mut engine = GameEngine::with_seed(8);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_try_apply_move_reports_both_plies() {
        let mut engine = GameEngine::with_rng(StepRng::new(0, 0));
        engine.start_new_game(Mode::HumanVsComputer, Difficulty::Hard);

        let report = engine.try_apply_move(0, 0).unwrap();
        assert_eq!(report.human, Move::new(Mark::X, Position::TopLeft));
        assert_eq!(report.computer, Some(Move::new(Mark::O, Position::Center)));
        assert_eq!(report.outcome, Outcome::Ongoing);
    }

    #[test]
    fn test_out_of_bounds_reported() {
        let mut engine = GameEngine::with_seed(1);
        assert_eq!(
            engine.try_apply_move(3, 1),
            Err(MoveError::OutOfBounds { row: 3, col: 1 })
        );
    }
}
