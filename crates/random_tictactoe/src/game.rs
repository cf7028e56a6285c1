//! Turn sequencing and game-over state.

use crate::board::Board;
use crate::error::{BoardError, GameError, GameErrorKind};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::players::{ComputerPlayer, HumanPlayer, Participant};
use crate::types::{Coord, Mark, Move, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// What happened to a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Cell was occupied. Nothing changed.
    Invalid,
    /// The human tried to move on the computer's turn. Nothing changed.
    NotYourTurn,
    /// Move accepted, game goes on with the other side.
    Continue,
    /// Move accepted and completed a line.
    Win {
        /// Mark that won.
        winner: Mark,
        /// The winning line in scan order.
        cells: Vec<Coord>,
    },
    /// Board is full with no winner.
    Draw,
}

impl MoveOutcome {
    /// Returns true for outcomes that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. } | MoveOutcome::Draw)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Drawn,
}

/// Terminal evaluation of a board: win, draw, or keep playing.
pub fn evaluate(board: &Board) -> MoveOutcome {
    if let Some(line) = board.winning_line() {
        return MoveOutcome::Win {
            winner: line.winner,
            cells: line.cells,
        };
    }
    if board.is_full() {
        return MoveOutcome::Draw;
    }
    MoveOutcome::Continue
}

/// Human-versus-computer game engine.
///
/// The game exclusively owns its board. Callers must serialize access;
/// every mutating method takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    human: HumanPlayer,
    computer: ComputerPlayer,
    current: Side,
    game_over: bool,
    winner: Option<Mark>,
    history: Vec<Move>,
    rng: R,
}

impl Game<StdRng> {
    /// Standard 3x3 game, human `X` against computer `O`, seeded RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::standard(StdRng::seed_from_u64(seed))
    }

    /// Standard 3x3 game, human `X` against computer `O`, OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self::standard(StdRng::from_entropy())
    }

    fn standard(rng: StdRng) -> Self {
        let mut game = Self {
            board: Board::default(),
            human: HumanPlayer::new(Mark::X),
            computer: ComputerPlayer::new(Mark::O),
            current: Side::Human,
            game_over: false,
            winner: None,
            history: Vec::new(),
            rng,
        };
        game.reset();
        game
    }
}

impl<R: Rng> Game<R> {
    /// Creates a game and picks the first player at random.
    #[track_caller]
    pub fn new(
        board: Board,
        human: HumanPlayer,
        computer: ComputerPlayer,
        rng: R,
    ) -> Result<Self, GameError> {
        if human.symbol() == computer.symbol() {
            return Err(GameError::new(GameErrorKind::SharedSymbol(human.symbol())));
        }
        let mut game = Self {
            board,
            human,
            computer,
            current: Side::Human,
            game_over: false,
            winner: None,
            history: Vec::new(),
            rng,
        };
        game.reset();
        Ok(game)
    }

    /// Clears the board and re-draws who moves first.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.game_over = false;
        self.winner = None;
        self.current = if self.rng.gen_bool(0.5) {
            Side::Human
        } else {
            Side::Computer
        };
        info!(first = %self.current, "New round");
    }

    /// Places the human's mark.
    ///
    /// - `Ok(None)` if the game is already over
    /// - `Ok(Some(NotYourTurn))` if the computer is to move
    /// - `Ok(Some(Invalid))` if the cell is occupied
    ///
    /// # Errors
    ///
    /// Out-of-range coordinates are rejected before any state is consulted.
    #[instrument(skip(self), fields(side = %self.current))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Option<MoveOutcome>, BoardError> {
        self.board.cell(row, col)?;

        if self.game_over {
            debug!("Game over, move ignored");
            return Ok(None);
        }
        if self.current != Side::Human {
            warn!(row, col, "Human move on computer's turn");
            return Ok(Some(MoveOutcome::NotYourTurn));
        }

        self.place(Side::Human, Coord::new(row, col)).map(Some)
    }

    /// Lets the computer take its turn.
    ///
    /// Returns `None` if the game is over or it is the human's turn.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Option<MoveOutcome> {
        if self.game_over || self.current != Side::Computer {
            return None;
        }

        let Some(coord) = self.computer.make_move(&self.board, &mut self.rng) else {
            // Terminal evaluation runs after every move, so a full board is
            // already game over by the time we get here.
            warn!("Computer has no move on a live game");
            self.game_over = true;
            return Some(MoveOutcome::Draw);
        };

        match self.place(Side::Computer, coord) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(error = %e, "Computer picked a cell off the board");
                None
            }
        }
    }

    fn place(&mut self, side: Side, coord: Coord) -> Result<MoveOutcome, BoardError> {
        let mark = self.symbol_of(side);
        if !self.board.set_cell(coord.row, coord.col, mark)? {
            debug!(%coord, "Cell occupied");
            return Ok(MoveOutcome::Invalid);
        }
        self.history.push(Move::new(side, mark, coord));
        debug!(%side, %mark, %coord, "Move accepted");

        let outcome = self.check_result();
        if !self.game_over {
            self.current = self.current.other();
        }

        self.assert_invariants();
        Ok(outcome)
    }

    fn check_result(&mut self) -> MoveOutcome {
        let outcome = evaluate(&self.board);
        match &outcome {
            MoveOutcome::Win { winner, .. } => {
                self.game_over = true;
                self.winner = Some(*winner);
                info!(%winner, "Game won");
            }
            MoveOutcome::Draw => {
                self.game_over = true;
                info!("Game drawn");
            }
            _ => {}
        }
        outcome
    }

    /// Debug builds only; release builds skip the history replay.
    fn assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let result = GameInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Game invariants violated");
    }
}

impl<R> Game<R> {
    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human participant.
    pub fn human(&self) -> &HumanPlayer {
        &self.human
    }

    /// The computer participant.
    pub fn computer(&self) -> &ComputerPlayer {
        &self.computer
    }

    /// Side to move next.
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Mark of the side to move next.
    pub fn current_player_symbol(&self) -> Mark {
        self.symbol_of(self.current)
    }

    /// Returns true if the computer moves next.
    pub fn is_current_player_computer(&self) -> bool {
        self.current == Side::Computer
    }

    /// Returns true once a win or draw has been reached.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winning mark, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Accepted moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Summary of where the game stands.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(mark)) => GameStatus::Won(mark),
            (true, None) => GameStatus::Drawn,
        }
    }

    /// Side playing `mark`, if either does.
    pub fn side_of(&self, mark: Mark) -> Option<Side> {
        if self.human.symbol() == mark {
            Some(Side::Human)
        } else if self.computer.symbol() == mark {
            Some(Side::Computer)
        } else {
            None
        }
    }

    fn symbol_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human.symbol(),
            Side::Computer => self.computer.symbol(),
        }
    }
}
