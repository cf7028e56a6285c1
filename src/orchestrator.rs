//! Drives a round between the human at the terminal and the computer.
//!
//! The orchestrator is the collaborator that sits between input and the
//! game core: it gates human input, paces computer moves, keeps the score,
//! and reports everything as [`GameEvent`]s.

use anyhow::Result;
use rand::Rng;
use rand::rngs::StdRng;
use random_tictactoe::{Board, Coord, Game, Mark, MoveOutcome, Side};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Why a human move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum RejectReason {
    /// The round has ended.
    #[display("The game is over. Type 'new' for another round.")]
    GameOver,
    /// The computer is still to move.
    #[display("Wait for the computer to move.")]
    ComputerTurn,
    /// Somebody already played there.
    #[display("Cell {} is already taken.", _0)]
    Occupied(Coord),
    /// Coordinates are off the board.
    #[display("Cell {} is not on the board.", _0)]
    OutOfBounds(Coord),
}

/// Running score across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Rounds the human won.
    pub human_wins: u32,
    /// Rounds the computer won.
    pub computer_wins: u32,
    /// Rounds that filled the board.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished round. Non-terminal outcomes are ignored.
    pub fn record(&mut self, outcome: &MoveOutcome, human: Mark) {
        match outcome {
            MoveOutcome::Win { winner, .. } if *winner == human => self.human_wins += 1,
            MoveOutcome::Win { .. } => self.computer_wins += 1,
            MoveOutcome::Draw => self.draws += 1,
            _ => {}
        }
    }

    /// Rounds counted so far.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Human {} - Computer {} - Draws {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}

/// Announcement for a finished round.
pub fn round_message(outcome: &MoveOutcome, human: Mark) -> String {
    match outcome {
        MoveOutcome::Win { winner, .. } if *winner == human => "Player Human won!".to_string(),
        MoveOutcome::Win { .. } => "Player Computer won!".to_string(),
        _ => "It's a draw!".to_string(),
    }
}

/// Messages sent from the orchestrator to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// First round is under way.
    Started,
    /// Board contents changed.
    BoardChanged(Board),
    /// A side is now to move.
    TurnChanged(Side),
    /// Computer move is scheduled.
    ComputerThinking,
    /// Human input was ignored.
    Rejected(RejectReason),
    /// Round ended.
    RoundOver {
        /// Final move outcome, with the winning cells on a win.
        outcome: MoveOutcome,
        /// Announcement text.
        message: String,
        /// Score including this round.
        tally: Tally,
    },
}

/// Orchestrates rounds between the human and the computer.
pub struct Orchestrator<R = StdRng> {
    game: Game<R>,
    delay: Duration,
    started: bool,
    tally: Tally,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<R: Rng> Orchestrator<R> {
    /// Creates an orchestrator. Nothing happens until [`start`](Self::start).
    pub fn new(game: Game<R>, delay: Duration, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self {
            game,
            delay,
            started: false,
            tally: Tally::default(),
            event_tx,
        }
    }

    /// Starts the first round. Later calls do nothing and return `false`.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<bool> {
        if self.started {
            debug!("Already started");
            return Ok(false);
        }
        self.started = true;
        info!("Starting game");
        self.event_tx.send(GameEvent::Started)?;
        self.announce_round()?;
        self.play_computer_turn().await?;
        Ok(true)
    }

    /// Abandons the current round and begins another.
    #[instrument(skip(self))]
    pub async fn new_round(&mut self) -> Result<()> {
        self.game.reset();
        self.started = true;
        self.announce_round()?;
        self.play_computer_turn().await
    }

    /// Applies a human move, then lets the computer answer.
    ///
    /// Returns the outcome of the human move, or `None` if it was rejected.
    #[instrument(skip(self))]
    pub async fn handle_cell(&mut self, row: usize, col: usize) -> Result<Option<MoveOutcome>> {
        if self.game.is_game_over() {
            return self.reject(RejectReason::GameOver);
        }
        if self.game.is_current_player_computer() {
            return self.reject(RejectReason::ComputerTurn);
        }

        let coord = Coord::new(row, col);
        let outcome = match self.game.make_move(row, col) {
            Err(e) => {
                warn!(error = %e, "Move off the board");
                return self.reject(RejectReason::OutOfBounds(coord));
            }
            Ok(None) => return self.reject(RejectReason::GameOver),
            Ok(Some(MoveOutcome::NotYourTurn)) => return self.reject(RejectReason::ComputerTurn),
            Ok(Some(MoveOutcome::Invalid)) => return self.reject(RejectReason::Occupied(coord)),
            Ok(Some(outcome)) => outcome,
        };

        self.after_move(&outcome)?;
        if !outcome.is_terminal() {
            self.play_computer_turn().await?;
        }
        Ok(Some(outcome))
    }

    /// Plays computer moves while it is the computer's turn.
    ///
    /// Waits the pacing delay first, then re-checks the turn before moving.
    #[instrument(skip(self))]
    pub async fn play_computer_turn(&mut self) -> Result<()> {
        while self.game.is_current_player_computer() && !self.game.is_game_over() {
            self.event_tx.send(GameEvent::ComputerThinking)?;
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let Some(outcome) = self.game.computer_move() else {
                debug!("Computer turn no longer pending");
                break;
            };
            self.after_move(&outcome)?;
        }
        Ok(())
    }

    /// The game being played.
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Score so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns true once [`start`](Self::start) has run.
    pub fn is_started(&self) -> bool {
        self.started
    }

    fn after_move(&mut self, outcome: &MoveOutcome) -> Result<()> {
        self.event_tx
            .send(GameEvent::BoardChanged(self.game.board().clone()))?;

        if outcome.is_terminal() {
            let human = self.human_symbol();
            self.tally.record(outcome, human);
            let message = round_message(outcome, human);
            info!(%message, tally = %self.tally, "Round over");
            self.event_tx.send(GameEvent::RoundOver {
                outcome: outcome.clone(),
                message,
                tally: self.tally,
            })?;
        } else {
            self.event_tx
                .send(GameEvent::TurnChanged(self.game.current_side()))?;
        }
        Ok(())
    }

    fn announce_round(&self) -> Result<()> {
        self.event_tx
            .send(GameEvent::BoardChanged(self.game.board().clone()))?;
        self.event_tx
            .send(GameEvent::TurnChanged(self.game.current_side()))?;
        Ok(())
    }

    fn reject(&self, reason: RejectReason) -> Result<Option<MoveOutcome>> {
        warn!(%reason, "Human move rejected");
        self.event_tx.send(GameEvent::Rejected(reason))?;
        Ok(None)
    }

    fn human_symbol(&self) -> Mark {
        use random_tictactoe::Participant;
        self.game.human().symbol()
    }
}
