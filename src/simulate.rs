//! Headless batches of rounds for smoke-testing the engine.

use crate::config::GameConfig;
use crate::orchestrator::Tally;
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_tictactoe::{ComputerPlayer, Participant};
use tracing::{debug, info, instrument};

/// Plays `games` rounds with a random stand-in supplying the human's moves.
///
/// The stand-in draws from its own RNG, seeded one past the configured seed
/// so a seeded run is reproducible.
#[instrument(skip(config))]
pub fn simulate(config: &GameConfig, games: u32) -> Result<Tally> {
    let mut game = config.build_game().context("Invalid simulation config")?;
    let human = game.human().symbol();
    let stand_in = ComputerPlayer::new(human);
    let mut stand_in_rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let mut tally = Tally::default();
    for round in 0..games {
        if round > 0 {
            game.reset();
        }
        let outcome = loop {
            let outcome = if game.is_current_player_computer() {
                game.computer_move()
            } else {
                match stand_in.make_move(game.board(), &mut stand_in_rng) {
                    Some(coord) => game
                        .make_move(coord.row, coord.col)
                        .context("Stand-in left the board")?,
                    None => None,
                }
            };
            match outcome {
                Some(outcome) if outcome.is_terminal() => break outcome,
                Some(_) => {}
                None => bail!("Round {} stalled before finishing", round),
            }
        };
        tally.record(&outcome, human);
        debug!(round, ?outcome, "Round finished");
    }

    info!(games, tally = %tally, "Simulation finished");
    Ok(tally)
}
