//! Properties of the turn-sequencing state machine over many seeded games.

use random_tictactoe::{
    Board, Cell, ComputerPlayer, Game, GameInvariants, GameStatus, HumanPlayer, InvariantSet,
    Mark, MoveOutcome, Participant, Side,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Plays a full round, the human side driven by its own random policy.
///
/// Returns the outcome of the final move and the side of every accepted move.
fn play_out(game: &mut Game, seed: u64) -> (MoveOutcome, Vec<Side>) {
    let stand_in = ComputerPlayer::new(game.human().symbol());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut movers = Vec::new();

    loop {
        let side = game.current_side();
        let outcome = if game.is_current_player_computer() {
            game.computer_move().expect("computer's turn")
        } else {
            let coord = stand_in.make_move(game.board(), &mut rng).expect("board not full");
            game.make_move(coord.row, coord.col)
                .expect("in bounds")
                .expect("game live")
        };
        assert_ne!(outcome, MoveOutcome::Invalid);
        movers.push(side);
        assert!(GameInvariants::check_all(&*game).is_ok());
        if outcome.is_terminal() {
            return (outcome, movers);
        }
    }
}

#[test]
fn test_turns_strictly_alternate() {
    for seed in 0..200 {
        let mut game = Game::with_seed(seed);
        let (_, movers) = play_out(&mut game, seed + 1000);
        assert!(movers.windows(2).all(|pair| pair[0] != pair[1]), "seed {seed}");
    }
}

#[test]
fn test_game_over_matches_outcome() {
    for seed in 0..200 {
        let mut game = Game::with_seed(seed);
        let (outcome, _) = play_out(&mut game, seed);
        assert!(game.is_game_over());
        match outcome {
            MoveOutcome::Win { winner, cells } => {
                assert_eq!(game.status(), GameStatus::Won(winner));
                assert_eq!(cells.len(), 3);
                assert_eq!(game.board().winning_line().unwrap().cells, cells);
            }
            MoveOutcome::Draw => {
                assert_eq!(game.status(), GameStatus::Drawn);
                assert!(game.board().is_full());
            }
            other => panic!("Unexpected final outcome {:?}", other),
        }
    }
}

#[test]
fn test_moves_after_game_over_are_noops() {
    for seed in 0..50 {
        let mut game = Game::with_seed(seed);
        play_out(&mut game, seed * 7);
        let before = game.board().clone();
        let history = game.history().len();

        for coord in before.empty_cells() {
            assert_eq!(game.make_move(coord.row, coord.col).unwrap(), None);
        }
        assert_eq!(game.computer_move(), None);
        assert_eq!(game.board(), &before);
        assert_eq!(game.history().len(), history);
    }
}

#[test]
fn test_each_cell_set_at_most_once() {
    for seed in 0..100 {
        let mut game = Game::with_seed(seed);
        play_out(&mut game, seed + 1);
        let mut coords: Vec<_> = game.history().iter().map(|m| m.coord).collect();
        let total = coords.len();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), total);
    }
}

#[test]
fn test_reset_mid_game_clears_everything() {
    let mut game = Game::with_seed(42);
    if game.is_current_player_computer() {
        game.computer_move();
    }
    game.make_move(1, 1).unwrap();
    game.computer_move();
    assert!(!game.history().is_empty());

    game.reset();

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(game.board().cell(row, col).unwrap(), Cell::Empty);
        }
    }
    assert!(!game.is_game_over());
    assert!(game.history().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_reset_after_finished_game() {
    for seed in 0..20 {
        let mut game = Game::with_seed(seed);
        play_out(&mut game, seed);
        game.reset();
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.board(), &Board::default());
    }
}

#[test]
fn test_custom_symbols_are_used() {
    let mut game = Game::new(
        Board::default(),
        HumanPlayer::new(Mark::O),
        ComputerPlayer::new(Mark::X),
        StdRng::seed_from_u64(8),
    )
    .unwrap();
    if game.is_current_player_computer() {
        assert_eq!(game.current_player_symbol(), Mark::X);
        game.computer_move().unwrap();
    }
    assert_eq!(game.current_player_symbol(), Mark::O);
    game.make_move(0, 0).unwrap();
    assert!(game.history().iter().all(|m| match m.side {
        Side::Human => m.mark == Mark::O,
        Side::Computer => m.mark == Mark::X,
    }));
}
