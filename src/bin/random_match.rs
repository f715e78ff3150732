//! Standalone random self-play smoke runner.
//!
//! Plays seeded random legal games through the controller and reports each
//! outcome, exercising move generation, legality filtering, castling
//! bookkeeping, and terminal detection end to end.
//!
//! Run with:
//! `cargo run --release --bin random_match`
//! `cargo run --release --bin random_match -- --games 20 --verbose`

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use rowan_chess::controller::game_controller::GameController;
use rowan_chess::game_state::chess_types::{Color, GameStatus};
use rowan_chess::utils::render_game_state::render_game_state;

const BASE_SEED: u64 = 1234;
const MAX_PLIES: usize = 300;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = parse_flag_value(&args, "--games").unwrap_or(10);

    let mut checkmates = 0usize;
    let mut stalemates = 0usize;
    let mut capped = 0usize;

    for game_index in 0..games {
        let mut rng = StdRng::seed_from_u64(BASE_SEED + game_index as u64);
        let mut controller = GameController::new_game(Color::White);
        let mut plies = 0usize;

        while !controller.is_game_over() && plies < MAX_PLIES {
            let moves = controller.enumerate_turn_moves();
            let Some(&(from, to)) = moves.as_slice().choose(&mut rng) else {
                break;
            };
            controller
                .submit_move(from, to)
                .map_err(|e| format!("game {game_index}: rejected {from}->{to}: {e}"))?;
            plies += 1;
        }

        match controller.status() {
            GameStatus::Checkmate { winner } => {
                checkmates += 1;
                println!("game {game_index}: checkmate, {winner} wins after {plies} plies");
            }
            GameStatus::Stalemate => {
                stalemates += 1;
                println!("game {game_index}: stalemate after {plies} plies");
            }
            GameStatus::Ongoing => {
                capped += 1;
                println!("game {game_index}: stopped at the {MAX_PLIES}-ply cap");
            }
        }

        if verbose {
            println!("{}", render_game_state(controller.state()));
        }
    }

    println!(
        "played {games} games: {checkmates} checkmates, {stalemates} stalemates, {capped} capped"
    );
    Ok(())
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<usize> {
    let position = args.iter().position(|a| a == flag)?;
    args.get(position + 1)?.parse().ok()
}
