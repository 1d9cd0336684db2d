//! Arcade Leaderboard entry point
//!
//! Stands in for the game loop: loads (or creates) the leaderboard in the
//! current directory, optionally submits one finished run, saves and prints.
//!
//! Usage: `arcade-leaderboard [score level initials]`

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    use arcade_leaderboard::{FileStore, Leaderboard, RunResult, Settings};
    use std::path::Path;

    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let mut store = FileStore::new(".");
    let identifier = settings.leaderboard_file.as_str();

    let mut board =
        match Leaderboard::create_persisted_object(&store, identifier, settings.capacity) {
            Ok(board) => board,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [score, level, initials] => {
            let (Ok(score), Ok(level)) = (score.parse::<u64>(), level.parse::<u32>()) else {
                log::error!("score and level must be non-negative integers");
                return ExitCode::FAILURE;
            };

            if board.is_high_score(score) {
                let mut initials = initials.clone();
                board.add_score(RunResult { score, level }, &mut initials);
                if let Err(e) = board.store(&mut store, identifier) {
                    log::error!("{}", e);
                    return ExitCode::FAILURE;
                }
                println!("That's a high score!\n");
            } else {
                println!("{} did not make the leaderboard.\n", score);
            }
        }
        _ => {
            eprintln!("usage: arcade-leaderboard [score level initials]");
            return ExitCode::FAILURE;
        }
    }

    println!("HIGH SCORES\n");
    for row in board.ranked() {
        println!("  {}", row);
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; games embed LocalStorageStore directly
}
