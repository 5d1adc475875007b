//! Batch play: a random X against the computer.

use rand::seq::SliceRandom;
use serde::Serialize;
use tictactoe_core::{Difficulty, GameEngine, GameRng, Mark, Mode, Outcome};
use tracing::{debug, info, instrument, warn};

/// Tally of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SimulationReport {
    /// Games played.
    pub games: usize,
    /// Computer difficulty.
    pub difficulty: Difficulty,
    /// Seed the run started from.
    pub seed: u64,
    /// Games the random player won.
    pub x_wins: usize,
    /// Games the computer won.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pct = |n: usize| {
            if self.games == 0 {
                0.0
            } else {
                100.0 * n as f64 / self.games as f64
            }
        };
        writeln!(
            f,
            "{} games vs {} computer (seed {})",
            self.games, self.difficulty, self.seed
        )?;
        writeln!(f, "  X (random) wins: {:>6} ({:5.1}%)", self.x_wins, pct(self.x_wins))?;
        writeln!(f, "  O (computer) wins: {:>4} ({:5.1}%)", self.o_wins, pct(self.o_wins))?;
        write!(f, "  draws: {:>15} ({:5.1}%)", self.draws, pct(self.draws))
    }
}

/// Plays `games` games of a uniformly random X against the computer.
///
/// The computer draws from `seed`; the random player from `seed + 1`, so a
/// run is fully determined by its seed.
#[instrument]
pub fn simulate(games: usize, difficulty: Difficulty, seed: u64) -> SimulationReport {
    let mut engine = GameEngine::with_seed(seed);
    engine.start_new_game(Mode::HumanVsComputer, difficulty);
    let mut player = GameRng::new(seed.wrapping_add(1));

    let mut report = SimulationReport {
        games,
        difficulty,
        seed,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for game in 0..games {
        engine.reset();
        while engine.awaiting_human() {
            let empty = engine.board().empty_positions();
            let Some(&position) = empty.choose(&mut player) else {
                break;
            };
            if let Err(e) = engine.apply_human_move(position) {
                warn!(error = %e, %position, "Random move refused");
                break;
            }
            engine.apply_computer_move_if_due();
        }

        match engine.outcome() {
            Outcome::Won(Mark::X) => report.x_wins += 1,
            Outcome::Won(Mark::O) => report.o_wins += 1,
            Outcome::Draw => report.draws += 1,
            Outcome::Ongoing => {}
        }
        debug!(game, outcome = %engine.outcome(), "Game simulated");
    }

    info!(
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        draws = report.draws,
        "Simulation complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_finishes() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let report = simulate(200, difficulty, 5);
            assert_eq!(report.x_wins + report.o_wins + report.draws, 200);
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        assert_eq!(
            simulate(100, Difficulty::Medium, 11),
            simulate(100, Difficulty::Medium, 11)
        );
    }

    #[test]
    fn test_hard_beats_easy() {
        let hard = simulate(500, Difficulty::Hard, 3);
        let easy = simulate(500, Difficulty::Easy, 3);
        assert!(hard.x_wins < easy.x_wins);
        assert!(hard.o_wins > easy.o_wins);
    }

    #[test]
    fn test_json_shape() {
        let report = simulate(0, Difficulty::Hard, 1);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["x-wins"], 0);
        assert_eq!(report.to_string().lines().count(), 4);
    }
}
