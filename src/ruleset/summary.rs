use std::{cmp::Reverse, fmt::Write};

use tracing::info;

use crate::{
    model::{grade::Grade, target::PlayerId},
    score::ScoreProcessor,
};

use super::OsuRuleset;

/// Accuracy, max combo, score, and grade of a player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayerResults {
    /// Accuracy in percent.
    pub accuracy: f64,
    pub max_combo: u32,
    pub score: u64,
    pub grade: Grade,
}

impl OsuRuleset {
    /// All players sorted by score, best first. Ties keep the order in which
    /// players were added.
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut players: Vec<_> = self.players().collect();
        players.sort_by_key(|&player| Reverse(self.score(player)));

        players
    }

    pub(crate) fn log_standings(&self) {
        let mut table = String::new();

        let _ = writeln!(
            table,
            "{:>3} | {:<20} | {:>10} | {:>8} | {:>5} | {:>5} | {:>5} | {:>5} | {:>5} | {:>6} | {:>9} | {:>10} | {:>8}",
            "#", "Player", "Score", "Accuracy", "Grade", "300", "100", "50", "Miss", "Combo",
            "Max Combo", "Mods", "PP"
        );

        for (rank, player) in self.standings().into_iter().enumerate() {
            let slot = self.slot(player);
            let state = &slot.state;

            let _ = writeln!(
                table,
                "{:>3} | {:<20} | {:>10} | {:>8.2} | {:>5} | {:>5} | {:>5} | {:>5} | {:>5} | {:>6} | {:>9} | {:>10} | {:>8.2}",
                rank + 1,
                slot.ctx.name(),
                slot.processor.score(),
                state.accuracy,
                state.grade,
                state.hits.n300,
                state.hits.n100,
                state.hits.n50,
                state.hits.misses,
                slot.processor.combo(),
                state.max_combo,
                slot.mods(),
                state.performance.total,
            );
        }

        info!("Run finished\n{table}");
    }
}
