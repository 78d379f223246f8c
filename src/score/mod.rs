pub use self::aggregate::PrefixAggregate;

pub(crate) use self::processor::{ScoreProcessor, ScoreVariant};

use crate::{
    model::{grade::Grade, hit_result::HitResult},
    skill::PerformanceResult,
};

mod aggregate;
mod processor;

/// Amount of each judgement kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HitCounts {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
    /// Combo runs closed with only 300s.
    pub geki: u32,
    /// Combo runs closed without 50s or misses.
    pub katu: u32,
}

impl HitCounts {
    /// The amount of the given counting result, `0` for anything else.
    pub const fn get(&self, result: HitResult) -> u32 {
        match result {
            HitResult::Hit300 => self.n300,
            HitResult::Hit100 => self.n100,
            HitResult::Hit50 => self.n50,
            HitResult::Miss => self.misses,
            _ => 0,
        }
    }

    /// Sum of 300s, 100s, 50s, and misses.
    pub const fn total(&self) -> u32 {
        self.n300 + self.n100 + self.n50 + self.misses
    }

    pub(crate) fn increment(&mut self, result: HitResult) {
        match result {
            HitResult::Hit300 => self.n300 += 1,
            HitResult::Hit100 => self.n100 += 1,
            HitResult::Hit50 => self.n50 += 1,
            HitResult::Miss => self.misses += 1,
            _ => {}
        }
    }
}

/// Live score of one player.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreState {
    /// Sum of the score values of all counting results.
    pub raw_score: u64,
    pub hits: HitCounts,
    /// Amount of counting results.
    pub num_objects: u32,
    /// Highest combo reached so far.
    pub max_combo: u32,
    /// Accuracy in percent.
    pub accuracy: f64,
    pub grade: Grade,
    /// 100s within the current combo run.
    pub current_katu: u32,
    /// 50s and misses within the current combo run.
    pub current_bad: u32,
    pub failed: bool,
    /// Remaining chances to avoid failing.
    pub recoveries: u32,
    pub performance: PerformanceResult,
}

impl ScoreState {
    pub(crate) fn new(recoveries: u32) -> Self {
        Self {
            raw_score: 0,
            hits: HitCounts::default(),
            num_objects: 0,
            max_combo: 0,
            accuracy: 100.0,
            grade: Grade::None,
            current_katu: 0,
            current_bad: 0,
            failed: false,
            recoveries,
            performance: PerformanceResult::default(),
        }
    }

    /// Record a counting result.
    pub(crate) fn count(&mut self, result: HitResult) {
        self.raw_score += u64::from(result.score_value());
        self.hits.increment(result);
        self.num_objects += 1;
    }

    /// Recompute accuracy and grade from the current counts.
    pub(crate) fn refresh(&mut self, reduced_visibility: bool) {
        self.accuracy = accuracy(self.raw_score, self.num_objects);

        if self.num_objects == 0 {
            return;
        }

        self.grade = Grade::calculate(
            self.hits.n300,
            self.hits.n50,
            self.hits.misses,
            self.num_objects,
            reduced_visibility,
        );
    }
}

/// Accuracy in percent given the raw score of `n` counting results.
pub(crate) fn accuracy(raw_score: u64, n: u32) -> f64 {
    if n == 0 {
        return 100.0;
    }

    100.0 * raw_score as f64 / (f64::from(n) * 300.0)
}
