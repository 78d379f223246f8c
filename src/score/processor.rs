use crate::{
    model::{
        difficulty::Difficulty,
        hit_result::{ComboResult, HitResult},
        target::TargetInfo,
    },
    util::{float_ext::FloatExt, mods::Mods},
};

use super::aggregate::PrefixAggregate;

/// Turns judgements into score and combo.
pub(crate) trait ScoreProcessor {
    /// Adjust a result before it's recorded.
    fn modify_result(&self, result: HitResult, target: &TargetInfo) -> HitResult {
        let _ = target;

        result
    }

    fn add_result(&mut self, result: HitResult, combo: ComboResult);

    fn score(&self) -> u64;

    fn combo(&self) -> u32;
}

/// The two scoring rule-sets.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ScoreVariant {
    V1(ScoreV1),
    V2(ScoreV2),
}

impl ScoreVariant {
    pub(crate) fn new(
        targets: &[TargetInfo],
        aggregates: &[PrefixAggregate],
        difficulty: &Difficulty,
    ) -> Self {
        if difficulty.get_mods().v2() {
            Self::V2(ScoreV2::new(aggregates, difficulty.get_mods()))
        } else {
            Self::V1(ScoreV1::new(targets, difficulty))
        }
    }
}

impl ScoreProcessor for ScoreVariant {
    fn modify_result(&self, result: HitResult, target: &TargetInfo) -> HitResult {
        match self {
            Self::V1(v1) => v1.modify_result(result, target),
            Self::V2(v2) => v2.modify_result(result, target),
        }
    }

    fn add_result(&mut self, result: HitResult, combo: ComboResult) {
        match self {
            Self::V1(v1) => v1.add_result(result, combo),
            Self::V2(v2) => v2.add_result(result, combo),
        }
    }

    fn score(&self) -> u64 {
        match self {
            Self::V1(v1) => v1.score(),
            Self::V2(v2) => v2.score(),
        }
    }

    fn combo(&self) -> u32 {
        match self {
            Self::V1(v1) => v1.combo(),
            Self::V2(v2) => v2.combo(),
        }
    }
}

fn apply_combo(combo: &mut u32, result: ComboResult) {
    match result {
        ComboResult::Reset => *combo = 0,
        ComboResult::Hold => {}
        ComboResult::Increase => *combo += 1,
    }
}

/// Classic scoring where each hit is scaled by the current combo.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScoreV1 {
    score: u64,
    combo: u32,
    difficulty_multiplier: f64,
    mod_multiplier: f64,
}

impl ScoreV1 {
    pub(crate) fn new(targets: &[TargetInfo], difficulty: &Difficulty) -> Self {
        let density = match targets {
            [first, .., last] => {
                let drain_secs = (last.end_time - first.start_time) / 1000.0;

                if drain_secs > 0.0 {
                    (targets.len() as f64 / drain_secs * 8.0).clamp(0.0, 16.0)
                } else {
                    16.0
                }
            }
            _ => 16.0,
        };

        // mods only act through the score multiplier
        let sum = difficulty.get_base_hp()
            + difficulty.get_base_od()
            + difficulty.get_base_cs()
            + density;

        Self {
            score: 0,
            combo: 0,
            difficulty_multiplier: (sum / 38.0 * 5.0).round(),
            mod_multiplier: difficulty.get_mods().score_multiplier(),
        }
    }
}

impl ScoreProcessor for ScoreV1 {
    fn add_result(&mut self, result: HitResult, combo: ComboResult) {
        apply_combo(&mut self.combo, combo);

        let value = u64::from(result.score_value());

        if result.is_counting() {
            let combo_multiplier = f64::from(self.combo.saturating_sub(1));
            let bonus = value as f64 * combo_multiplier * self.difficulty_multiplier
                * self.mod_multiplier
                / 25.0;

            self.score += value + bonus as u64;
        } else {
            self.score += value;
        }
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn combo(&self) -> u32 {
        self.combo
    }
}

/// Scoring capped at one million where combo and accuracy are weighted
/// separately.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScoreV2 {
    score: u64,
    combo: u32,
    combo_portion: f64,
    max_combo_portion: f64,
    bonus: f64,
    acc_value: u64,
    judged: u32,
    total: u32,
    mod_multiplier: f64,
}

impl ScoreV2 {
    const COMBO_WEIGHT: f64 = 700_000.0;
    const ACC_WEIGHT: f64 = 300_000.0;

    pub(crate) fn new(aggregates: &[PrefixAggregate], mods: u32) -> Self {
        let max_combo_portion = aggregates
            .iter()
            .map(|aggregate| Self::combo_value(300.0, aggregate.max_combo))
            .sum();

        Self {
            score: 0,
            combo: 0,
            combo_portion: 0.0,
            max_combo_portion,
            bonus: 0.0,
            acc_value: 0,
            judged: 0,
            total: aggregates.last().map_or(0, |aggregate| aggregate.n_objects),
            mod_multiplier: mods.score_multiplier(),
        }
    }

    fn combo_value(value: f64, combo: u32) -> f64 {
        value * (1.0 + f64::from(combo) / 10.0)
    }
}

impl ScoreProcessor for ScoreV2 {
    fn add_result(&mut self, result: HitResult, combo: ComboResult) {
        apply_combo(&mut self.combo, combo);

        let value = result.score_value();

        if result.is_base_hit() {
            self.combo_portion += Self::combo_value(f64::from(value), self.combo);
        }

        if result.is_counting() {
            self.judged += 1;
            self.acc_value += u64::from(value);
        } else {
            self.bonus += f64::from(value);
        }

        let acc = if self.judged > 0 {
            self.acc_value as f64 / (f64::from(self.judged) * 300.0)
        } else {
            1.0
        };

        let combo_part = if self.max_combo_portion.not_eq(0.0) {
            Self::COMBO_WEIGHT * self.combo_portion / self.max_combo_portion
        } else {
            0.0
        };

        let progress = if self.total > 0 {
            f64::from(self.judged) / f64::from(self.total)
        } else {
            0.0
        };

        let acc_part = Self::ACC_WEIGHT * acc.powi(10) * progress;

        self.score = ((combo_part + acc_part + self.bonus) * self.mod_multiplier).round() as u64;
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn combo(&self) -> u32 {
        self.combo
    }
}
