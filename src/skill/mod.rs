pub(crate) use self::cache::SkillCache;

use crate::{
    error::EstimatorError,
    model::{difficulty::Difficulty, target::TargetInfo},
    score::{HitCounts, PrefixAggregate},
};

mod cache;

/// Cumulative star ratings up to and including one target.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SkillSnapshot {
    pub aim: f64,
    pub speed: f64,
    pub flashlight: f64,
    pub total: f64,
}

/// Performance points of a partial play.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PerformanceResult {
    pub aim: f64,
    pub speed: f64,
    pub acc: f64,
    pub flashlight: f64,
    /// Final performance points.
    pub total: f64,
}

/// Everything needed to evaluate the performance of a partial play.
#[derive(Copy, Clone, Debug)]
pub struct PerformanceInput<'a> {
    /// Stars up to the last judged object.
    pub snapshot: &'a SkillSnapshot,
    /// Map statistics up to the last judged object.
    pub map: &'a PrefixAggregate,
    /// The player's max combo so far.
    pub max_combo: u32,
    pub hits: &'a HitCounts,
    pub difficulty: &'a Difficulty,
    /// Whether the lazer variant of the calculation is used.
    pub lazer: bool,
}

/// Star rating and performance calculation.
///
/// The ruleset calls [`compute`] once per distinct set of difficulty
/// adjusting mods while it's being built and afterwards only indexes into
/// the returned table. [`performance`] is called after every counting
/// judgement and should therefore be cheap.
///
/// [`compute`]: SkillEstimator::compute
/// [`performance`]: SkillEstimator::performance
pub trait SkillEstimator {
    /// Compute one [`SkillSnapshot`] per target where the snapshot at index
    /// `i` describes the map up to and including target `i`.
    fn compute(
        &self,
        targets: &[TargetInfo],
        difficulty: &Difficulty,
        lazer: bool,
    ) -> Result<Vec<SkillSnapshot>, EstimatorError>;

    fn performance(&self, input: PerformanceInput<'_>) -> PerformanceResult;
}
