use rosu_ruleset::{
    Difficulty, EstimatorError, HealthModel, HitResult, Judgement, PerformanceInput,
    PerformanceResult, SkillEstimator, SkillSnapshot, TargetInfo, MAX_HP,
};

/// Snapshot `i` has a total of `i + 1` stars. Performance is ten times the
/// stars plus the max combo.
#[derive(Default)]
pub struct TestEstimator {
    /// Return one snapshot less than required.
    pub short: bool,
    /// Mods that can't be handled.
    pub unsupported: u32,
}

impl SkillEstimator for TestEstimator {
    fn compute(
        &self,
        targets: &[TargetInfo],
        difficulty: &Difficulty,
        _: bool,
    ) -> Result<Vec<SkillSnapshot>, EstimatorError> {
        if difficulty.get_mods() & self.unsupported > 0 {
            return Err(EstimatorError::UnsupportedMods(difficulty.get_mods()));
        }

        let n = targets.len() - usize::from(self.short);

        let snapshots = (1..=n)
            .map(|i| SkillSnapshot {
                aim: i as f64 / 2.0,
                speed: i as f64 / 2.0,
                flashlight: 0.0,
                total: i as f64,
            })
            .collect();

        Ok(snapshots)
    }

    fn performance(&self, input: PerformanceInput<'_>) -> PerformanceResult {
        PerformanceResult {
            total: input.snapshot.total * 10.0 + f64::from(input.max_combo),
            ..PerformanceResult::default()
        }
    }
}

/// Full health at the start, misses drain a fixed amount, and nothing drains
/// passively.
pub struct TestHealth {
    health: f64,
    miss_drain: f64,
}

impl TestHealth {
    pub fn new(miss_drain: f64) -> Self {
        Self {
            health: MAX_HP,
            miss_drain,
        }
    }
}

impl HealthModel for TestHealth {
    fn update(&mut self, _: f64) -> bool {
        false
    }

    fn add_result(&mut self, judgement: Judgement) -> bool {
        match judgement.result {
            HitResult::Miss => self.increase(-self.miss_drain, true),
            HitResult::Hit300 => self.increase(10.0, true),
            _ => false,
        }
    }

    fn increase(&mut self, amount: f64, allow_death: bool) -> bool {
        let floor = if allow_death { 0.0 } else { 1.0 };
        self.health = (self.health + amount).clamp(floor, MAX_HP);

        allow_death && self.health <= 0.0
    }

    fn health(&self) -> f64 {
        self.health
    }
}
