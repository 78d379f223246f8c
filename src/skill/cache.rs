use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::RulesetError,
    model::{difficulty::Difficulty, target::TargetInfo},
    util::{byte_hasher::ModsHasher, mods::Mods},
};

use super::{SkillEstimator, SkillSnapshot};

/// Skill tables per normalized mod combination.
///
/// Owned by a single ruleset and filled while it's being built.
#[derive(Clone, Debug, Default)]
pub(crate) struct SkillCache {
    tables: HashMap<u32, Box<[SkillSnapshot]>, ModsHasher>,
}

impl SkillCache {
    /// Make sure a table for the difficulty's mods is available.
    ///
    /// Players whose mods only differ outside of the difficulty adjusting
    /// ones share a table.
    pub(crate) fn resolve(
        &mut self,
        estimator: &dyn SkillEstimator,
        targets: &[TargetInfo],
        difficulty: &Difficulty,
        lazer: bool,
    ) -> Result<(), RulesetError> {
        let mods = difficulty.get_mods();
        let key = mods.difficulty_key();

        if self.tables.contains_key(&key) {
            return Ok(());
        }

        let table = estimator
            .compute(targets, difficulty, lazer)
            .map_err(|source| RulesetError::Estimator { mods, source })?;

        if table.len() != targets.len() {
            return Err(RulesetError::EstimatorLength {
                mods,
                expected: targets.len(),
                actual: table.len(),
            });
        }

        if let Some(last) = table.last() {
            debug!(
                mods = key,
                aim = last.aim,
                speed = last.speed,
                flashlight = last.flashlight,
                total = last.total,
                "Calculated stars"
            );
        }

        self.tables.insert(key, table.into_boxed_slice());

        Ok(())
    }

    /// The table for the given mods.
    ///
    /// # Panics
    ///
    /// Panics if the table was never resolved.
    pub(crate) fn table(&self, mods: u32) -> &[SkillSnapshot] {
        match self.tables.get(&mods.difficulty_key()) {
            Some(table) => table,
            None => panic!("no skill table for mods {mods}"),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tables.len()
    }
}
