use crate::model::{difficulty::Difficulty, hit_result::Judgement, target::TargetInfo};

/// Upper bound of a [`HealthModel`]'s health value.
pub const MAX_HP: f64 = 200.0;

/// Health added back when a recovery is consumed.
pub(crate) const RECOVERY_HP: f64 = 160.0;

/// Drain and regeneration of a player's health.
///
/// Implementors own the arithmetic. Every method that may lower health
/// returns the fail signal, i.e. `true` if health reached zero through this
/// call. The ruleset decides whether the signal actually fails the player.
pub trait HealthModel {
    /// Apply passive drain up to `time`.
    fn update(&mut self, time: f64) -> bool;

    /// Apply the health change of a judgement.
    fn add_result(&mut self, judgement: Judgement) -> bool;

    /// Add `amount` of health. A negative amount may only reach zero if
    /// `allow_death` is `true`.
    fn increase(&mut self, amount: f64, allow_death: bool) -> bool;

    /// Current health between `0.0` and [`MAX_HP`].
    fn health(&self) -> f64;
}

/// Input for creating a player's [`HealthModel`].
#[derive(Copy, Clone, Debug)]
pub struct HealthInit<'a> {
    pub targets: &'a [TargetInfo],
    pub difficulty: &'a Difficulty,
    /// Whether spinners use the newer scoring and health rules.
    pub new_spinner_scoring: bool,
}

/// Creates one [`HealthModel`] per player.
pub type HealthFactory = dyn Fn(HealthInit<'_>) -> Box<dyn HealthModel>;
