use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    health::{HealthModel, MAX_HP},
    model::{
        difficulty::{Difficulty, HitWindows},
        grade::Grade,
        target::{PendingJudgement, PlayerId, Target, TargetInfo},
    },
    score::{HitCounts, PrefixAggregate, ScoreProcessor, ScoreState, ScoreVariant},
    skill::{PerformanceResult, SkillCache, SkillEstimator},
};

pub use self::{
    builder::{PlayerSetup, RulesetBuilder},
    events::HitEvent,
    player::{Buttons, CursorKind, CursorState, PlayerContext},
    summary::PlayerResults,
};

use self::{events::Listeners, schedule::Schedule};

mod builder;
mod click;
mod events;
mod fail;
mod frame;
mod judge;
mod player;
mod schedule;
mod summary;

/// Per-player state owned by the ruleset.
pub(crate) struct PlayerSlot {
    pub(crate) ctx: PlayerContext,
    pub(crate) state: ScoreState,
    pub(crate) processor: ScoreVariant,
    pub(crate) health: Box<dyn HealthModel>,
    pub(crate) windows: HitWindows,
}

impl PlayerSlot {
    pub(crate) fn mods(&self) -> u32 {
        self.ctx.difficulty().get_mods()
    }
}

/// Judgement and scoring engine for osu!standard.
///
/// The ruleset owns the targets and one score per player. Each frame the
/// caller runs, for every player, [`update_click_for`], [`update_normal_for`]
/// and [`update_post_for`] and afterwards [`update`] once. [`frame`] does
/// all of that in one call.
///
/// Use [`RulesetBuilder`] to create a ruleset.
///
/// [`update_click_for`]: OsuRuleset::update_click_for
/// [`update_normal_for`]: OsuRuleset::update_normal_for
/// [`update_post_for`]: OsuRuleset::update_post_for
/// [`update`]: OsuRuleset::update
/// [`frame`]: OsuRuleset::frame
pub struct OsuRuleset {
    pub(crate) targets: Box<[Box<dyn Target>]>,
    pub(crate) infos: Box<[TargetInfo]>,
    pub(crate) aggregates: Box<[PrefixAggregate]>,
    pub(crate) schedule: Schedule,
    pub(crate) players: Box<[PlayerSlot]>,
    pub(crate) estimator: Box<dyn SkillEstimator>,
    pub(crate) skill: SkillCache,
    pub(crate) lazer: bool,
    pub(crate) pending: Vec<PendingJudgement>,
    pub(crate) listeners: Listeners,
    pub(crate) ended: bool,
}

impl OsuRuleset {
    /// Create a [`RulesetBuilder`].
    pub fn builder() -> RulesetBuilder {
        RulesetBuilder::new()
    }

    /// Register the listener that is notified about every judgement.
    ///
    /// Replaces any previous hit listener.
    pub fn set_hit_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&HitEvent) + 'static,
    {
        self.listeners.hit = Some(Box::new(listener));
    }

    /// Register the listener that is notified when a target is retired. It
    /// receives the current time and the target's index.
    pub fn set_end_listener<F>(&mut self, listener: F)
    where
        F: FnMut(f64, usize) + 'static,
    {
        self.listeners.end = Some(Box::new(listener));
    }

    /// Register the listener that is notified when a player fails for good.
    pub fn set_fail_listener<F>(&mut self, listener: F)
    where
        F: FnMut(PlayerId) + 'static,
    {
        self.listeners.fail = Some(Box::new(listener));
    }

    /// Ids of all players in the order they were added.
    pub fn players(&self) -> impl ExactSizeIterator<Item = PlayerId> {
        (0..self.players.len()).map(PlayerId)
    }

    /// The player's input state.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this ruleset.
    pub fn player(&self, player: PlayerId) -> &PlayerContext {
        &self.slot(player).ctx
    }

    /// The player's difficulty settings, including forced mods.
    pub fn difficulty(&self, player: PlayerId) -> &Difficulty {
        self.slot(player).ctx.difficulty()
    }

    /// The player's full score state.
    pub fn score_state(&self, player: PlayerId) -> &ScoreState {
        &self.slot(player).state
    }

    /// Accuracy, max combo, score, and grade of the player.
    pub fn results(&self, player: PlayerId) -> PlayerResults {
        let slot = self.slot(player);

        PlayerResults {
            accuracy: slot.state.accuracy,
            max_combo: slot.state.max_combo,
            score: slot.processor.score(),
            grade: slot.state.grade,
        }
    }

    /// The player's judgement counts including geki and katu totals.
    pub fn hits(&self, player: PlayerId) -> HitCounts {
        self.slot(player).state.hits
    }

    pub fn score(&self, player: PlayerId) -> u64 {
        self.slot(player).processor.score()
    }

    /// The player's current combo.
    pub fn combo(&self, player: PlayerId) -> u32 {
        self.slot(player).processor.combo()
    }

    pub fn grade(&self, player: PlayerId) -> Grade {
        self.slot(player).state.grade
    }

    /// The player's health as fraction between `0.0` and `1.0`.
    pub fn hp(&self, player: PlayerId) -> f64 {
        self.slot(player).health.health() / MAX_HP
    }

    /// The player's live performance.
    pub fn pp(&self, player: PlayerId) -> PerformanceResult {
        self.slot(player).state.performance
    }

    pub fn is_failed(&self, player: PlayerId) -> bool {
        self.slot(player).state.failed
    }

    /// Whether the player's max combo equals the max combo of the map up to
    /// the last judged object.
    ///
    /// This is a running check. It matches the map's total max combo only
    /// once every target has been judged. Always `false` if nothing has been
    /// judged yet.
    pub fn is_perfect(&self, player: PlayerId) -> bool {
        let state = &self.slot(player).state;

        match state.num_objects.checked_sub(1) {
            Some(idx) => state.max_combo == self.aggregates[idx as usize].max_combo,
            None => false,
        }
    }

    /// Indices of the targets that are currently eligible for interaction,
    /// in ascending order.
    pub fn active_targets(&self) -> &[usize] {
        self.schedule.active()
    }

    /// The target at the given index.
    pub fn target(&self, index: usize) -> Option<&dyn Target> {
        self.targets.get(index).map(|target| &**target)
    }

    /// Static information of all targets.
    pub fn target_infos(&self) -> &[TargetInfo] {
        &self.infos
    }

    /// Cumulative map statistics per target.
    pub fn aggregates(&self) -> &[PrefixAggregate] {
        &self.aggregates
    }

    /// Whether every target has been activated and retired.
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    pub(crate) fn slot(&self, player: PlayerId) -> &PlayerSlot {
        &self.players[player.0]
    }
}

impl Debug for OsuRuleset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OsuRuleset")
            .field("targets", &self.targets.len())
            .field("players", &self.players.len())
            .field("schedule", &self.schedule)
            .field("lazer", &self.lazer)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}
