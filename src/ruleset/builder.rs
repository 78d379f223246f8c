use tracing::{debug, info};

use crate::{
    error::RulesetError,
    health::{HealthFactory, HealthInit, HealthModel},
    model::{
        difficulty::Difficulty,
        target::{PlayerId, Target, TargetInfo},
    },
    score::{PrefixAggregate, ScoreState, ScoreVariant},
    skill::{SkillCache, SkillEstimator},
    util::mods::{Mods, V2},
};

use super::{
    events::Listeners,
    player::{CursorKind, PlayerContext},
    schedule::Schedule,
    OsuRuleset, PlayerSlot,
};

/// Settings of a single player.
///
/// # Example
///
/// ```
/// use rosu_ruleset::{CursorKind, PlayerSetup};
///
/// let setup = PlayerSetup::new("cookiezi")
///     .mods(8 + 16) // HDHR
///     .kind(CursorKind::Replay);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct PlayerSetup {
    name: String,
    mods: u32,
    kind: CursorKind,
    double_click: bool,
    old_spinner_scoring: bool,
}

impl PlayerSetup {
    /// A [`CursorKind::Human`] player without mods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mods: 0,
            kind: CursorKind::Human,
            double_click: false,
            old_spinner_scoring: false,
        }
    }

    /// Specify mods through their bit values.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    pub fn mods(mut self, mods: u32) -> Self {
        self.mods = mods;

        self
    }

    pub fn kind(mut self, kind: CursorKind) -> Self {
        self.kind = kind;

        self
    }

    /// Whether a single press of both buttons may judge two targets.
    pub fn double_click(mut self, double_click: bool) -> Self {
        self.double_click = double_click;

        self
    }

    /// Whether spinners use the older scoring and health rules.
    pub fn old_spinner_scoring(mut self, old_spinner_scoring: bool) -> Self {
        self.old_spinner_scoring = old_spinner_scoring;

        self
    }
}

/// Builder for an [`OsuRuleset`].
///
/// Requires at least one player, a [`SkillEstimator`], and a health model
/// factory.
///
/// # Example
///
/// ```no_run
/// # use rosu_ruleset::{HealthModel, Judgement, PerformanceInput, PerformanceResult,
/// #     SkillEstimator, SkillSnapshot, TargetInfo, EstimatorError, Target};
/// # struct Estimator;
/// # impl SkillEstimator for Estimator {
/// #     fn compute(&self, t: &[TargetInfo], _: &rosu_ruleset::Difficulty, _: bool)
/// #         -> Result<Vec<SkillSnapshot>, EstimatorError> { Ok(vec![SkillSnapshot::default(); t.len()]) }
/// #     fn performance(&self, _: PerformanceInput<'_>) -> PerformanceResult { PerformanceResult::default() }
/// # }
/// # struct Health;
/// # impl HealthModel for Health {
/// #     fn update(&mut self, _: f64) -> bool { false }
/// #     fn add_result(&mut self, _: Judgement) -> bool { false }
/// #     fn increase(&mut self, _: f64, _: bool) -> bool { false }
/// #     fn health(&self) -> f64 { 200.0 }
/// # }
/// # let targets: Vec<Box<dyn Target>> = Vec::new();
/// use rosu_ruleset::{Difficulty, OsuRuleset, PlayerSetup};
///
/// let ruleset = OsuRuleset::builder()
///     .difficulty(Difficulty::new().ar(9.0).od(8.0))
///     .player(PlayerSetup::new("player").mods(64))
///     .estimator(Estimator)
///     .health(|_| Box::new(Health))
///     .build(targets)?;
/// # Ok::<_, rosu_ruleset::RulesetError>(())
/// ```
#[must_use]
pub struct RulesetBuilder {
    difficulty: Difficulty,
    players: Vec<PlayerSetup>,
    lazer: bool,
    force_score_v2: bool,
    estimator: Option<Box<dyn SkillEstimator>>,
    health: Option<Box<HealthFactory>>,
}

impl RulesetBuilder {
    /// Create a new builder with default difficulty and no players.
    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::new(),
            players: Vec::new(),
            lazer: false,
            force_score_v2: false,
            estimator: None,
            health: None,
        }
    }

    /// The map's base difficulty. Its mods are replaced by each player's
    /// mods.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;

        self
    }

    /// Add a player. Ids are assigned in the order of this method's calls.
    pub fn player(mut self, player: PlayerSetup) -> Self {
        self.players.push(player);

        self
    }

    /// Whether the lazer variant of the star and performance calculation is
    /// used.
    pub fn lazer(mut self, lazer: bool) -> Self {
        self.lazer = lazer;

        self
    }

    /// Enable ScoreV2 for every player, e.g. because the map demands it.
    pub fn force_score_v2(mut self, force_score_v2: bool) -> Self {
        self.force_score_v2 = force_score_v2;

        self
    }

    pub fn estimator(mut self, estimator: impl SkillEstimator + 'static) -> Self {
        self.estimator = Some(Box::new(estimator));

        self
    }

    /// Specify how each player's [`HealthModel`] is created.
    pub fn health<F>(mut self, factory: F) -> Self
    where
        F: Fn(HealthInit<'_>) -> Box<dyn HealthModel> + 'static,
    {
        self.health = Some(Box::new(factory));

        self
    }

    /// Validate the targets and create the ruleset.
    ///
    /// Targets must be ordered by start time. Star ratings are calculated
    /// once per distinct combination of difficulty adjusting mods.
    pub fn build(self, targets: Vec<Box<dyn Target>>) -> Result<OsuRuleset, RulesetError> {
        let Self {
            difficulty,
            players: setups,
            lazer,
            force_score_v2,
            estimator,
            health,
        } = self;

        if setups.is_empty() {
            return Err(RulesetError::NoPlayers);
        }

        if targets.is_empty() {
            return Err(RulesetError::EmptySequence);
        }

        let estimator = estimator.ok_or(RulesetError::MissingEstimator)?;
        let health = health.ok_or(RulesetError::MissingHealth)?;

        let infos: Box<[TargetInfo]> = targets
            .iter()
            .enumerate()
            .map(|(i, target)| TargetInfo::new(i, target.as_ref()))
            .collect();

        validate(&infos)?;

        let aggregates = PrefixAggregate::table(&infos);
        let mut skill = SkillCache::default();

        let players = setups
            .into_iter()
            .enumerate()
            .map(|(i, setup)| -> Result<PlayerSlot, RulesetError> {
                let mods = if force_score_v2 {
                    setup.mods | V2
                } else {
                    setup.mods
                };

                let difficulty = difficulty.clone().mods(mods);
                skill.resolve(estimator.as_ref(), &infos, &difficulty, lazer)?;

                let init = HealthInit {
                    targets: &infos,
                    difficulty: &difficulty,
                    new_spinner_scoring: !setup.old_spinner_scoring,
                };

                let model = health(init);
                debug!(player = %setup.name, health = model.health(), "Initialized health");

                Ok(PlayerSlot {
                    state: ScoreState::new(mods.recoveries()),
                    processor: ScoreVariant::new(&infos, &aggregates, &difficulty),
                    health: model,
                    windows: difficulty.hit_windows(),
                    ctx: PlayerContext::new(
                        PlayerId(i),
                        setup.name,
                        setup.kind,
                        difficulty,
                        setup.double_click,
                    ),
                })
            })
            .collect::<Result<Box<[_]>, _>>()?;

        let mut targets = targets.into_boxed_slice();

        for target in targets.iter_mut() {
            target.init(players.len());
        }

        info!(
            targets = targets.len(),
            players = players.len(),
            skill_tables = skill.len(),
            "Created ruleset"
        );

        Ok(OsuRuleset {
            schedule: Schedule::new(&infos),
            targets,
            infos,
            aggregates,
            players,
            estimator,
            skill,
            lazer,
            pending: Vec::new(),
            listeners: Listeners::default(),
            ended: false,
        })
    }
}

impl Default for RulesetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check times of every target and their order.
fn validate(infos: &[TargetInfo]) -> Result<(), RulesetError> {
    let mut prev_start = f64::NEG_INFINITY;

    for info in infos {
        let index = info.index;

        let finite = info.activation_time.is_finite()
            && info.start_time.is_finite()
            && info.end_time.is_finite();

        if !finite || info.end_time < info.start_time || info.activation_time > info.start_time {
            return Err(RulesetError::InvalidTiming { index });
        }

        if info.start_time < prev_start {
            return Err(RulesetError::UnorderedSequence { index });
        }

        prev_start = info.start_time;
    }

    Ok(())
}
