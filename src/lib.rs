//! Frame-by-frame judgement and scoring simulation for [osu!]standard.
//!
//! ## Description
//!
//! `rosu-ruleset` drives one or more cursors, be it live input, a replay, or
//! an autoplay, through a fixed sequence of hit objects and keeps track of
//! judgements, score, combo, accuracy, grade, health, and a live pp value
//! for every one of them.
//!
//! The geometry and motion of hit objects, the star and pp calculation, and
//! the health arithmetic are not part of this crate. They're plugged in
//! through the [`Target`], [`SkillEstimator`], and [`HealthModel`] traits.
//!
//! ## Usage
//!
//! ```no_run
//! # fn targets() -> Vec<Box<dyn rosu_ruleset::Target>> { Vec::new() }
//! # struct Estimator;
//! # impl rosu_ruleset::SkillEstimator for Estimator {
//! #     fn compute(&self, t: &[rosu_ruleset::TargetInfo], _: &rosu_ruleset::Difficulty, _: bool)
//! #         -> Result<Vec<rosu_ruleset::SkillSnapshot>, rosu_ruleset::EstimatorError> {
//! #         Ok(vec![Default::default(); t.len()])
//! #     }
//! #     fn performance(&self, _: rosu_ruleset::PerformanceInput<'_>) -> rosu_ruleset::PerformanceResult {
//! #         Default::default()
//! #     }
//! # }
//! # struct Health;
//! # impl rosu_ruleset::HealthModel for Health {
//! #     fn update(&mut self, _: f64) -> bool { false }
//! #     fn add_result(&mut self, _: rosu_ruleset::Judgement) -> bool { false }
//! #     fn increase(&mut self, _: f64, _: bool) -> bool { false }
//! #     fn health(&self) -> f64 { 200.0 }
//! # }
//! use rosu_ruleset::{CursorKind, CursorState, Difficulty, OsuRuleset, PlayerSetup, Pos};
//!
//! let mut ruleset = OsuRuleset::builder()
//!     .difficulty(Difficulty::new().ar(9.3).od(8.8).cs(4.0).hp(5.0))
//!     .player(PlayerSetup::new("replay").mods(8 + 16).kind(CursorKind::Replay))
//!     .estimator(Estimator)
//!     .health(|_| Box::new(Health))
//!     .build(targets())?;
//!
//! ruleset.set_hit_listener(|event| println!("{} at {}", event.judgement.result, event.time));
//!
//! let mut time = 0.0;
//!
//! while !ruleset.is_ended() {
//!     let cursor = CursorState::new(Pos::new(256.0, 192.0), false, false);
//!     ruleset.frame(time, &[cursor]);
//!     time += 1000.0 / 60.0;
//! }
//!
//! let player = ruleset.players().next().unwrap();
//! let results = ruleset.results(player);
//!
//! println!("{:.2}% {} {}pp", results.accuracy, results.grade, ruleset.pp(player).total);
//! # Ok::<_, rosu_ruleset::RulesetError>(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]: the created ruleset and the
//! final standings on `info`, star ratings and initial health on `debug`,
//! and every judgement of a single-player run on `trace`.
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    error::{EstimatorError, RulesetError},
    health::{HealthFactory, HealthInit, HealthModel, MAX_HP},
    model::{
        difficulty::{Difficulty, HitWindows},
        grade::Grade,
        hit_result::{ComboBonus, ComboResult, HitResult, Judgement},
        target::{ClickAction, PlayerId, Target, TargetContext, TargetInfo, TargetKind},
    },
    ruleset::{
        Buttons, CursorKind, CursorState, HitEvent, OsuRuleset, PlayerContext, PlayerResults,
        PlayerSetup, RulesetBuilder,
    },
    score::{HitCounts, PrefixAggregate, ScoreState},
    skill::{PerformanceInput, PerformanceResult, SkillEstimator, SkillSnapshot},
};

pub use rosu_map::util::Pos;

/// Types describing targets, judgements, and difficulty.
pub mod model;

/// The judgement and scoring engine.
pub mod ruleset;

/// Score state and map statistics.
pub mod score;

/// Star rating and performance interface.
pub mod skill;

/// Health interface.
pub mod health;

mod error;

mod util;
