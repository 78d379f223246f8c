// Not every test binary uses every helper
#![allow(unused)]

use std::{cell::RefCell, rc::Rc};

use rosu_ruleset::{
    CursorState, Difficulty, HitEvent, OsuRuleset, PlayerId, PlayerSetup, Pos, RulesetBuilder,
    Target,
};

pub use self::{doubles::*, mods::*, targets::*};

mod doubles;
mod targets;

/// Bit values for mods
mod mods {
    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const RX: u32 = 1 << 7;
    pub const FL: u32 = 1 << 10;
    pub const AP: u32 = 1 << 13;
    pub const V2: u32 = 1 << 29;
}

/// Time between fading in and the start time for AR 5.
pub const PREEMPT: f64 = 1200.0;

/// Length of a frame in the stepped drivers.
pub const STEP: u32 = 10;

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

/// A builder with the test estimator and a health model where a miss drains
/// `miss_drain` health.
pub fn builder(miss_drain: f64) -> RulesetBuilder {
    OsuRuleset::builder()
        .difficulty(Difficulty::new())
        .estimator(TestEstimator::default())
        .health(move |_| Box::new(TestHealth::new(miss_drain)))
}

/// A ruleset with a single [`NM`] player.
pub fn single(targets: Vec<Box<dyn Target>>) -> OsuRuleset {
    builder(0.0)
        .player(PlayerSetup::new("player"))
        .build(targets)
        .unwrap()
}

/// Everything the listeners reported.
#[derive(Clone, Default)]
pub struct Recorder {
    pub hits: Rc<RefCell<Vec<HitEvent>>>,
    pub ends: Rc<RefCell<Vec<(f64, usize)>>>,
    pub fails: Rc<RefCell<Vec<PlayerId>>>,
}

impl Recorder {
    pub fn attach(ruleset: &mut OsuRuleset) -> Self {
        let recorder = Self::default();

        let hits = Rc::clone(&recorder.hits);
        ruleset.set_hit_listener(move |event| hits.borrow_mut().push(*event));

        let ends = Rc::clone(&recorder.ends);
        ruleset.set_end_listener(move |time, index| ends.borrow_mut().push((time, index)));

        let fails = Rc::clone(&recorder.fails);
        ruleset.set_fail_listener(move |player| fails.borrow_mut().push(player));

        recorder
    }
}

pub fn cursor(pressed: bool) -> CursorState {
    CursorState::new(Pos::new(256.0, 192.0), pressed, false)
}

/// Run one frame where every player presses or releases the left button.
pub fn frame(ruleset: &mut OsuRuleset, time: f64, pressed: bool) {
    let cursors = vec![cursor(pressed); ruleset.players().len()];
    ruleset.frame(time, &cursors);
}

/// Step through time in [`STEP`] intervals from `from` to `until` where
/// player `i` presses at the times in `presses[i]` and releases otherwise.
pub fn run(ruleset: &mut OsuRuleset, presses: &[&[u32]], from: u32, until: u32) {
    for time in (from..=until).step_by(STEP as usize) {
        let cursors: Vec<_> = presses
            .iter()
            .map(|times| cursor(times.contains(&time)))
            .collect();

        ruleset.frame(f64::from(time), &cursors);
    }
}
