use std::{cell::RefCell, rc::Rc};

use rosu_ruleset::{
    ClickAction, ComboResult, HitResult, PlayerId, Pos, Target, TargetContext, TargetKind,
};

use super::PREEMPT;

/// Click resolutions a target received while the player had an unconsumed
/// click.
pub type ClickLog = Rc<RefCell<Vec<(usize, PlayerId, ClickAction)>>>;

fn has_click(ctx: &TargetContext<'_>) -> bool {
    let player = ctx.player();

    (player.left_cond || player.right_cond) && !player.already_stolen
}

fn consume_click(ctx: &mut TargetContext<'_>) {
    let player = ctx.player_mut();

    if player.left_cond {
        player.left_cond = false;
    } else {
        player.right_cond = false;
    }

    player.already_stolen = true;
}

/// Resolve a click on a target's head.
///
/// Late clicks outside of every window are left for the automatic miss.
fn judge_head(ctx: &TargetContext<'_>, offset: f64) -> Option<HitResult> {
    match ctx.hit_windows().judge(offset) {
        Some(result) => Some(result),
        None if offset < 0.0 => Some(HitResult::Miss),
        None => None,
    }
}

pub struct TestCircle {
    start: f64,
    new_combo: bool,
    stack_index: i32,
    positional_misses: bool,
    judged: Vec<bool>,
    log: Option<ClickLog>,
}

impl TestCircle {
    pub fn new(start: f64) -> Self {
        Self {
            start,
            new_combo: false,
            stack_index: 0,
            positional_misses: false,
            judged: Vec::new(),
            log: None,
        }
    }

    pub fn new_combo(mut self) -> Self {
        self.new_combo = true;

        self
    }

    pub fn stacked(mut self, stack_index: i32) -> Self {
        self.stack_index = stack_index;

        self
    }

    /// Report a positional miss when a click is rejected.
    pub fn positional_misses(mut self) -> Self {
        self.positional_misses = true;

        self
    }

    pub fn log(mut self, log: &ClickLog) -> Self {
        self.log = Some(Rc::clone(log));

        self
    }

    pub fn boxed(self) -> Box<dyn Target> {
        Box::new(self)
    }
}

impl Target for TestCircle {
    fn kind(&self) -> TargetKind {
        TargetKind::Circle
    }

    fn activation_time(&self) -> f64 {
        self.start - PREEMPT
    }

    fn start_time(&self) -> f64 {
        self.start
    }

    fn end_time(&self) -> f64 {
        self.start
    }

    fn position(&self) -> Pos {
        Pos::new(256.0, 192.0)
    }

    fn new_combo(&self) -> bool {
        self.new_combo
    }

    fn stack_index(&self, _: u32) -> i32 {
        self.stack_index
    }

    fn init(&mut self, players: usize) {
        self.judged = vec![false; players];
    }

    fn advance(&mut self, ctx: &mut TargetContext<'_>, time: f64, _: bool) -> bool {
        let player = ctx.player_id().index();

        if !self.judged[player] && time > self.start + ctx.hit_windows().meh {
            self.judged[player] = true;
            ctx.send_result(time, self.position(), HitResult::Miss, ComboResult::Reset);
        }

        !self.judged[player]
    }

    fn advance_on_click(&mut self, ctx: &mut TargetContext<'_>, time: f64) -> bool {
        let player = ctx.player_id().index();

        if self.judged[player] || !has_click(ctx) {
            return false;
        }

        let Some(action) = ctx.click_action() else {
            return false;
        };

        if let Some(ref log) = self.log {
            log.borrow_mut().push((ctx.ordinal(), ctx.player_id(), action));
        }

        match action {
            ClickAction::Click => {
                let Some(result) = judge_head(ctx, time - self.start) else {
                    return false;
                };

                let combo = if result == HitResult::Miss {
                    ComboResult::Reset
                } else {
                    ComboResult::Increase
                };

                consume_click(ctx);
                self.judged[player] = true;
                ctx.send_result(time, self.position(), result, combo);

                true
            }
            ClickAction::Shake if self.positional_misses => {
                ctx.send_result(
                    time,
                    self.position(),
                    HitResult::PositionalMiss,
                    ComboResult::Hold,
                );

                false
            }
            ClickAction::Shake | ClickAction::Ignored => false,
        }
    }

    fn advance_post(&mut self, ctx: &mut TargetContext<'_>, _: f64) -> bool {
        !self.judged[ctx.player_id().index()]
    }

    fn finalize(&mut self, _: f64) -> bool {
        self.judged.iter().all(|&judged| judged)
    }

    fn is_judged(&self, player: PlayerId) -> bool {
        self.judged[player.index()]
    }
}

#[derive(Copy, Clone, Default)]
struct SliderProgress {
    head: Option<bool>,
    done: bool,
}

/// A slider with a head and a tail. The tail is held automatically and the
/// final judgement depends on the head.
pub struct TestSlider {
    start: f64,
    end: f64,
    new_combo: bool,
    progress: Vec<SliderProgress>,
    log: Option<ClickLog>,
}

impl TestSlider {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            new_combo: false,
            progress: Vec::new(),
            log: None,
        }
    }

    pub fn new_combo(mut self) -> Self {
        self.new_combo = true;

        self
    }

    pub fn log(mut self, log: &ClickLog) -> Self {
        self.log = Some(Rc::clone(log));

        self
    }

    pub fn boxed(self) -> Box<dyn Target> {
        Box::new(self)
    }
}

impl Target for TestSlider {
    fn kind(&self) -> TargetKind {
        TargetKind::Slider
    }

    fn activation_time(&self) -> f64 {
        self.start - PREEMPT
    }

    fn start_time(&self) -> f64 {
        self.start
    }

    fn end_time(&self) -> f64 {
        self.end
    }

    fn position(&self) -> Pos {
        Pos::new(100.0, 100.0)
    }

    fn new_combo(&self) -> bool {
        self.new_combo
    }

    fn score_points(&self) -> usize {
        1
    }

    fn init(&mut self, players: usize) {
        self.progress = vec![SliderProgress::default(); players];
    }

    fn advance(&mut self, ctx: &mut TargetContext<'_>, time: f64, _: bool) -> bool {
        let progress = &mut self.progress[ctx.player_id().index()];

        if progress.head.is_none() && time > self.start + ctx.hit_windows().meh {
            progress.head = Some(false);

            let pos = Pos::new(100.0, 100.0);
            ctx.send_result(time, pos, HitResult::SliderMiss, ComboResult::Reset);
        }

        !progress.done
    }

    fn advance_on_click(&mut self, ctx: &mut TargetContext<'_>, time: f64) -> bool {
        let player = ctx.player_id().index();

        if self.progress[player].head.is_some() || !has_click(ctx) {
            return false;
        }

        let Some(action) = ctx.click_action() else {
            return false;
        };

        if let Some(ref log) = self.log {
            log.borrow_mut().push((ctx.ordinal(), ctx.player_id(), action));
        }

        if action != ClickAction::Click {
            return false;
        }

        let hit = match judge_head(ctx, time - self.start) {
            Some(HitResult::Miss) => false,
            Some(_) => true,
            None => return false,
        };

        consume_click(ctx);
        self.progress[player].head = Some(hit);

        let (result, combo) = if hit {
            (HitResult::SliderStart, ComboResult::Increase)
        } else {
            (HitResult::SliderMiss, ComboResult::Reset)
        };

        ctx.send_result(time, self.position(), result, combo);

        true
    }

    fn advance_post(&mut self, ctx: &mut TargetContext<'_>, time: f64) -> bool {
        let progress = &mut self.progress[ctx.player_id().index()];

        if progress.done || time < self.end {
            return !progress.done;
        }

        // the head can't be pending anymore at this point
        let hit = progress.head.unwrap_or(false);
        progress.head = Some(hit);
        progress.done = true;

        let pos = Pos::new(100.0, 100.0);
        ctx.send_result(time, pos, HitResult::SliderEnd, ComboResult::Increase);

        let result = if hit { HitResult::Hit300 } else { HitResult::Hit100 };
        ctx.send_result(time, pos, result, ComboResult::Hold);

        false
    }

    fn finalize(&mut self, _: f64) -> bool {
        self.progress.iter().all(|progress| progress.done)
    }

    fn is_judged(&self, player: PlayerId) -> bool {
        self.progress[player.index()].head.is_some()
    }
}

/// A circle that ignores every click and judges itself as a 300 once
/// `judge_at` is reached.
pub struct SelfJudging {
    start: f64,
    judge_at: f64,
    new_combo: bool,
    judged: Vec<bool>,
}

impl SelfJudging {
    pub fn new(start: f64, judge_at: f64) -> Self {
        Self {
            start,
            judge_at,
            new_combo: false,
            judged: Vec::new(),
        }
    }

    pub fn new_combo(mut self) -> Self {
        self.new_combo = true;

        self
    }

    pub fn boxed(self) -> Box<dyn Target> {
        Box::new(self)
    }
}

impl Target for SelfJudging {
    fn kind(&self) -> TargetKind {
        TargetKind::Circle
    }

    fn activation_time(&self) -> f64 {
        self.start - PREEMPT
    }

    fn start_time(&self) -> f64 {
        self.start
    }

    fn end_time(&self) -> f64 {
        self.start
    }

    fn position(&self) -> Pos {
        Pos::new(256.0, 192.0)
    }

    fn new_combo(&self) -> bool {
        self.new_combo
    }

    fn init(&mut self, players: usize) {
        self.judged = vec![false; players];
    }

    fn advance(&mut self, ctx: &mut TargetContext<'_>, time: f64, _: bool) -> bool {
        let player = ctx.player_id().index();

        if !self.judged[player] && time >= self.judge_at {
            self.judged[player] = true;
            ctx.send_result(time, self.position(), HitResult::Hit300, ComboResult::Increase);
        }

        !self.judged[player]
    }

    fn advance_on_click(&mut self, _: &mut TargetContext<'_>, _: f64) -> bool {
        false
    }

    fn advance_post(&mut self, ctx: &mut TargetContext<'_>, _: f64) -> bool {
        !self.judged[ctx.player_id().index()]
    }

    fn finalize(&mut self, _: f64) -> bool {
        self.judged.iter().all(|&judged| judged)
    }

    fn is_judged(&self, player: PlayerId) -> bool {
        self.judged[player.index()]
    }
}
