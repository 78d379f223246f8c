use rosu_map::util::Pos;

use crate::{
    model::{
        difficulty::HitWindows,
        hit_result::{ComboResult, HitResult},
    },
    ruleset::PlayerContext,
};

/// Identifies one of the cursors competing in a ruleset.
///
/// Ids are handed out in the order players were added to the
/// [`RulesetBuilder`](crate::RulesetBuilder), starting at `0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub(crate) usize);

impl PlayerId {
    /// The zero-based position of the player.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The variant of a [`Target`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Circle,
    Slider,
    Spinner,
}

/// What a click on a target resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// The click is swallowed without feedback.
    Ignored,
    /// The click is rejected and the target should shake.
    Shake,
    /// The click is accepted and may be judged.
    Click,
}

/// A timed interactive element.
///
/// Implementors own their geometry and their per-player progress. The ruleset
/// only drives them through the lifecycle methods below and never branches on
/// the concrete type, except through [`Target::kind`].
///
/// Judgements are reported through [`TargetContext::send_result`].
pub trait Target {
    fn kind(&self) -> TargetKind;

    /// Time at which the target becomes eligible for interaction, usually
    /// when it starts fading in. Must not be after [`Target::start_time`].
    fn activation_time(&self) -> f64;

    fn start_time(&self) -> f64;

    fn end_time(&self) -> f64;

    /// Stacked start position.
    fn position(&self) -> Pos;

    /// Whether the target starts a new combo.
    fn new_combo(&self) -> bool;

    /// Position within a vertical stack, `0` for the bottom-most or unstacked
    /// target.
    fn stack_index(&self, mods: u32) -> i32 {
        let _ = mods;

        0
    }

    /// Amount of nested combo-giving points besides the head, e.g. a
    /// slider's ticks, repeats, and tail.
    fn score_points(&self) -> usize {
        0
    }

    /// Prepare per-player state for `players` many players.
    fn init(&mut self, players: usize);

    /// Advance motion, e.g. slider ticks, spinner progress, or automatic
    /// misses, regardless of button state.
    ///
    /// Returns whether the target is still active for this player.
    fn advance(
        &mut self,
        ctx: &mut TargetContext<'_>,
        time: f64,
        process_slider_ends_ahead: bool,
    ) -> bool;

    /// Offer the player's click to this target.
    ///
    /// Returns whether the click was consumed.
    fn advance_on_click(&mut self, ctx: &mut TargetContext<'_>, time: f64) -> bool;

    /// Finish per-player bookkeeping such as slider end judgements.
    ///
    /// Returns whether the target is still active for this player.
    fn advance_post(&mut self, ctx: &mut TargetContext<'_>, time: f64) -> bool;

    /// Called once per frame after every player has been processed.
    ///
    /// Returns `true` once the target is done for everyone and can be
    /// retired.
    fn finalize(&mut self, time: f64) -> bool;

    /// Whether the target was already judged for the player.
    fn is_judged(&self, player: PlayerId) -> bool;
}

/// Static information about a target, extracted once when the ruleset is
/// built.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetInfo {
    /// Position in the target sequence.
    pub index: usize,
    pub kind: TargetKind,
    pub activation_time: f64,
    pub start_time: f64,
    pub end_time: f64,
    pub position: Pos,
    pub new_combo: bool,
    pub score_points: usize,
}

impl TargetInfo {
    pub(crate) fn new(index: usize, target: &dyn Target) -> Self {
        Self {
            index,
            kind: target.kind(),
            activation_time: target.activation_time(),
            start_time: target.start_time(),
            end_time: target.end_time(),
            position: target.position(),
            new_combo: target.new_combo(),
            score_points: target.score_points(),
        }
    }

    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, TargetKind::Circle)
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, TargetKind::Slider)
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, TargetKind::Spinner)
    }
}

/// A judgement reported by a target that has yet to be aggregated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct PendingJudgement {
    pub time: f64,
    pub pos: Pos,
    pub result: HitResult,
    pub combo: ComboResult,
}

/// Everything a [`Target`] may access while it's being advanced for one
/// player.
pub struct TargetContext<'a> {
    ordinal: usize,
    windows: HitWindows,
    click: Option<ClickAction>,
    player: &'a mut PlayerContext,
    pending: &'a mut Vec<PendingJudgement>,
}

impl<'a> TargetContext<'a> {
    pub(crate) fn new(
        ordinal: usize,
        windows: HitWindows,
        click: Option<ClickAction>,
        player: &'a mut PlayerContext,
        pending: &'a mut Vec<PendingJudgement>,
    ) -> Self {
        Self {
            ordinal,
            windows,
            click,
            player,
            pending,
        }
    }

    /// The target's position in the target sequence.
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The player that is currently being processed.
    pub fn player_id(&self) -> PlayerId {
        self.player.id()
    }

    /// The player's mods.
    pub fn mods(&self) -> u32 {
        self.player.difficulty().get_mods()
    }

    /// Hit windows with respect to the player's mods.
    pub const fn hit_windows(&self) -> HitWindows {
        self.windows
    }

    /// What a click on this target resolves to.
    ///
    /// Only available while the ruleset is processing clicks, `None`
    /// otherwise.
    pub const fn click_action(&self) -> Option<ClickAction> {
        self.click
    }

    /// The player's input state.
    pub fn player(&self) -> &PlayerContext {
        &*self.player
    }

    /// Mutable access to the player's input state, e.g. to consume a click
    /// edge or to mark the click as stolen.
    pub fn player_mut(&mut self) -> &mut PlayerContext {
        &mut *self.player
    }

    /// Report a judgement for this target.
    ///
    /// The ruleset processes reported judgements in order once the current
    /// target call returns.
    pub fn send_result(&mut self, time: f64, pos: Pos, result: HitResult, combo: ComboResult) {
        self.pending.push(PendingJudgement {
            time,
            pos,
            result,
            combo,
        });
    }
}
