use rosu_map::util::Pos;

use crate::{
    model::{
        hit_result::{ComboResult, Judgement},
        target::PlayerId,
    },
    skill::PerformanceResult,
};

/// A judgement as reported to the hit listener.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitEvent {
    pub player: PlayerId,
    pub time: f64,
    /// Index of the judged target.
    pub index: usize,
    pub position: Pos,
    pub judgement: Judgement,
    pub combo: ComboResult,
    /// The player's performance after the judgement.
    pub performance: PerformanceResult,
    /// The player's score after the judgement.
    pub score: u64,
}

pub(crate) type HitListener = dyn FnMut(&HitEvent);
pub(crate) type EndListener = dyn FnMut(f64, usize);
pub(crate) type FailListener = dyn FnMut(PlayerId);

/// Single-slot observers.
#[derive(Default)]
pub(crate) struct Listeners {
    pub(crate) hit: Option<Box<HitListener>>,
    pub(crate) end: Option<Box<EndListener>>,
    pub(crate) fail: Option<Box<FailListener>>,
}

impl Listeners {
    pub(crate) fn hit(&mut self, event: &HitEvent) {
        if let Some(ref mut listener) = self.hit {
            listener(event);
        }
    }

    pub(crate) fn end(&mut self, time: f64, index: usize) {
        if let Some(ref mut listener) = self.end {
            listener(time, index);
        }
    }

    pub(crate) fn fail(&mut self, player: PlayerId) {
        if let Some(ref mut listener) = self.fail {
            listener(player);
        }
    }
}
