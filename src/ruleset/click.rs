use crate::{
    model::target::{ClickAction, PlayerId},
    util::mods::Mods,
};

use super::OsuRuleset;

/// Maximum distance between a click and a target's start time.
const HITTABLE_RANGE: f64 = 400.0;

/// Reduction of [`HITTABLE_RANGE`] for Autopilot players.
const AUTOPILOT_REDUCTION: f64 = 200.0;

/// Grace period after an earlier target ended before it counts as skipped.
const SKIP_TOLERANCE: f64 = 3.0;

impl OsuRuleset {
    /// Decide what a click of `player` at `time` on the active target at
    /// position `pos` of the active set resolves to.
    pub(crate) fn can_be_hit(&self, time: f64, pos: usize, player: PlayerId) -> ClickAction {
        let active = self.schedule.active();
        let candidate = &self.infos[active[pos]];
        let mods = self.slot(player).mods();

        if candidate.is_circle() {
            if let Some(&prev) = pos.checked_sub(1).and_then(|prev| active.get(prev)) {
                let prev = &self.targets[prev];

                // only the top of a stack reacts
                if prev.stack_index(mods) > 0 && !prev.is_judged(player) {
                    return ClickAction::Ignored;
                }
            }
        }

        for &index in active {
            if self.targets[index].is_judged(player) {
                continue;
            }

            if index == candidate.index {
                break;
            }

            if self.infos[index].end_time + SKIP_TOLERANCE < candidate.start_time {
                return ClickAction::Shake;
            }
        }

        let range = if mods.ap() {
            HITTABLE_RANGE - AUTOPILOT_REDUCTION
        } else {
            HITTABLE_RANGE
        };

        if (time - candidate.start_time).abs() >= range {
            ClickAction::Shake
        } else {
            ClickAction::Click
        }
    }
}
