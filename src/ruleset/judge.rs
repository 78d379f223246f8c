use tracing::trace;

use crate::{
    model::{
        hit_result::{ComboBonus, HitResult, Judgement},
        target::{PendingJudgement, PlayerId},
    },
    score::ScoreProcessor,
    skill::PerformanceInput,
    util::mods::Mods,
};

use super::{events::HitEvent, OsuRuleset};

impl OsuRuleset {
    /// Aggregate a judgement of `player` on the target at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid target index.
    pub(crate) fn send_result(&mut self, player: PlayerId, index: usize, pending: PendingJudgement) {
        let PendingJudgement {
            time,
            pos,
            result,
            combo,
        } = pending;

        let info = &self.infos[index];
        let slot = &mut self.players[player.0];
        let mods = slot.mods();

        if result.is_discarded() {
            if result == HitResult::PositionalMiss && !mods.rx() {
                let event = HitEvent {
                    player,
                    time,
                    index,
                    position: pos,
                    judgement: Judgement::new(result),
                    combo,
                    performance: slot.state.performance,
                    score: slot.processor.score(),
                };

                self.listeners.hit(&event);
            }

            return;
        }

        let result = slot.processor.modify_result(result, info);
        slot.processor.add_result(result, combo);

        let state = &mut slot.state;

        if result.is_counting() {
            state.count(result);
        }

        state.max_combo = state.max_combo.max(slot.processor.combo());
        state.refresh(mods.reduced_visibility());

        let idx = state.num_objects.saturating_sub(1) as usize;

        let input = PerformanceInput {
            snapshot: &self.skill.table(mods)[idx],
            map: &self.aggregates[idx],
            max_combo: state.max_combo,
            hits: &state.hits,
            difficulty: slot.ctx.difficulty(),
            lazer: self.lazer,
        };

        state.performance = self.estimator.performance(input);

        match result {
            HitResult::Hit100 => state.current_katu += 1,
            HitResult::Hit50 | HitResult::Miss => state.current_bad += 1,
            _ => {}
        }

        let mut judgement = Judgement::new(result);

        let closes_run = self
            .infos
            .get(index + 1)
            .map_or(true, |next| next.new_combo);

        if result.is_counting() && closes_run {
            let all_clicked = {
                let active = self.schedule.active();
                let (Ok(end) | Err(end)) = active.binary_search(&index);

                let mut all_clicked = true;

                for &prev in active[..end].iter().rev() {
                    if !self.targets[prev].is_judged(player) {
                        all_clicked = false;

                        break;
                    }

                    if self.infos[prev].new_combo {
                        break;
                    }
                }

                all_clicked
            };

            if result.is_base_hit() {
                let bonus = if state.current_katu == 0 && state.current_bad == 0 && all_clicked {
                    state.hits.geki += 1;

                    ComboBonus::Geki
                } else if state.current_bad == 0 && all_clicked {
                    state.hits.katu += 1;

                    ComboBonus::Katu
                } else {
                    ComboBonus::Mu
                };

                judgement.bonus = Some(bonus);
            }

            state.current_katu = 0;
            state.current_bad = 0;
        }

        let failed = slot.health.add_result(judgement);

        let event = HitEvent {
            player,
            time,
            index,
            position: pos,
            judgement,
            combo,
            performance: state.performance,
            score: slot.processor.score(),
        };

        self.listeners.hit(&event);

        if self.players.len() == 1 {
            let slot = &self.players[player.0];
            let state = &slot.state;

            trace!(
                result = result.score_value(),
                combo = slot.processor.combo(),
                max_combo = state.max_combo,
                score = event.score,
                acc = state.accuracy,
                n300 = state.hits.n300,
                n100 = state.hits.n100,
                n50 = state.hits.n50,
                misses = state.hits.misses,
                index,
                time,
                x = pos.x,
                y = pos.y,
                pp = state.performance.total,
                "Judged"
            );
        }

        if failed {
            self.fail(player);
        }
    }
}
