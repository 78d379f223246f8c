use std::mem;

use crate::model::target::{ClickAction, PlayerId, TargetContext};

use super::{player::CursorState, OsuRuleset};

/// The per-player passes of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pass {
    Click,
    Normal { process_slider_ends_ahead: bool },
    Post,
}

impl Pass {
    /// Whether an unjudged slider hides all later sliders for this pass.
    const fn gates_sliders(self) -> bool {
        matches!(self, Self::Click | Self::Normal { .. })
    }
}

impl OsuRuleset {
    /// Set the player's input for the upcoming passes.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this ruleset.
    pub fn set_cursor(&mut self, player: PlayerId, cursor: CursorState) {
        self.players[player.0].ctx.set_cursor(cursor);
    }

    /// Derive the player's click edges and offer the click to every active
    /// target.
    pub fn update_click_for(&mut self, player: PlayerId, time: f64) {
        self.players[player.0].ctx.begin_click_pass();
        self.visit_active(player, time, Pass::Click);
        self.players[player.0].ctx.end_click_pass();
    }

    /// Advance every active target for the player regardless of button
    /// state, e.g. slider ticks or misses of expired circles.
    pub fn update_normal_for(
        &mut self,
        player: PlayerId,
        time: f64,
        process_slider_ends_ahead: bool,
    ) {
        let pass = Pass::Normal {
            process_slider_ends_ahead,
        };

        self.visit_active(player, time, pass);
    }

    /// Let every active target finish its bookkeeping for the player.
    pub fn update_post_for(&mut self, player: PlayerId, time: f64) {
        self.visit_active(player, time, Pass::Post);
    }

    /// Retire finished targets, activate due ones, and drain health.
    ///
    /// Must be called once per frame after every player has been processed.
    pub fn update(&mut self, time: f64) {
        let Self {
            targets,
            schedule,
            listeners,
            ..
        } = self;

        schedule.retire(|index| {
            let done = targets[index].finalize(time);

            if done {
                listeners.end(time, index);
            }

            done
        });

        self.schedule.activate(time, &self.infos);

        for i in 0..self.players.len() {
            if self.players[i].health.update(time) {
                self.fail(PlayerId(i));
            }
        }

        if !self.ended && self.schedule.is_drained() {
            self.ended = true;
            self.log_standings();
        }
    }

    /// Run a whole frame: set each player's cursor, run the three passes
    /// for every player, and finally [`update`](Self::update).
    ///
    /// # Panics
    ///
    /// Panics if there isn't exactly one cursor per player.
    pub fn frame(&mut self, time: f64, cursors: &[CursorState]) {
        assert_eq!(
            cursors.len(),
            self.players.len(),
            "expected one cursor per player"
        );

        for (i, cursor) in cursors.iter().enumerate() {
            let player = PlayerId(i);

            self.set_cursor(player, *cursor);
            self.update_click_for(player, time);
            self.update_normal_for(player, time, false);
            self.update_post_for(player, time);
        }

        self.update(time);
    }

    fn visit_active(&mut self, player: PlayerId, time: f64, pass: Pass) {
        let mut unjudged_slider = false;

        // the active set only changes in `update`
        for pos in 0..self.schedule.active().len() {
            let index = self.schedule.active()[pos];

            if pass.gates_sliders() && self.infos[index].is_slider() {
                if unjudged_slider {
                    continue;
                }

                if !self.targets[index].is_judged(player) {
                    unjudged_slider = true;
                }
            }

            let click = match pass {
                Pass::Click => Some(self.can_be_hit(time, pos, player)),
                Pass::Normal { .. } | Pass::Post => None,
            };

            self.advance_target(player, index, time, pass, click);
        }
    }

    fn advance_target(
        &mut self,
        player: PlayerId,
        index: usize,
        time: f64,
        pass: Pass,
        click: Option<ClickAction>,
    ) {
        let slot = &mut self.players[player.0];
        let mut ctx = TargetContext::new(
            index,
            slot.windows,
            click,
            &mut slot.ctx,
            &mut self.pending,
        );

        let target = &mut self.targets[index];

        match pass {
            Pass::Click => {
                target.advance_on_click(&mut ctx, time);
            }
            Pass::Normal {
                process_slider_ends_ahead,
            } => {
                target.advance(&mut ctx, time, process_slider_ends_ahead);
            }
            Pass::Post => {
                target.advance_post(&mut ctx, time);
            }
        }

        if self.pending.is_empty() {
            return;
        }

        let mut pending = mem::take(&mut self.pending);

        for judgement in pending.drain(..) {
            self.send_result(player, index, judgement);
        }

        self.pending = pending;
    }
}
