use tracing::warn;

use crate::{
    health::RECOVERY_HP,
    model::target::PlayerId,
    util::{hint::unlikely, mods::Mods},
};

use super::OsuRuleset;

impl OsuRuleset {
    /// Handle a fail signal of the player's health model.
    ///
    /// Immune players ignore the signal and recoveries are consumed before
    /// the player fails. The fail listener is notified only once.
    pub(crate) fn fail(&mut self, player: PlayerId) {
        let slot = &mut self.players[player.0];

        if slot.mods().fail_immune() {
            return;
        }

        if slot.state.recoveries > 0 {
            slot.health.increase(RECOVERY_HP, false);
            slot.state.recoveries -= 1;

            return;
        }

        if unlikely(!slot.state.failed) {
            warn!(player = slot.ctx.name(), "Player failed");
            self.listeners.fail(player);
        }

        self.players[player.0].state.failed = true;
    }
}
