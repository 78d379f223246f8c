use std::collections::VecDeque;

use crate::{model::target::TargetInfo, util::sorted_vec::SortedVec};

/// Activation queue and active set over target indices.
///
/// Every index is either queued, active, or retired. The queue is ordered by
/// activation time, ties keep their sequence order. The active set is
/// ordered by index.
#[derive(Clone, Debug)]
pub(crate) struct Schedule {
    queue: VecDeque<usize>,
    active: SortedVec<usize>,
}

impl Schedule {
    pub(crate) fn new(infos: &[TargetInfo]) -> Self {
        let mut queue: Vec<_> = (0..infos.len()).collect();

        // stable
        queue.sort_by(|&a, &b| {
            infos[a]
                .activation_time
                .total_cmp(&infos[b].activation_time)
        });

        Self {
            queue: queue.into(),
            active: SortedVec::with_capacity(16),
        }
    }

    pub(crate) fn active(&self) -> &[usize] {
        &self.active
    }

    /// Move every queued target whose activation time was reached into the
    /// active set.
    pub(crate) fn activate(&mut self, time: f64, infos: &[TargetInfo]) {
        while let Some(&next) = self.queue.front() {
            if infos[next].activation_time > time {
                break;
            }

            self.queue.pop_front();
            self.active.push(next);
        }
    }

    /// Visit active targets in order and remove those for which `is_done`
    /// returns `true`.
    pub(crate) fn retire<F>(&mut self, mut is_done: F)
    where
        F: FnMut(usize) -> bool,
    {
        self.active.retain(|&index| !is_done(index));
    }

    /// Whether every target has been activated and retired.
    pub(crate) fn is_drained(&self) -> bool {
        self.queue.is_empty() && self.active.is_empty()
    }
}
