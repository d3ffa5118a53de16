//! Deferred presentation tasks.
//!
//! Outcomes are committed to player state immediately; the renderer only
//! learns when to *show* them. Restarting invalidates everything pending.

use super::events::SlideRef;
use crate::combat::AttackRoll;

/// A presentation step that has come due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// The dice animation on an attack slide has finished
    DiceSettled { slide: SlideRef, roll: AttackRoll },
    /// A resolved slide should now be drawn greyed out
    SlideUsed { slide: SlideRef },
    /// The game-over screen has been up long enough to restart
    RestartDue,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: f64,
    reveal: Reveal,
}

/// Timer queue driven by `tick(delta_seconds)`.
#[derive(Debug, Clone, Default)]
pub struct RevealQueue {
    clock: f64,
    epoch: u64,
    pending: Vec<Scheduled>,
}

impl RevealQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `reveal` to come due after `delay` seconds.
    pub fn schedule(&mut self, delay: f64, reveal: Reveal) {
        self.pending.push(Scheduled {
            due: self.clock + delay.max(0.0),
            reveal,
        });
    }

    /// Advances the clock and returns reveals that came due, oldest first.
    pub fn tick(&mut self, delta: f64) -> Vec<Reveal> {
        self.clock += delta.max(0.0);

        let clock = self.clock;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= clock);
        self.pending = pending;

        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|s| s.reveal).collect()
    }

    /// Drops every pending reveal. Returns how many were cancelled.
    pub fn invalidate(&mut self) -> usize {
        self.epoch += 1;
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Incremented by every [`invalidate`](Self::invalidate).
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
