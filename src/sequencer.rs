//! Fire-once cues at fixed offsets after mount.
//!
//! A scene schedules its cues when it mounts and feeds the frame delta into
//! [`RevealSequencer::advance`]. Fired effects come back in offset order and
//! the scene applies them to its own state. Cancelling drops every pending
//! cue at once, which is what a scene does on teardown.

use tracing::debug;

#[derive(Debug, Clone)]
struct Cue<E> {
    offset: f32,
    effect: E,
}

#[derive(Debug, Clone)]
pub struct RevealSequencer<E> {
    pending: Vec<Cue<E>>,
    elapsed: f32,
}

impl<E: Copy + std::fmt::Debug> RevealSequencer<E> {
    pub fn new() -> Self {
        Self { pending: Vec::new(), elapsed: 0.0 }
    }

    /// Adds a cue. Cues with equal offsets fire in scheduling order.
    pub fn schedule(&mut self, offset: f32, effect: E) {
        let at = self.pending.partition_point(|cue| cue.offset <= offset);
        self.pending.insert(at, Cue { offset, effect });
    }

    /// Moves the clock forward by `dt` seconds and returns the effects that
    /// became due, earliest first.
    pub fn advance(&mut self, dt: f32) -> Vec<E> {
        self.elapsed += dt;
        let elapsed = self.elapsed;
        let due = self.pending.partition_point(|cue| cue.offset <= elapsed);
        self.pending
            .drain(..due)
            .map(|cue| {
                debug!(offset = cue.offset, elapsed, effect = ?cue.effect, "cue fired");
                cue.effect
            })
            .collect()
    }

    pub fn cancel(&mut self) {
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "pending cues cancelled");
        }
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl<E: Copy + std::fmt::Debug> Default for RevealSequencer<E> {
    fn default() -> Self {
        Self::new()
    }
}
