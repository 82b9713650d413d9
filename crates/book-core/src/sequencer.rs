//! Book Sequencer.
//!
//! Owns the authoritative target page and the delayed page that walks toward
//! it one step at a time. The walk itself is an explicit state machine; the
//! hosts drive it with their own timers (`setTimeout` on web, event-loop
//! deadlines on native) and use the generation stamp to discard ticks that
//! were scheduled before a newer navigation request.

use std::time::Duration;

use crate::constants::{STEP_FAR_MS, STEP_FAR_THRESHOLD, STEP_NEAR_MS};

/// Outcome of one walk tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The delayed page has settled on the target; no further tick is due.
    Done,
    /// The displayed page moved one step; the host should tick again after
    /// `next_in` and may fire its page-turned side effect (flip sound).
    Stepped { delayed: usize, next_in: Duration },
}

#[derive(Clone, Debug)]
pub struct PageWalk {
    page_count: usize,
    target: usize,
    delayed: usize,
    generation: u64,
}

impl PageWalk {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            target: 0,
            delayed: 0,
            generation: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn delayed(&self) -> usize {
        self.delayed
    }

    /// True once the delayed page has moved past `page_index`.
    pub fn opened(&self, page_index: usize) -> bool {
        self.delayed > page_index
    }

    /// The book lies flat at either cover.
    pub fn book_closed(&self) -> bool {
        self.delayed == 0 || self.delayed == self.page_count
    }

    /// Stamp identifying the current walk; a tick scheduled under an older
    /// generation is stale and must be dropped, never applied.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Point the walk at a new page, clamped to `[0, page_count]`. Returns
    /// true when the host should start a fresh tick chain; requesting the
    /// current target again is a no-op.
    pub fn request(&mut self, target: usize) -> bool {
        let target = target.min(self.page_count);
        if target == self.target {
            return false;
        }
        self.target = target;
        self.generation += 1;
        true
    }

    /// Stop walking where we are and invalidate any pending host timer.
    pub fn cancel(&mut self) {
        self.target = self.delayed;
        self.generation += 1;
    }

    /// Move one step toward the target. The delay until the next tick is
    /// decided before stepping: far jumps animate fast, the final approach
    /// animates slow.
    pub fn tick(&mut self) -> Tick {
        if self.delayed == self.target {
            return Tick::Done;
        }
        let far = self.target.abs_diff(self.delayed) > STEP_FAR_THRESHOLD;
        let next_in = Duration::from_millis(if far { STEP_FAR_MS } else { STEP_NEAR_MS });
        if self.target > self.delayed {
            self.delayed += 1;
        } else {
            self.delayed -= 1;
        }
        log::debug!("page walk stepped to {} of {}", self.delayed, self.target);
        Tick::Stepped {
            delayed: self.delayed,
            next_in,
        }
    }
}
