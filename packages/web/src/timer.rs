//! The restore timer, backed by `setTimeout`.

use std::{cell::Cell, rc::Rc, time::Duration};

use gloo_timers::callback::Timeout;
use sudoku_form::{Scheduler, Task, TaskHandle};

/// Longest delay `setTimeout` honours. Anything above 2^31 - 1 ms fires immediately.
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

thread_local! {
    // A `Timeout` cannot be dropped from inside its own callback, so the one that just fired is parked
    // here and freed when the next one fires.
    static SPENT: Cell<Option<Timeout>> = const { Cell::new(None) };
}

/// Schedules tasks on the browser's timer queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = GlooTask;

    fn schedule(&self, delay: Duration, task: Task) -> GlooTask {
        let millis = timeout_millis(delay);

        // dropping a `Timeout` clears it, so it lives in the slot until it fires or is cancelled
        let slot: Rc<Cell<Option<Timeout>>> = Rc::default();
        let fired = Rc::downgrade(&slot);

        let timeout = Timeout::new(millis, move || {
            if let Some(timeout) = fired.upgrade().and_then(|slot| slot.take()) {
                drop(SPENT.with(|spent| spent.replace(Some(timeout))));
            }
            task();
        });
        slot.set(Some(timeout));

        GlooTask { slot }
    }
}

/// `delay` in whole milliseconds, clamped to what `setTimeout` accepts.
pub(crate) fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |millis| millis.min(MAX_DELAY_MS))
}

/// A pending `setTimeout`. Dropping the handle clears the timer, as does [`TaskHandle::cancel`].
pub struct GlooTask {
    slot: Rc<Cell<Option<Timeout>>>,
}

impl GlooTask {
    /// Whether the timer is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        let timeout = self.slot.take();
        let pending = timeout.is_some();
        self.slot.set(timeout);
        pending
    }
}

impl TaskHandle for GlooTask {
    fn cancel(self) {
        if let Some(timeout) = self.slot.take() {
            drop(timeout.cancel());
        }
    }
}

impl std::fmt::Debug for GlooTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlooTask")
            .field("pending", &self.is_pending())
            .finish()
    }
}
