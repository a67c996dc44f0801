//! Deferred one-shot tasks.
//!
//! The controller never sleeps. It hands the restore action to a [`Scheduler`] and keeps the returned
//! [`TaskHandle`] so the action can be called off later.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
    time::Duration,
};

/// A deferred action. Runs at most once, on the host's event loop.
pub type Task = Box<dyn FnOnce()>;

/// Something that can run a [`Task`] after a delay.
pub trait Scheduler {
    type Handle: TaskHandle;

    /// Queue `task` to run once `delay` has elapsed. Returns immediately.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

/// A scheduled task that has not necessarily run yet.
pub trait TaskHandle {
    /// Make sure the task never runs. Cancelling a task that already ran does nothing.
    fn cancel(self);
}

/// A virtual-clock scheduler. Time only moves when [`ManualScheduler::advance`] is called.
///
/// Useful for headless hosts and for driving the controller deterministically in tests. Clones share
/// the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    // keyed by due time, then by insertion so ties run in scheduling order
    pending: BTreeMap<(Duration, u64), Task>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward by `by`, running every task that falls due, in order.
    ///
    /// Tasks may schedule further tasks; those run too if they fall within the window.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock.pending.first_key_value().map(|(&(due, _), _)| due);
                match due {
                    Some(due) if due <= target => {
                        clock.now = due;
                        clock.pending.pop_first()
                    }
                    _ => None,
                }
            };

            // the clock must not be borrowed while the task runs
            let Some((_, task)) = next else { break };
            task();
            ran += 1;
        }

        self.clock.borrow_mut().now = target;
        ran
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTask;

    fn schedule(&self, delay: Duration, task: Task) -> ManualTask {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;

        let due = clock.now + delay;
        clock.pending.insert((due, id), task);

        ManualTask {
            key: (due, id),
            clock: Rc::downgrade(&self.clock),
        }
    }
}

/// Handle to a task queued on a [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualTask {
    key: (Duration, u64),
    clock: Weak<RefCell<ManualClock>>,
}

impl ManualTask {
    /// When the task is due, measured from the scheduler's creation.
    pub fn due(&self) -> Duration {
        self.key.0
    }
}

impl TaskHandle for ManualTask {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().pending.remove(&self.key);
        }
    }
}
