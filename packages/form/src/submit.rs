use crate::{dom::SubmitButton, scheduler::TaskHandle};

/// Where the submit control is in its busy cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,

    /// Busy. Only the restore armed for `generation` may put the control back.
    Submitting { generation: u64 },
}

/// Something that happened to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    /// The user submitted the form.
    Submit,

    /// The deferred restore armed for `generation` ran.
    TimerFired { generation: u64 },

    /// The page came back out of the back/forward cache.
    PageRestored,
}

/// What a transition asks of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stay,

    /// Show the busy state and arm a restore for `generation`, replacing any pending one.
    Arm { generation: u64 },

    /// Drop any pending restore and put the control back.
    Restore,
}

impl SubmitState {
    /// The pure transition function. `fresh` is the generation to use if a new restore gets armed.
    pub fn step(self, event: SubmitEvent, fresh: u64) -> (SubmitState, Step) {
        use SubmitEvent::*;
        use SubmitState::*;

        match (self, event) {
            // A submit while busy replaces the pending restore rather than adding a second one, so the
            // control comes back `delay` after the latest submit, not after the first.
            (_, Submit) => (
                Submitting { generation: fresh },
                Step::Arm { generation: fresh },
            ),
            (Submitting { generation }, TimerFired { generation: fired }) if generation == fired => {
                (Idle, Step::Restore)
            }
            (Submitting { .. }, PageRestored) => (Idle, Step::Restore),
            (state, _) => (state, Step::Stay),
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(self, SubmitState::Submitting { .. })
    }
}

/// The submit control plus its state, mutated only through [`SubmitEvent`]s.
pub(crate) struct SubmitMachine<B, H> {
    button: B,
    original_label: String,
    busy_label: String,
    state: SubmitState,
    next_generation: u64,
    pending: Option<H>,
}

impl<B: SubmitButton, H: TaskHandle> SubmitMachine<B, H> {
    pub(crate) fn new(button: B, busy_label: String) -> Self {
        let original_label = button.label();
        Self {
            button,
            original_label,
            busy_label,
            state: SubmitState::Idle,
            next_generation: 0,
            pending: None,
        }
    }

    pub(crate) fn state(&self) -> SubmitState {
        self.state
    }

    pub(crate) fn original_label(&self) -> &str {
        &self.original_label
    }

    /// Apply `event` to the control. Returns the generation to arm a restore for, if any.
    pub(crate) fn apply(&mut self, event: SubmitEvent) -> Option<u64> {
        let (next, step) = self.state.step(event, self.next_generation);
        tracing::trace!(from = ?self.state, to = ?next, ?event, "submit transition");
        self.state = next;

        match step {
            Step::Stay => {
                tracing::debug!(?event, "ignoring submit event in state {:?}", self.state);
                None
            }
            Step::Arm { generation } => {
                self.next_generation += 1;
                self.cancel_pending();
                self.button.set_disabled(true);
                self.button.set_label(&self.busy_label);
                Some(generation)
            }
            Step::Restore => {
                self.cancel_pending();
                self.button.set_disabled(false);
                self.button.set_label(&self.original_label);
                None
            }
        }
    }

    pub(crate) fn set_pending(&mut self, handle: H) {
        self.cancel_pending();
        self.pending = Some(handle);
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}
