use std::{cell::RefCell, rc::Rc};

use crate::{
    config::FormConfig,
    dom::{DifficultyOption, FormHandles, RadioInput, SubmitButton, VisualControl},
    scheduler::Scheduler,
    selection,
    submit::{SubmitEvent, SubmitMachine, SubmitState},
    Result,
};

/// Drives the generator form: busy state on submit, and the selected look of the difficulty options.
///
/// Everything runs on the host's single event loop. Handlers take `&self` so the controller can be shared
/// between listeners behind an `Rc`.
///
/// # Example
///
/// ```rust, ignore
/// let controller = FormController::new(handles, FormConfig::default(), scheduler)?;
/// controller.initialize_selection_display();
///
/// // later, from the listeners
/// controller.handle_selection_change(2);
/// controller.handle_submit();
/// ```
pub struct FormController<B, R, C, S>
where
    B: SubmitButton + 'static,
    R: RadioInput,
    C: VisualControl,
    S: Scheduler,
    S::Handle: 'static,
{
    config: FormConfig,
    submit: Rc<RefCell<SubmitMachine<B, S::Handle>>>,
    options: Vec<DifficultyOption<R, C>>,
    scheduler: S,
}

impl<B, R, C, S> FormController<B, R, C, S>
where
    B: SubmitButton + 'static,
    R: RadioInput,
    C: VisualControl,
    S: Scheduler,
    S::Handle: 'static,
{
    /// Take over the located elements. The submit control's current label becomes the restore value.
    pub fn new(handles: FormHandles<B, R, C>, config: FormConfig, scheduler: S) -> Result<Self> {
        config.validate()?;

        let FormHandles { submit, options } = handles;
        let machine = SubmitMachine::new(submit, config.busy_label.clone());

        tracing::debug!(
            options = options.len(),
            label = machine.original_label(),
            "form controller ready"
        );

        Ok(Self {
            config,
            submit: Rc::new(RefCell::new(machine)),
            options,
            scheduler,
        })
    }

    /// The form was submitted: go busy and arm the deferred restore.
    ///
    /// Submitting again while busy re-arms the restore from now.
    pub fn handle_submit(&self) {
        self.dispatch(SubmitEvent::Submit);
    }

    /// The page was shown again from the back/forward cache: put the submit control back right away.
    pub fn handle_page_restored(&self) {
        self.dispatch(SubmitEvent::PageRestored);
    }

    /// Make sure the deferred restore never runs. The submit control is left as it is.
    pub fn cancel_pending_restore(&self) {
        self.submit.borrow_mut().cancel_pending();
    }

    /// The radio at `index` changed. Re-derive which control looks selected.
    pub fn handle_selection_change(&self, index: usize) {
        if !selection::project(&self.options, index, &self.config.selection) {
            tracing::warn!(
                index,
                options = self.options.len(),
                "change event for an option outside the group"
            );
        }
    }

    /// Sync the visual state with whatever option the page pre-checked. Does nothing if none is.
    pub fn initialize_selection_display(&self) {
        match self.selected_index() {
            Some(index) => {
                tracing::debug!(
                    value = %self.options[index].radio.value(),
                    "syncing pre-checked option"
                );
                self.handle_selection_change(index);
            }
            None => tracing::debug!("no option pre-checked"),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.submit.borrow().state()
    }

    /// Whether a deferred restore is armed.
    pub fn has_pending_restore(&self) -> bool {
        self.submit.borrow().has_pending()
    }

    /// The label captured when the controller was built.
    pub fn original_label(&self) -> String {
        self.submit.borrow().original_label().to_string()
    }

    /// Index of the checked radio, if any.
    pub fn selected_index(&self) -> Option<usize> {
        selection::checked(&self.options)
    }

    /// Indices of the controls that currently look selected.
    pub fn marked_indices(&self) -> Vec<usize> {
        selection::marked(&self.options, &self.config.selection)
    }

    pub fn options(&self) -> &[DifficultyOption<R, C>] {
        &self.options
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    fn dispatch(&self, event: SubmitEvent) {
        let Some(generation) = self.submit.borrow_mut().apply(event) else {
            return;
        };

        let machine = Rc::downgrade(&self.submit);
        let handle = self.scheduler.schedule(
            self.config.restore_delay,
            Box::new(move || {
                // gone means the controller was dropped, and dropping already cancels
                if let Some(machine) = machine.upgrade() {
                    machine
                        .borrow_mut()
                        .apply(SubmitEvent::TimerFired { generation });
                }
            }),
        );

        tracing::debug!(
            generation,
            delay_ms = self.config.restore_delay.as_millis() as u64,
            "armed submit restore"
        );
        self.submit.borrow_mut().set_pending(handle);
    }
}

impl<B, R, C, S> Drop for FormController<B, R, C, S>
where
    B: SubmitButton + 'static,
    R: RadioInput,
    C: VisualControl,
    S: Scheduler,
    S::Handle: 'static,
{
    fn drop(&mut self) {
        if let Ok(mut machine) = self.submit.try_borrow_mut() {
            machine.cancel_pending();
        }
    }
}

impl<B, R, C, S> std::fmt::Debug for FormController<B, R, C, S>
where
    B: SubmitButton + 'static,
    R: RadioInput,
    C: VisualControl,
    S: Scheduler,
    S::Handle: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("state", &self.state())
            .field("options", &self.options.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
