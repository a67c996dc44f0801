//! The slice of the page the controller reads and mutates.
//!
//! Handles are injected rather than looked up from a global document. Methods take `&self` since the
//! underlying nodes are shared and mutated in place, the same way `web_sys` elements are.

/// The form's submit control.
pub trait SubmitButton {
    /// The visible label text.
    fn label(&self) -> String;

    fn set_label(&self, label: &str);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);
}

/// One radio input of the difficulty group.
pub trait RadioInput {
    fn is_checked(&self) -> bool;

    /// The submitted value, e.g. `"medium"`.
    fn value(&self) -> String;
}

/// The button-like element that presents a radio option.
pub trait VisualControl {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;
}

/// A radio input together with the visual control living in the same container.
#[derive(Debug, Clone)]
pub struct DifficultyOption<R, C> {
    pub radio: R,
    pub control: C,
}

impl<R, C> DifficultyOption<R, C> {
    pub fn new(radio: R, control: C) -> Self {
        Self { radio, control }
    }
}

/// Every element the controller needs, located up front.
#[derive(Debug, Clone)]
pub struct FormHandles<B, R, C> {
    pub submit: B,
    pub options: Vec<DifficultyOption<R, C>>,
}

impl<B, R, C> FormHandles<B, R, C> {
    /// Handles for a form with no difficulty options yet.
    pub fn new(submit: B) -> Self {
        Self {
            submit,
            options: Vec::new(),
        }
    }

    /// Append an option, keeping document order.
    pub fn with_option(mut self, radio: R, control: C) -> Self {
        self.options.push(DifficultyOption::new(radio, control));
        self
    }
}
