use std::time::Duration;

use crate::{dom::VisualControl, Error, Result};

/// Label shown on the submit control while a puzzle is being generated.
pub const BUSY_LABEL: &str = "Generating...";

/// How long the busy state is kept if the page never navigates away.
pub const RESTORE_DELAY: Duration = Duration::from_millis(10_000);

/// `name` shared by the difficulty radio inputs.
pub const DIFFICULTY_GROUP: &str = "difficulty";

/// Marker class carried by the visual control of the checked option.
pub const SELECTED_MARKER: &str = "selected";

/// How selection is projected onto the visual controls.
///
/// The selected control carries every class in `selected`, all other controls carry every class in `idle`.
/// The default is a single `selected` marker and no idle classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStyle {
    selected: Vec<String>,
    idle: Vec<String>,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self::marker(SELECTED_MARKER)
    }
}

impl SelectionStyle {
    pub fn new<S, I>(selected: S, idle: I) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            selected: selected.into_iter().map(Into::into).collect(),
            idle: idle.into_iter().map(Into::into).collect(),
        }
    }

    /// A single toggled marker class.
    pub fn marker(class: impl Into<String>) -> Self {
        Self {
            selected: vec![class.into()],
            idle: Vec::new(),
        }
    }

    /// Black-on-white swapped for white-on-black, using tailwind utility classes.
    pub fn contrast() -> Self {
        Self::new(["bg-black", "text-white"], ["bg-white", "text-black"])
    }

    pub fn selected_classes(&self) -> &[String] {
        &self.selected
    }

    pub fn idle_classes(&self) -> &[String] {
        &self.idle
    }

    /// Whether `control` currently presents as selected.
    pub fn is_selected(&self, control: &impl VisualControl) -> bool {
        self.selected.iter().all(|class| control.has_class(class))
    }

    pub(crate) fn apply_idle(&self, control: &impl VisualControl) {
        for class in &self.selected {
            control.remove_class(class);
        }
        for class in &self.idle {
            control.add_class(class);
        }
    }

    pub(crate) fn apply_selected(&self, control: &impl VisualControl) {
        for class in &self.idle {
            control.remove_class(class);
        }
        for class in &self.selected {
            control.add_class(class);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.selected.is_empty() {
            return Err(Error::InvalidConfig(
                "selection style needs at least one selected class".into(),
            ));
        }

        for class in self.selected.iter().chain(&self.idle) {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(Error::InvalidConfig(format!(
                    "{class:?} is not a single class name"
                )));
            }
        }

        // a class in both sets would be removed right after being added
        if let Some(shared) = self.selected.iter().find(|c| self.idle.contains(c)) {
            return Err(Error::InvalidConfig(format!(
                "{shared:?} is both a selected and an idle class"
            )));
        }

        Ok(())
    }
}

/// Configuration for a [`FormController`](crate::FormController).
///
/// # Example
///
/// ```rust
/// use sudoku_form::{FormConfig, SelectionStyle};
///
/// let config = FormConfig::new().with_selection(SelectionStyle::contrast());
/// assert_eq!(config.busy_label(), "Generating...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub(crate) busy_label: String,
    pub(crate) restore_delay: Duration,
    pub(crate) group_name: String,
    pub(crate) selection: SelectionStyle,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            busy_label: BUSY_LABEL.to_string(),
            restore_delay: RESTORE_DELAY,
            group_name: DIFFICULTY_GROUP.to_string(),
            selection: SelectionStyle::default(),
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label shown while the form is submitting.
    pub fn with_busy_label(mut self, label: impl Into<String>) -> Self {
        self.busy_label = label.into();
        self
    }

    /// Set how long to wait before putting the submit control back.
    ///
    /// The page always uses [`RESTORE_DELAY`]. This exists so tests can run on a short timer.
    #[doc(hidden)]
    pub fn with_restore_delay(mut self, delay: Duration) -> Self {
        self.restore_delay = delay;
        self
    }

    /// Set the `name` of the radio group.
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = name.into();
        self
    }

    pub fn with_selection(mut self, selection: SelectionStyle) -> Self {
        self.selection = selection;
        self
    }

    pub fn busy_label(&self) -> &str {
        &self.busy_label
    }

    pub fn restore_delay(&self) -> Duration {
        self.restore_delay
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn selection(&self) -> &SelectionStyle {
        &self.selection
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.busy_label.trim().is_empty() {
            return Err(Error::InvalidConfig("busy label is empty".into()));
        }
        if self.restore_delay.is_zero() {
            return Err(Error::InvalidConfig("restore delay must be non-zero".into()));
        }
        if self.group_name.is_empty() {
            return Err(Error::InvalidConfig("radio group name is empty".into()));
        }
        // the name ends up inside a quoted attribute selector
        if let Some(c) = self
            .group_name
            .chars()
            .find(|&c| c == '"' || c == '\\' || c.is_control())
        {
            return Err(Error::InvalidConfig(format!(
                "radio group name {:?} contains {c:?}",
                self.group_name
            )));
        }
        self.selection.validate()
    }
}
