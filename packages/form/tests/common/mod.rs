//! An in-memory stand-in for the generator page.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    rc::Rc,
};

use sudoku_form::{FormHandles, RadioInput, SubmitButton, VisualControl};

#[derive(Debug, Clone)]
pub struct MockButton {
    label: Rc<RefCell<String>>,
    disabled: Rc<Cell<bool>>,
}

impl MockButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: Rc::new(RefCell::new(label.to_string())),
            disabled: Rc::new(Cell::new(false)),
        }
    }
}

impl SubmitButton for MockButton {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

/// Radios sharing a name: checking one unchecks the rest, like the browser does.
#[derive(Debug, Clone, Default)]
pub struct MockGroup {
    checked: Rc<Cell<Option<usize>>>,
}

impl MockGroup {
    pub fn check(&self, index: usize) {
        self.checked.set(Some(index));
    }

    pub fn clear(&self) {
        self.checked.set(None);
    }
}

#[derive(Debug, Clone)]
pub struct MockRadio {
    group: MockGroup,
    index: usize,
    value: String,
}

impl RadioInput for MockRadio {
    fn is_checked(&self) -> bool {
        self.group.checked.get() == Some(self.index)
    }

    fn value(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockControl {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MockControl {
    pub fn with_classes(classes: &[&str]) -> Self {
        let control = Self::default();
        for class in classes {
            control.add_class(class);
        }
        control
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl VisualControl for MockControl {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

pub type Handles = FormHandles<MockButton, MockRadio, MockControl>;

/// Shared views into the page, kept by the test after the handles move into the controller.
#[derive(Debug, Clone)]
pub struct MockPage {
    pub button: MockButton,
    pub group: MockGroup,
    pub controls: Vec<MockControl>,
}

impl MockPage {
    /// The index of every control carrying `class`.
    pub fn with_class(&self, class: &str) -> Vec<usize> {
        self.controls
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_class(class))
            .map(|(i, _)| i)
            .collect()
    }
}

pub fn page(label: &str, values: &[&str], checked: Option<usize>) -> (MockPage, Handles) {
    page_with_controls(label, values, checked, &[])
}

/// Like [`page`], but every control starts out with `initial` classes.
pub fn page_with_controls(
    label: &str,
    values: &[&str],
    checked: Option<usize>,
    initial: &[&str],
) -> (MockPage, Handles) {
    let button = MockButton::new(label);
    let group = MockGroup::default();
    if let Some(index) = checked {
        group.check(index);
    }

    let mut handles = FormHandles::new(button.clone());
    let mut controls = Vec::new();
    for (index, value) in values.iter().enumerate() {
        let control = MockControl::with_classes(initial);
        let radio = MockRadio {
            group: group.clone(),
            index,
            value: value.to_string(),
        };
        controls.push(control.clone());
        handles = handles.with_option(radio, control);
    }

    (
        MockPage {
            button,
            group,
            controls,
        },
        handles,
    )
}
