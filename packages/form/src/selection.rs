//! Projection of the radio group's checked state onto its visual controls.

use crate::{
    config::SelectionStyle,
    dom::{DifficultyOption, RadioInput, VisualControl},
};

/// Clear the selected look from every control, then give it to `origin`'s control if `origin` is checked.
///
/// Returns `false` without touching anything when `origin` is not part of `options`.
pub(crate) fn project<R: RadioInput, C: VisualControl>(
    options: &[DifficultyOption<R, C>],
    origin: usize,
    style: &SelectionStyle,
) -> bool {
    let Some(origin) = options.get(origin) else {
        return false;
    };

    for option in options {
        style.apply_idle(&option.control);
    }

    if origin.radio.is_checked() {
        style.apply_selected(&origin.control);
    }

    true
}

/// Index of the first checked radio.
pub(crate) fn checked<R: RadioInput, C>(options: &[DifficultyOption<R, C>]) -> Option<usize> {
    options.iter().position(|option| option.radio.is_checked())
}

/// Indices of every control currently presenting as selected.
pub(crate) fn marked<R, C: VisualControl>(
    options: &[DifficultyOption<R, C>],
    style: &SelectionStyle,
) -> Vec<usize> {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| style.is_selected(&option.control))
        .map(|(idx, _)| idx)
        .collect()
}
