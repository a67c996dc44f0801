#![warn(missing_debug_implementations)]
//! Interaction state for the sudoku generator form.
//!
//! ## Overview
//! ------------
//! The generator page renders a plain HTML form: a group of difficulty radio inputs, each paired with a
//! button-like element, and a submit button. Generating a puzzle takes a while, so two bits of state are
//! layered on top of the native form:
//!
//! - while the request is in flight the submit button is disabled and reads "Generating...". If the page
//!   never navigates away (the server failed and left us where we were) it is put back after ten seconds.
//! - the button-like element of the checked radio carries a "selected" marker, and no other does.
//!
//! This crate holds that logic without knowing anything about a real DOM. Element handles are injected
//! through the traits in [`dom`], and the deferred restore goes through a [`Scheduler`]. The `web-sys`
//! binding lives in `sudoku-form-web`, and tests drive the controller with a mock tree and a
//! [`ManualScheduler`].
//!
//! ## State machine
//! ----------------
//! The submit control is either [`SubmitState::Idle`] or [`SubmitState::Submitting`]. Each submit arms a
//! restore tagged with a fresh generation; a restore whose generation is no longer current is ignored, so
//! a stale timer can never undo a newer busy state.

pub mod dom;
pub mod scheduler;

mod config;
mod controller;
mod error;
mod selection;
mod submit;

pub use config::{
    FormConfig, SelectionStyle, BUSY_LABEL, DIFFICULTY_GROUP, RESTORE_DELAY, SELECTED_MARKER,
};
pub use controller::FormController;
pub use dom::{DifficultyOption, FormHandles, RadioInput, SubmitButton, VisualControl};
pub use error::{require, Error, Result};
pub use scheduler::{ManualScheduler, ManualTask, Scheduler, Task, TaskHandle};
pub use submit::{Step, SubmitEvent, SubmitState};
