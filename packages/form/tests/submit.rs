//! Busy state of the submit control and its deferred restore.

mod common;

use std::time::Duration;

use common::page;
use sudoku_form::{
    require, Error, FormConfig, FormController, ManualScheduler, SubmitButton, SubmitState,
};

const LEVELS: [&str; 3] = ["easy", "medium", "hard"];

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn submit_goes_busy_then_restores_after_ten_seconds() {
    let (page, handles) = page("Generate Puzzle", &LEVELS, Some(1));
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    controller.handle_submit();
    assert!(page.button.is_disabled());
    assert_eq!(page.button.label(), "Generating...");
    assert_eq!(controller.state(), SubmitState::Submitting { generation: 0 });
    assert!(controller.has_pending_restore());

    scheduler.advance(ms(9_999));
    assert!(page.button.is_disabled());
    assert_eq!(page.button.label(), "Generating...");

    assert_eq!(scheduler.advance(ms(1)), 1);
    assert!(!page.button.is_disabled());
    assert_eq!(page.button.label(), "Generate Puzzle");
    assert_eq!(controller.state(), SubmitState::Idle);
    assert!(!controller.has_pending_restore());
}

#[test]
fn label_is_captured_at_construction() {
    let (page, handles) = page("Generate Puzzle", &LEVELS, None);
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    // a later rewrite of the label is not the restore value
    page.button.set_label("Something else");
    controller.handle_submit();
    scheduler.advance(ms(10_000));

    assert_eq!(controller.original_label(), "Generate Puzzle");
    assert_eq!(page.button.label(), "Generate Puzzle");
}

#[test]
fn resubmitting_re_arms_the_restore() {
    let (page, handles) = page("Generate", &LEVELS, None);
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    controller.handle_submit();
    scheduler.advance(ms(6_000));
    controller.handle_submit();
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(controller.state(), SubmitState::Submitting { generation: 1 });

    // ten seconds after the first submit, the button stays busy
    scheduler.advance(ms(4_000));
    assert!(page.button.is_disabled());
    assert_eq!(page.button.label(), "Generating...");

    scheduler.advance(ms(5_999));
    assert!(page.button.is_disabled());

    assert_eq!(scheduler.advance(ms(1)), 1);
    assert_eq!(scheduler.now(), ms(16_000));
    assert!(!page.button.is_disabled());
    assert_eq!(page.button.label(), "Generate");
}

#[test]
fn page_restore_puts_the_button_back_immediately() {
    let (page, handles) = page("Generate", &LEVELS, None);
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    controller.handle_submit();
    scheduler.advance(ms(2_000));
    controller.handle_page_restored();

    assert!(!page.button.is_disabled());
    assert_eq!(page.button.label(), "Generate");
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(controller.state(), SubmitState::Idle);
}

#[test]
fn page_restore_while_idle_does_nothing() {
    let (page, handles) = page("Generate", &LEVELS, None);
    let controller =
        FormController::new(handles, FormConfig::default(), ManualScheduler::new()).unwrap();

    controller.handle_page_restored();

    assert!(!page.button.is_disabled());
    assert_eq!(page.button.label(), "Generate");
    assert_eq!(controller.state(), SubmitState::Idle);
}

#[test]
fn cancelling_leaves_the_busy_state_alone() {
    let (page, handles) = page("Generate", &LEVELS, None);
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    controller.handle_submit();
    controller.cancel_pending_restore();
    scheduler.advance(ms(60_000));

    assert!(page.button.is_disabled());
    assert!(controller.state().is_busy());
    assert!(!controller.has_pending_restore());
}

#[test]
fn dropping_the_controller_cancels_the_restore() {
    let (page, handles) = page("Generate", &LEVELS, None);
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    controller.handle_submit();
    drop(controller);

    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(ms(10_000)), 0);
    assert_eq!(page.button.label(), "Generating...");
}

#[test]
fn custom_label_and_delay() {
    let (page, handles) = page("Go", &LEVELS, None);
    let scheduler = ManualScheduler::new();
    let config = FormConfig::new()
        .with_busy_label("Working")
        .with_restore_delay(ms(500));
    let controller = FormController::new(handles, config, scheduler.clone()).unwrap();

    controller.handle_submit();
    assert_eq!(page.button.label(), "Working");

    scheduler.advance(ms(500));
    assert_eq!(page.button.label(), "Go");
}

#[test]
fn invalid_config_is_a_startup_fault() {
    let (_page, handles) = page("Go", &LEVELS, None);
    let config = FormConfig::new().with_busy_label("");

    let err = FormController::new(handles, config, ManualScheduler::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn missing_element_names_the_lookup() {
    let found: Option<()> = None;
    let err = require(found, "button[type=\"submit\"]").unwrap_err();

    assert!(matches!(err, Error::MissingElement { .. }));
    assert_eq!(
        err.to_string(),
        "required element is missing from the page: button[type=\"submit\"]"
    );
}

/// Medium pre-checked, user picks hard, then submits.
#[test]
fn generator_form_walkthrough() {
    let (page, handles) = page("Generate Puzzle", &LEVELS, Some(1));
    let scheduler = ManualScheduler::new();
    let controller = FormController::new(handles, FormConfig::default(), scheduler.clone()).unwrap();

    controller.initialize_selection_display();
    assert_eq!(page.with_class("selected"), vec![1]);

    page.group.check(2);
    controller.handle_selection_change(2);
    assert_eq!(page.with_class("selected"), vec![2]);

    controller.handle_submit();
    assert!(page.button.is_disabled());
    assert_eq!(page.button.label(), "Generating...");

    scheduler.advance(ms(10_000));
    assert!(!page.button.is_disabled());
    assert_eq!(page.button.label(), "Generate Puzzle");
    assert_eq!(page.with_class("selected"), vec![2]);
}
