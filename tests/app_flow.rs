mod common;

use otpfield::otp::SHAKE_STEPS;
use otpfield::ui::app::App;

fn type_all(app: &mut App, digits: &str) {
    for ch in digits.chars() {
        app.type_char(ch);
    }
}

#[test]
fn wrong_code_sets_error_and_shakes() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");

    assert!(!app.solved());
    assert_eq!(app.attempts(), 1);
    assert_eq!(
        app.error_message().as_deref(),
        Some("Incorrect code, try again (attempt 1)")
    );
    let view = app.view();
    assert!(view.error);
    assert_eq!(view.shake_offset, 10);
}

#[test]
fn shake_settles_after_six_ticks() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");
    for _ in 0..SHAKE_STEPS {
        app.on_tick();
    }
    assert_eq!(app.view().shake_offset, 0);
    // Error stays until the user edits; only the motion stops.
    assert!(app.view().error);
}

#[test]
fn editing_after_error_clears_it() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");
    assert!(app.error_message().is_some());

    app.backspace();
    assert!(app.error_message().is_none());
    assert!(!app.view().error);
    assert_eq!(app.value(), "11111");
}

#[test]
fn extra_digit_on_full_field_is_dropped() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");
    app.type_char('2');
    assert_eq!(app.value(), "111111");
    // The rejected candidate is not an observation: no second attempt.
    assert_eq!(app.attempts(), 1);
}

#[test]
fn correct_code_solves() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "123456");
    assert!(app.solved());
    assert!(app.error_message().is_none());
    assert_eq!(app.attempts(), 0);
}

#[test]
fn typing_after_solved_is_ignored() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "123456");
    app.backspace();
    app.type_char('9');
    assert_eq!(app.value(), "123456");
    assert!(app.solved());
}

#[test]
fn reset_clears_value_and_error_but_keeps_attempts() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");
    app.reset();

    assert_eq!(app.value(), "");
    assert!(app.error_message().is_none());
    assert!(!app.view().error);
    assert_eq!(app.attempts(), 1);
}

#[test]
fn reset_does_not_cancel_running_shake() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");
    app.on_tick();
    app.reset();
    assert!(matches!(
        app.view().shake_offset,
        offset if offset != 0
    ));
    for _ in 0..SHAKE_STEPS {
        app.on_tick();
    }
    assert_eq!(app.view().shake_offset, 0);
}

#[test]
fn unfocused_field_ignores_typing() {
    let mut app = App::new("123456".to_string(), 1);
    app.toggle_focus();
    app.type_char('1');
    assert_eq!(app.value(), "");

    app.toggle_focus();
    app.type_char('1');
    assert_eq!(app.value(), "1");
}

#[test]
fn retry_after_wrong_code_shakes_again() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "111111");
    for _ in 0..SHAKE_STEPS {
        app.on_tick();
    }
    app.reset();
    type_all(&mut app, "222222");

    assert_eq!(app.attempts(), 2);
    assert_eq!(
        app.error_message().as_deref(),
        Some("Incorrect code, try again (attempt 2)")
    );
    assert!(matches!(app.view(), view if view.shake_offset == 10));
}

#[test]
fn solve_on_second_attempt() {
    let mut app = App::new("123456".to_string(), 1);
    type_all(&mut app, "654321");
    assert_eq!(app.attempts(), 1);

    app.reset();
    type_all(&mut app, "123456");
    assert!(app.solved());
}
