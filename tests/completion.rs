mod common;

use common::{completions, drain};
use otpfield::otp::OtpFieldController;

#[test]
fn short_value_never_completes() {
    let mut controller = OtpFieldController::new();
    controller.observe_value("12345");
    assert_eq!(completions(&drain(&mut controller)), 0);
}

#[test]
fn reobserving_same_short_value_never_completes() {
    let mut controller = OtpFieldController::new();
    controller.observe_value("123");
    controller.observe_value("123");
    assert_eq!(completions(&drain(&mut controller)), 0);
}

#[test]
fn six_digit_observation_completes_once() {
    let mut controller = OtpFieldController::new();
    controller.observe_value("123456");
    assert_eq!(completions(&drain(&mut controller)), 1);
}

#[test]
fn repeat_observation_fires_again_by_default() {
    // Every distinct observation of a 6-digit value counts, even an
    // identical one with no shorter value in between.
    let mut controller = OtpFieldController::new();
    controller.observe_value("123456");
    controller.observe_value("123456");
    assert_eq!(completions(&drain(&mut controller)), 2);
}

#[test]
fn different_six_digit_value_fires_again() {
    let mut controller = OtpFieldController::new();
    controller.observe_value("123456");
    controller.observe_value("654321");
    assert_eq!(completions(&drain(&mut controller)), 2);
}

#[test]
fn dedup_policy_suppresses_identical_repeat() {
    let mut controller = OtpFieldController::new();
    controller.dedup_repeated_complete(true);
    controller.observe_value("123456");
    controller.observe_value("123456");
    assert_eq!(completions(&drain(&mut controller)), 1);
}

#[test]
fn dedup_policy_still_fires_for_different_value() {
    let mut controller = OtpFieldController::new();
    controller.dedup_repeated_complete(true);
    controller.observe_value("123456");
    controller.observe_value("654321");
    assert_eq!(completions(&drain(&mut controller)), 2);
}

#[test]
fn dedup_policy_fires_after_passing_through_shorter_value() {
    let mut controller = OtpFieldController::new();
    controller.dedup_repeated_complete(true);
    controller.observe_value("123456");
    controller.observe_value("12345");
    controller.observe_value("123456");
    assert_eq!(completions(&drain(&mut controller)), 2);
}

#[test]
fn external_reset_then_refill_completes_again() {
    let mut controller = OtpFieldController::new();
    controller.observe_value("123456");
    controller.observe_value("");
    controller.observe_value("123456");
    assert_eq!(completions(&drain(&mut controller)), 2);
}
