//! Integration tests covering the public `Outcome` surface end to end

use outcome::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse_i32(input: &str) -> Outcome<i32, OutcomeError> {
    Outcome::call(|| input.parse::<i32>()).map_error(|e| OutcomeError::other(e.to_string()))
}

#[test]
fn success_should_return_value() {
    let outcome: Outcome<&str, OutcomeError> = Outcome::success("test");

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&"test"));
}

#[test]
fn failure_should_return_error() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::failure(OutcomeError::other("boom"));

    assert!(outcome.is_failure());
    assert!(outcome.error().is_some());
}

#[test]
fn failure_should_return_error_when_message_is_given() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::failure_message("Error message");

    assert!(outcome.is_failure());
    assert_eq!(outcome.error().map(OutcomeError::kind), Some(ErrorKind::IllegalState));
}

#[test]
fn success_should_return_value_when_get() {
    let outcome: Outcome<&str, OutcomeError> = Outcome::success("test");

    assert_eq!(outcome.get(), "test");
}

#[test]
#[should_panic(expected = "on a `Failure`")]
fn failure_should_panic_when_get() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::failure(OutcomeError::other("boom"));

    let _ = outcome.get();
}

#[test]
fn attempt_should_return_success_when_computation_completes() {
    let outcome = Outcome::attempt(|| "test");

    assert_eq!(outcome, Outcome::success("test"));
}

#[test]
fn attempt_should_return_failure_when_computation_panics() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::attempt(|| "abc".parse::<i32>().unwrap());

    assert!(outcome.is_failure());
    assert_eq!(outcome.error().map(OutcomeError::kind), Some(ErrorKind::Panic));
}

#[test]
fn call_should_return_success_when_computation_returns_ok() {
    let outcome = parse_i32("42");

    assert_eq!(outcome, Outcome::success(42));
}

#[test]
fn call_should_return_failure_when_computation_returns_err() {
    let outcome = parse_i32("abc");

    assert!(outcome.is_failure());
}

#[test]
fn success_should_return_some_option() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::success(5);

    assert_eq!(outcome.to_option(), Some(5));
}

#[test]
fn failure_should_return_none_option() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::failure(OutcomeError::other("boom"));

    assert_eq!(outcome.to_option(), None);
}

#[rstest]
#[case(Outcome::success(5), 6, 5)]
#[case(Outcome::failure(OutcomeError::other("boom")), 7, 7)]
fn get_or_else_picks_the_right_side(
    #[case] outcome: Outcome<i32, OutcomeError>,
    #[case] default: i32,
    #[case] expected: i32,
) {
    assert_eq!(outcome.get_or_else(default), expected);
}

#[test]
fn map_should_transform_success() {
    let outcome = Outcome::<i32, OutcomeError>::success(5).map(|v| v.to_string());

    assert_eq!(outcome, Outcome::success("5".to_string()));
}

#[test]
fn map_should_pass_failure_through_unchanged() {
    let error = OutcomeError::other("boom");
    let outcome: Outcome<i32, OutcomeError> = Outcome::failure(error.clone());

    let mapped = outcome.map(|v| v.to_string());

    assert_eq!(mapped, Outcome::failure(error));
}

#[test]
fn map_should_not_call_mapper_on_failure() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::failure(OutcomeError::other("boom"));

    let mapped: Outcome<String, OutcomeError> =
        outcome.map(|_| panic!("should not have been called!"));

    assert!(mapped.is_failure());
}

#[test]
fn map_catch_should_return_failure_when_mapper_panics() {
    let outcome = Outcome::<&str, OutcomeError>::success("abc")
        .map_catch(|s| s.parse::<i32>().unwrap());

    assert!(outcome.is_failure());
    assert_eq!(outcome.error().map(OutcomeError::kind), Some(ErrorKind::Panic));
}

#[test]
fn and_then_should_chain_success() {
    let outcome =
        Outcome::<i32, OutcomeError>::success(5).and_then(|v| Outcome::success(v.to_string()));

    assert_eq!(outcome, Outcome::success("5".to_string()));
}

#[test]
fn and_then_should_surface_failure_from_op() {
    let outcome = Outcome::<&str, OutcomeError>::success("abc").and_then(parse_i32);

    assert!(outcome.is_failure());
}

#[test]
fn and_then_doubles_then_chains() {
    let outcome =
        Outcome::<i32, OutcomeError>::success(5).and_then(|v| Outcome::success(v * 2));

    assert_eq!(outcome, Outcome::success(10));
}

#[test]
fn of_nullable_none_is_null_value_failure() {
    let outcome: Outcome<i32, OutcomeError> = Outcome::of_nullable(None);

    assert_eq!(outcome.error().map(OutcomeError::kind), Some(ErrorKind::NullValue));
}

#[test]
fn of_nullable_some_is_success() {
    assert_eq!(Outcome::of_nullable(Some(5)), Outcome::success(5));
}

#[test]
fn failure_propagates_through_a_whole_chain() {
    let outcome: Outcome<String, OutcomeError> = Outcome::of_nullable(None::<i32>)
        .map(|v| v * 2)
        .and_then(|v| Outcome::success(v + 1))
        .map(|v| v.to_string());

    assert_eq!(outcome.error().map(OutcomeError::kind), Some(ErrorKind::NullValue));
}

#[test]
fn variants_match_like_any_enum() {
    let outcome = parse_i32("42");

    match outcome {
        Success(v) => assert_eq!(v, 42),
        Failure(e) => panic!("unexpected failure: {e}"),
    }
}

#[test]
fn outcome_collects_into_vec_of_successes() {
    let outcomes = vec![parse_i32("1"), parse_i32("x"), parse_i32("3")];
    let values: Vec<i32> = outcomes.into_iter().flatten().collect();

    assert_eq!(values, vec![1, 3]);
}
