#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! The containers use serde's default externally tagged enum representation.

use lawful::control::{Maybe, Outcome};
use lawful::typeclass::Identity;
use rstest::rstest;

#[rstest]
fn maybe_json_roundtrip() {
    let present: Maybe<String> = Maybe::Present("report-002".to_string());
    let absent: Maybe<String> = Maybe::Absent;

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    assert_eq!(present_json, r#"{"Present":"report-002"}"#);
    assert_eq!(absent_json, r#""Absent""#);

    let restored_present: Maybe<String> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<String> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn outcome_json_roundtrip() {
    let failure: Outcome<String, Vec<u32>> = Outcome::Failure("Report has no numbers".to_string());
    let success: Outcome<String, Vec<u32>> = Outcome::Success((1..=3).collect());

    let failure_json = serde_json::to_string(&failure).unwrap();
    let success_json = serde_json::to_string(&success).unwrap();

    assert_eq!(failure_json, r#"{"Failure":"Report has no numbers"}"#);
    assert_eq!(success_json, r#"{"Success":[1,2,3]}"#);

    let restored_failure: Outcome<String, Vec<u32>> = serde_json::from_str(&failure_json).unwrap();
    let restored_success: Outcome<String, Vec<u32>> = serde_json::from_str(&success_json).unwrap();

    assert_eq!(failure, restored_failure);
    assert_eq!(success, restored_success);
}

#[rstest]
fn nested_containers_roundtrip() {
    let nested: Outcome<String, Maybe<Identity<i32>>> = Outcome::Success(Maybe::Present(Identity::new(7)));
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Outcome<String, Maybe<Identity<i32>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

#[rstest]
fn unknown_case_is_rejected() {
    let result: Result<Maybe<i32>, _> = serde_json::from_str(r#"{"Missing":1}"#);
    assert!(result.is_err());
}
