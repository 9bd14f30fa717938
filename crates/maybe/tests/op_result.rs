use maybe::{Error, ErrorNotProvided, ErrorValue, Maybe, OpResult, Shape, Shaped, TypedOpResult};
use std::collections::HashSet;
use std::{fmt, io};

#[derive(Debug)]
struct AccessViolation(&'static str);

impl fmt::Display for AccessViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for AccessViolation {}

#[test]
fn empty_success_properties() {
    let ok = OpResult::success();
    assert!(ok.is_success());
    assert!(!ok.is_failure());
    assert!(!ok.has_error());
    assert!(matches!(ok.error(), Err(Error::InvalidState(_))));
    assert_eq!(ok.shape(), Shape::Empty);
}

#[test]
fn empty_successes_are_all_equal() {
    assert_eq!(OpResult::success(), OpResult::success());
    assert_eq!(OpResult::default(), OpResult::Success);
}

#[test]
fn untyped_failure_without_error_stays_usable() {
    let bad = OpResult::failure(None);
    assert!(bad.is_failure());
    assert!(!bad.is_success());
    assert!(!bad.has_error());
    assert!(bad.is_empty_value());

    let err = bad.error().expect("a failure always exposes an error");
    assert!(err.is_error_not_provided());
    assert_eq!(err.to_string(), ErrorNotProvided::DEFAULT_MESSAGE);
}

#[test]
fn untyped_failure_with_error_exposes_it() {
    let cause = ErrorValue::new(AccessViolation("Hands off!"));
    let failed = OpResult::fail(cause.clone());
    assert!(failed.is_failure());
    assert!(failed.has_error());
    assert_eq!(failed.error(), Ok(&cause));
    assert!(failed.error().is_ok_and(|e| e.is::<AccessViolation>()));
    assert_eq!(failed.error().map(ToString::to_string), Ok("Hands off!".to_string()));
}

#[test]
fn untyped_failure_from_anyhow() {
    let failed = OpResult::fail(ErrorValue::from_anyhow(anyhow::anyhow!("disk full")));
    assert!(failed.has_error());
    assert_eq!(failed.into_std().unwrap_err().to_string(), "disk full");
}

#[test]
fn failures_accept_std_errors_directly() {
    let failed = OpResult::fail(io::Error::new(io::ErrorKind::NotFound, "no such file"));
    assert!(failed.has_error());
    assert!(failed.error().is_ok_and(|e| e.is::<io::Error>()));

    let typed = TypedOpResult::<u8>::fail(AccessViolation("nope"));
    assert!(typed.result().is_err_and(|e| e.is::<AccessViolation>()));
}

fn load(ok: bool) -> anyhow::Result<u8> {
    let outcome = if ok { TypedOpResult::success(7) } else { TypedOpResult::fail(AccessViolation("denied")) };
    let value = outcome.into_result()?;
    Ok(value)
}

#[test]
fn error_values_flow_into_anyhow() {
    assert_eq!(load(true).ok(), Some(7));
    let err = load(false).unwrap_err();
    assert_eq!(err.to_string(), "denied");

    // A shared handle still converts; the message is preserved.
    let shared = ErrorValue::msg("still referenced");
    let keep = shared.clone();
    let converted: anyhow::Error = shared.into();
    assert_eq!(converted.to_string(), keep.to_string());
}

#[test]
fn stored_failures_are_found_in_hashed_sets() {
    let mut untyped = HashSet::new();
    let failed = OpResult::fail(ErrorValue::msg("x"));
    let earlier_clone = failed.clone();
    untyped.insert(failed);
    untyped.insert(OpResult::success());
    assert_eq!(untyped.len(), 2);
    assert_eq!(untyped.iter().filter(|r| untyped.contains(*r)).count(), 2);
    assert!(untyped.contains(&OpResult::success()));
    // A clone is a separate occurrence.
    assert!(!untyped.contains(&earlier_clone));

    let mut typed = HashSet::new();
    typed.insert(TypedOpResult::<u32>::failure(None));
    typed.insert(TypedOpResult::success(4));
    let moved: Vec<_> = typed.into_iter().collect();
    let rebuilt: HashSet<_> = moved.iter().collect();
    assert!(moved.iter().all(|r| rebuilt.contains(r)));
    assert!(rebuilt.contains(&TypedOpResult::success(4)));
}

#[test]
fn untyped_std_bridge() {
    assert_eq!(OpResult::success().into_std().ok(), Some(()));
    let from_err: OpResult = Err::<(), _>(ErrorValue::msg("nope")).into();
    assert!(from_err.has_error());
    let from_ok: OpResult = Ok::<(), ErrorValue>(()).into();
    assert!(from_ok.is_success());
}

#[test]
fn valued_success_rejects_absent_result() {
    let err = TypedOpResult::<Vec<u8>>::try_success(None).unwrap_err();
    assert_eq!(err, Error::ArgumentInvalid("result"));
}

#[test]
fn valued_success_properties() {
    let text = "I'd rather be using something else.".to_string();
    let ok = TypedOpResult::success(text.clone());

    assert!(ok.is_success());
    assert!(!ok.is_failure());
    assert!(!ok.has_error());
    assert!(ok.has_result());
    assert!(matches!(ok.error(), Err(Error::InvalidState(_))));
    assert_eq!(ok.result(), Ok(&text));
    assert_eq!(ok.shape(), Shape::Valued);
    assert_eq!(ok.iter().cloned().collect::<Vec<_>>(), vec![text.clone()]);
    assert_eq!(ok.as_maybe(), Maybe::of(&text));
    assert_eq!(ok.clone().into_maybe(), Maybe::of(text.clone()));
    assert_eq!(ok.result_or("will do just fine".to_string()), text);
}

#[test]
fn valued_successes_with_equal_results_are_equal() {
    let line = "Which way's the audience?";
    assert_eq!(TypedOpResult::success(line), TypedOpResult::success(line));
    assert_ne!(TypedOpResult::success(1), TypedOpResult::success(2));
    assert_eq!(TypedOpResult::try_success(Some(9)), Ok(TypedOpResult::success(9)));
}

#[test]
fn typed_failure_without_error_propagates_the_placeholder() {
    let bad = TypedOpResult::<i32>::failure(None);
    assert!(bad.is_failure());
    assert!(!bad.is_success());
    assert!(!bad.has_error());
    assert!(!bad.has_result());
    assert!(bad.error().is_ok_and(ErrorValue::is_error_not_provided));

    let forced = bad.result().unwrap_err();
    assert!(forced.is_error_not_provided());
    assert_eq!(forced.downcast_ref::<ErrorNotProvided>(), Some(&ErrorNotProvided::new()));

    assert_eq!(bad.iter().count(), 0);
    assert_eq!(bad.result_or(42), 42);
}

#[test]
fn typed_failure_with_error_propagates_the_cause() {
    let cause = ErrorValue::new(AccessViolation("No touchy!"));
    let failed = TypedOpResult::<i32>::fail(cause.clone());

    assert!(failed.is_failure());
    assert!(failed.has_error());
    assert!(!failed.has_result());
    assert_eq!(failed.error(), Ok(&cause));

    // The stored cause itself, not a generic invalid-state error.
    let forced = failed.result().unwrap_err();
    assert_eq!(forced, cause);
    assert!(forced.is::<AccessViolation>());

    assert_eq!(failed.iter().next(), None);
    assert_eq!(failed.clone().result_or_else(|| 42), 42);
    assert_eq!(failed.into_result().unwrap_err(), cause);
}

#[test]
fn typed_failures_are_never_equal_to_each_other() {
    let cause = ErrorValue::new(AccessViolation("Get your own sandwich!"));
    let a = TypedOpResult::<u64>::fail(cause.clone());
    let b = TypedOpResult::<u64>::fail(cause);
    assert_ne!(a, b);
    assert_ne!(a, a.clone());
    assert_ne!(TypedOpResult::<u64>::failure(None), TypedOpResult::failure(None));
    assert_ne!(OpResult::failure(None), OpResult::failure(None));
    assert_ne!(a, TypedOpResult::success(0));
}

#[test]
fn typed_std_bridges() {
    let failed: anyhow::Result<u8> = Err(anyhow::anyhow!("bad byte"));
    let from_anyhow: TypedOpResult<u8> = failed.into();
    assert!(from_anyhow.has_error());

    let from_std: TypedOpResult<u8> = Ok::<u8, ErrorValue>(3).into();
    assert_eq!(from_std.into_result().ok(), Some(3));
}

#[test]
fn typed_results_iterate_by_value() {
    let collected: Vec<String> = TypedOpResult::success("x".to_string()).into_iter().collect();
    assert_eq!(collected, vec!["x".to_string()]);
    assert_eq!(TypedOpResult::<String>::failure(None).into_iter().count(), 0);
}

#[test]
fn placeholder_with_inner_cause_is_reported() {
    let root = ErrorValue::msg("socket closed");
    let placeholder = ErrorValue::new(ErrorNotProvided::with_inner("", root.clone()));
    let failed = OpResult::fail(placeholder);

    // A real error was supplied, even though it is a placeholder type.
    assert!(failed.has_error());
    let err = failed.error().unwrap();
    let inner = err.downcast_ref::<ErrorNotProvided>().and_then(ErrorNotProvided::inner);
    assert_eq!(inner, Some(&root));
}
