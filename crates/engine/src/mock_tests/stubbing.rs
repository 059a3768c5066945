//! Stubbed return values, call counts, consecutive answers and failures.

use std::sync::Arc;

use doublecheck_domain::Value;
use mockall::predicate::*;

use crate::doubles::{Operation, ServiceDouble, Times};
use crate::infrastructure::ports::{ExampleService, MockExampleService, ServiceError};
use crate::use_cases::ExampleCommand;

#[test]
fn command_returns_stubbed_value_called_once() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .with(eq(Value::from("bar")))
        .times(1)
        .returning(|_| Ok(Value::from("foo")));

    let command = ExampleCommand::new(Arc::new(mock));

    assert_eq!(
        command.execute(&Value::from("bar")).unwrap(),
        Value::from("foo")
    );
}

#[test]
fn command_records_single_invocation_on_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::once())
        .with("bar")
        .will_return("foo");
    let double = Arc::new(double);

    let command = ExampleCommand::new(double.clone());

    assert_eq!(
        command.execute(&Value::from("bar")).unwrap(),
        Value::from("foo")
    );
    let calls = double.invocations();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, Operation::DoSomething);
    assert_eq!(calls[0].arg, Value::from("bar"));
    assert!(double.verify().is_ok());
}

#[test]
fn unstubbed_double_returns_neutral_value() {
    let double = ServiceDouble::new();

    assert_eq!(
        double.do_something(&Value::from("bar")).unwrap(),
        Value::Null
    );
}

#[test]
fn mock_can_return_default_value() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .return_const(Ok::<_, ServiceError>(Value::default()));

    assert!(mock.do_something(&Value::from("bar")).unwrap().is_null());
}

#[test]
#[should_panic(expected = "No matching expectation found")]
fn mock_without_expectation_panics() {
    let mock = MockExampleService::new();
    let _ = mock.do_something(&Value::from("bar"));
}

#[test]
fn consecutive_returns_with_mock() {
    let mut mock = MockExampleService::new();
    let mut next = 0;
    mock.expect_do_something()
        .times(2)
        .returning(move |_| {
            next += 1;
            Ok(Value::Int(next))
        });

    for expected in [1, 2] {
        assert_eq!(
            mock.do_something(&Value::from("bar")).unwrap(),
            Value::Int(expected)
        );
    }
}

#[test]
fn consecutive_returns_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .will_return_consecutive([1, 2]);

    assert_eq!(
        double.do_something(&Value::from("bar")).unwrap(),
        Value::Int(1)
    );
    assert_eq!(double.do_something(&Value::Int(42)).unwrap(), Value::Int(2));
}

#[test]
fn stubbed_failure_reaches_caller() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .returning(|_| Err(ServiceError::runtime("stubbed")));

    let command = ExampleCommand::new(Arc::new(mock));
    let result = command.execute(&Value::from("bar"));

    assert!(matches!(result, Err(ServiceError::Runtime(_))));
}

#[test]
fn stubbed_failure_on_double_is_not_wrapped() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .will_fail(ServiceError::runtime("stubbed"));

    let command = ExampleCommand::new(Arc::new(double));

    assert_eq!(
        command.execute(&Value::from("bar")),
        Err(ServiceError::runtime("stubbed"))
    );
}

fn even_or_invalid(arg: &Value) -> Result<Value, ServiceError> {
    match arg.as_int() {
        Some(n) if n % 2 == 0 => Ok(Value::Int(n)),
        _ => Err(ServiceError::invalid_argument(arg)),
    }
}

#[test]
fn callback_computes_answer_with_mock() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something().returning(even_or_invalid);

    assert_eq!(mock.do_something(&Value::Int(10)).unwrap(), Value::Int(10));
    assert!(mock
        .do_something(&Value::Int(9))
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn callback_computes_answer_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .will_return_callback(even_or_invalid);

    assert_eq!(
        double.do_something(&Value::Int(10)).unwrap(),
        Value::Int(10)
    );
    assert_eq!(
        double.do_something(&Value::Int(9)),
        Err(ServiceError::InvalidArgument("9".to_string()))
    );
}

#[test]
fn call_count_ranges_with_mock() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .times(2..)
        .returning(|_| Ok(Value::Null));
    mock.expect_non_mocked_method()
        .times(0..=1)
        .returning(|_| Ok(Value::Null));

    for _ in 0..3 {
        mock.do_something(&Value::Null).unwrap();
    }
}

#[test]
fn call_count_bounds_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::at_least(2));
    double
        .expect(Operation::NonMockedMethod)
        .times(Times::at_most(1));

    double.do_something(&Value::Null).unwrap();
    assert!(double.verify().is_err());

    double.do_something(&Value::Null).unwrap();
    double.non_mocked_method(&Value::Null).unwrap();
    assert!(double.verify().is_ok());
}
