//! Argument matchers: equality, identity, type, substring, thresholds,
//! callbacks and per-call sequences.

use std::sync::Arc;

use doublecheck_domain::{ExampleDependency, Value, ValueKind};
use mockall::predicate::*;
use mockall::Sequence;

use crate::doubles::{ArgMatcher, Operation, ServiceDouble, Times};
use crate::infrastructure::ports::{ExampleService, MockExampleService};

fn args(values: Vec<Value>) -> Value {
    Value::from(values)
}

#[test]
fn equal_to_with_mock() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .with(eq(Value::from("bar")))
        .times(1)
        .returning(|_| Ok(Value::Null));

    mock.do_something(&Value::from("bar")).unwrap();
}

#[test]
fn equal_to_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::once())
        .with(ArgMatcher::equal_to("bar"));

    double.do_something(&Value::from("bar")).unwrap();

    assert!(double.verify().is_ok());
}

#[test]
fn multiple_arguments_with_mock() {
    let matcher = ArgMatcher::positional(vec![
        ArgMatcher::string_contains("foo"),
        ArgMatcher::greater_than_or_equal(100),
        ArgMatcher::anything(),
    ]);

    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .with(function(move |arg: &Value| matcher.matches(arg)))
        .times(1)
        .returning(|_| Ok(Value::Null));

    let call = args(vec![Value::from("foobar"), Value::Int(101), Value::Null]);
    mock.do_something(&call).unwrap();
}

#[test]
fn multiple_arguments_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::once())
        .with_args(vec![
            ArgMatcher::string_contains("foo"),
            ArgMatcher::greater_than_or_equal(100),
            ArgMatcher::anything(),
        ]);

    let call = args(vec![Value::from("foobar"), Value::Int(101), Value::Null]);
    double.do_something(&call).unwrap();

    assert!(double.verify().is_ok());
}

#[test]
fn consecutive_arguments_with_mock() {
    let first = ArgMatcher::positional(vec![
        ArgMatcher::string_contains("foo"),
        ArgMatcher::greater_than_or_equal(100),
    ]);
    let second = ArgMatcher::positional(vec![
        ArgMatcher::is_null(),
        ArgMatcher::greater_than_or_equal(10),
    ]);

    let mut mock = MockExampleService::new();
    let mut seq = Sequence::new();
    mock.expect_do_something()
        .withf(move |arg| first.matches(arg))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Value::Null));
    mock.expect_do_something()
        .withf(move |arg| second.matches(arg))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Value::Null));

    mock.do_something(&args(vec![Value::from("foobar"), Value::Int(100)]))
        .unwrap();
    mock.do_something(&args(vec![Value::Null, Value::Int(15)]))
        .unwrap();
}

#[test]
fn consecutive_arguments_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::exactly(2))
        .with_consecutive(vec![
            ArgMatcher::positional(vec![
                ArgMatcher::string_contains("foo"),
                ArgMatcher::greater_than_or_equal(100),
            ]),
            ArgMatcher::positional(vec![
                ArgMatcher::is_null(),
                ArgMatcher::greater_than_or_equal(10),
            ]),
        ]);

    double
        .do_something(&args(vec![Value::from("foobar"), Value::Int(100)]))
        .unwrap();
    double
        .do_something(&args(vec![Value::Null, Value::Int(15)]))
        .unwrap();

    assert!(double.verify().is_ok());
}

#[test]
fn consecutive_arguments_out_of_order_fail_verification() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::exactly(2))
        .with_consecutive(vec![ArgMatcher::is_null(), ArgMatcher::equal_to(1)]);

    double.do_something(&Value::Int(1)).unwrap();
    double.do_something(&Value::Null).unwrap();

    let err = double.verify().unwrap_err();
    assert_eq!(err.violations().len(), 2);
}

#[test]
fn callback_argument_with_mock() {
    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .withf(|arg| {
            arg.as_object()
                .is_some_and(|dep| dep.example_method() == "Example string")
        })
        .times(1)
        .returning(|_| Ok(Value::Null));

    mock.do_something(&Value::from(ExampleDependency::default()))
        .unwrap();
}

#[test]
fn callback_argument_with_double() {
    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::once())
        .with(ArgMatcher::logical_and(vec![
            ArgMatcher::is_instance_of(ValueKind::Object),
            ArgMatcher::callback(|arg| {
                arg.as_object()
                    .is_some_and(|dep| dep.example_method() == "Example string")
            }),
        ]));

    double
        .do_something(&Value::from(ExampleDependency::default()))
        .unwrap();

    assert!(double.verify().is_ok());
}

#[test]
fn identical_to_with_mock() {
    let dependency = Arc::new(ExampleDependency::default());
    let expected = Arc::clone(&dependency);

    let mut mock = MockExampleService::new();
    mock.expect_do_something()
        .withf(move |arg| arg.is_same_instance(&expected))
        .times(1)
        .returning(|_| Ok(Value::Null));

    mock.do_something(&Value::from(dependency)).unwrap();
}

#[test]
fn identical_to_rejects_equal_copy() {
    let dependency = Arc::new(ExampleDependency::default());
    let copy = Arc::new(ExampleDependency::default());

    let mut double = ServiceDouble::new();
    double
        .expect(Operation::DoSomething)
        .times(Times::once())
        .with(ArgMatcher::identical_to(&dependency))
        .will_return("matched");

    assert_eq!(
        double.do_something(&Value::from(copy)).unwrap(),
        Value::Null
    );
    assert_eq!(
        double.do_something(&Value::from(dependency)).unwrap(),
        Value::from("matched")
    );

    let err = double.verify().unwrap_err();
    assert_eq!(err.violations().len(), 1);
}
