//! Example use cases.

mod command;

pub use command::ExampleCommand;
