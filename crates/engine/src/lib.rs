//! Doublecheck Engine library.
//!
//! A command that delegates to a service, and the doubles that stand in for
//! that service under test.
//!
//! ## Structure
//!
//! - `infrastructure/` - The service port, its real adapter, configuration
//! - `use_cases/` - The example command
//! - `doubles/` - Full and partial substitutes for the service port
//! - `app` - Application composition

pub mod app;
pub mod doubles;
pub mod infrastructure;
pub mod use_cases;


pub use app::App;
