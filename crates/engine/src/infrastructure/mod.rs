//! Infrastructure - ports and the adapters behind them.

pub mod config;
pub mod example_service;
pub mod ports;
