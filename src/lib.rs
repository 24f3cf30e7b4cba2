// Session core, effect runtime and rendering. main.rs only wires the
// terminal, config and logging around it; benchmarks and integration tests
// drive the same modules directly.

pub mod clock;
pub mod command;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod generator;
pub mod keyboard;
pub mod logging;
pub mod message;
pub mod runtime;
pub mod session;
pub mod store;
pub mod ui;
