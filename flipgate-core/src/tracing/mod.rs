//! Tracing setup for the Flipgate engine.

pub mod setup;

pub use setup::init_tracing;
