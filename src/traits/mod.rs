//! Core trait abstractions for the simulator.

mod from_config;

pub use from_config::FromConfig;
