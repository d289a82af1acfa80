//! Coach journal backend: practice logs, skill evaluations, and rubric-driven coaching tips.

pub mod config;
pub mod error;
pub mod journal;
pub mod rubric;
pub mod telemetry;
