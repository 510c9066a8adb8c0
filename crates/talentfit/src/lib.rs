//! Scoring core for the recruiting marketplace.
//!
//! Three independent pieces live here: the personality quiz (`quiz`), seeker/job
//! compatibility scoring (`matching`), and the status transition tables for job posts
//! and applications (`lifecycle`). All of them are synchronous and side-effect free;
//! persistence and transport stay with the caller.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod matching;
pub mod quiz;
pub mod telemetry;
