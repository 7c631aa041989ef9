//! Procon Signal - Heuristic weighting of pros and cons.
//!
//! This crate turns free-text pro and con statements into 1-5 weights,
//! section summaries and an overall decision signal.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
