//! Processor Insights — Shared Library
//!
//! This crate contains the portfolio store, merchant health scoring,
//! routing and cost simulation, and the insight engine used across all
//! API handlers.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod format;
pub mod health;
pub mod models;
pub mod report;
pub mod simulator;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
