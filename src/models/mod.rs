//! Domain models for the portfolio analytics core.
//!
//! These types are shared across all modules: data, health, simulator, engine, and report.

pub mod merchant;
pub mod processor;
pub mod insight;
pub mod routing;
pub mod report;
