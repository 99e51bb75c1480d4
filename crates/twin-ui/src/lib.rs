//! Terminal presentation helpers for the twin CLI.
//!
//! Ayu-themed styling, terminal detection and locale-aware price
//! formatting.

pub mod format;
pub mod styles;
pub mod terminal;

pub use format::PriceFormat;
