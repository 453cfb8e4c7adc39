//! Shared value types.

pub mod usage;

pub use usage::{Cost, Usage};
