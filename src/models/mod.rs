//! Models Module
//!
//! Typed response structures for the PaceMan APIs.

pub mod live;
pub mod stats;

pub use live::*;
pub use stats::*;
