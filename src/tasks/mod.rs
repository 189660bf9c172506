//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweep: removes expired cache entries at a configured interval

mod cleanup;

pub use cleanup::spawn_sweeper;
