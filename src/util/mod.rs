//! Utility modules.

pub mod names;
