//! Command implementations.

pub mod dist;
pub mod list;
pub mod metadata;
