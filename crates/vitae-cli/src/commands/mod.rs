//! Command implementations.

pub mod lang;
pub mod render;
pub mod status;
