//! Command handlers.

pub mod clean;
