//! Command handlers.

pub mod analyze;
pub mod rules;
