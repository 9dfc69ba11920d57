//! CLI commands.

pub mod highlight;
pub mod languages;
pub mod tokens;
