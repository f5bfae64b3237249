//! CLI subcommands.

pub mod new;
pub mod render;
pub mod serve;
