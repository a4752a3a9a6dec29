//! Subcommand handlers.

pub mod ext;
pub mod fetch;
pub mod list;
pub mod output;
