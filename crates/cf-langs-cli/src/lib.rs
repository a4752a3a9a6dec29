//! cf-langs CLI — list the judge's submission languages from the terminal.

pub mod commands;
pub mod config;

pub use config::{resolve_submit_url, resolve_timeout};
