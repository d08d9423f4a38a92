//! Command-line and terminal front ends for combo-core.

pub mod cli;
pub mod cli_utils;
pub mod commands;
pub mod tui;
