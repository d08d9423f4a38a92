//! Non-interactive command implementations.

pub mod list;
pub mod query;
