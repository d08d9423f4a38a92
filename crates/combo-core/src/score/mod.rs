//! Score types.
//!
//! - `ScoreTier` - the closed set of combination ratings (4, 2, 1)
//! - `ScoreTable` - genre → game → tier lookup built at startup

mod table;
mod tier;

pub use table::*;
pub use tier::*;
