//! Checkbox selection and result recomputation.
//!
//! - `CheckList` - one list of labels with independent checked flags
//! - `Signal` - synchronous observer list, called in registration order
//! - `compute_results` - filtered genre × game cross-product, best tier first
//! - `Selector` - owns the table and both lists, recomputes on every change

mod checklist;
mod results;
mod selector;
mod signal;

pub use checklist::*;
pub use results::*;
pub use selector::*;
pub use signal::*;
