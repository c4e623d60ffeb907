//! Low-level building blocks for custom search loops.
//!
//! Most users should prefer [`Matcher`](crate::Matcher) or
//! [`find_template`](crate::find_template); these helpers expose the
//! per-window and per-run comparisons those are built from.

pub use crate::grid::row::colors_within_tolerance;
pub use crate::search::scan::window_matches;
