//! Gridmatch decodes raw pixel buffers into grids of colored samples and
//! finds template grids inside larger ones.
//!
//! Matching is either exact or bounded by a normalized color distance
//! ([`Tolerance`]). The search is a plain row-major sliding window that
//! reports the first placement where every template row matches.
//!
//! ```
//! use gridmatch::{find_template, Color, Grid, Position, Tolerance};
//!
//! let source = Grid::from_fn(10, 10, |x, y| {
//!     if (2..5).contains(&x) && (2..5).contains(&y) { Color::RED } else { Color::BLACK }
//! })?;
//! let template = Grid::filled(3, 3, Color::RED)?;
//! assert_eq!(find_template(&source, &template, Tolerance::EXACT), Some(Position::new(2, 2)));
//! # Ok::<(), gridmatch::GridMatchError>(())
//! ```

pub mod color;
pub mod grid;
pub mod lowlevel;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use grid::io;

pub use color::{distance, Color, Metric, Tolerance};
pub use grid::decode::{
    decode, decode_source, encode, ChannelOrder, OwnedBuffer, PixelLayout, PixelSource,
};
pub use grid::{Grid, Pixel, Position, Row, RowBuilder};
pub use search::{find_template, find_template_with, MatchConfig, Matcher};
pub use util::{GridMatchError, GridMatchResult};
