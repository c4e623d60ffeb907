//! Pixel grids decoded from raw buffers.
//!
//! A [`Grid`] is a list of [`Row`]s, one per scanline, all of the same
//! width. Every pixel records its own position, and `grid[y][x]` is always
//! the pixel at `(x, y)`. Grids own their pixels and never borrow the buffer
//! they were decoded from.

use std::collections::BTreeSet;
use std::ops::Index;

use crate::color::{Color, Tolerance};
use crate::util::{GridMatchError, GridMatchResult};

pub mod decode;
#[cfg(feature = "image-io")]
pub mod io;
pub(crate) mod row;

pub(crate) use row::colors_within_tolerance;
pub use row::{Row, RowBuilder};

/// Integer grid coordinates, `x` to the right and `y` down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Creates a position from column `x` and scanline `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// A single colored sample at its location in the owning grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    position: Position,
    color: Color,
}

impl Pixel {
    /// Creates a pixel of `color` at `position`.
    pub const fn new(position: Position, color: Color) -> Self {
        Self { position, color }
    }

    /// Location of the pixel in the grid it was decoded from.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Column of the pixel.
    pub fn x(&self) -> usize {
        self.position.x
    }

    /// Scanline of the pixel.
    pub fn y(&self) -> usize {
        self.position.y
    }

    /// Color of the pixel.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Immutable rectangular grid of pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Row>,
}

impl Grid {
    /// Builds a grid from pre-built rows.
    ///
    /// Rows must be non-empty, equally long, start at `x == 0`, and row `i`
    /// must lie on scanline `i`.
    pub fn from_rows(rows: Vec<Row>) -> GridMatchResult<Self> {
        let width = rows.first().map_or(0, Row::len);
        if width == 0 {
            return Err(GridMatchError::InvalidDimensions {
                width,
                height: rows.len(),
            });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridMatchError::LengthMismatch {
                    left: width,
                    right: row.len(),
                });
            }
            if row.y() != y || row.start_x() != 0 {
                return Err(GridMatchError::InvalidRow("row is not at its grid position"));
            }
        }
        Ok(Self { width, rows })
    }

    /// Builds a `width` x `height` grid, asking `color_at(x, y)` for each pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut color_at: F) -> GridMatchResult<Self>
    where
        F: FnMut(usize, usize) -> Color,
    {
        check_dimensions(width, height)?;
        let mut rows = Vec::with_capacity(height);
        for y in 0..height {
            let mut builder = RowBuilder::with_capacity(y, 0, width);
            builder.push_all((0..width).map(|x| color_at(x, y)))?;
            rows.push(builder.finish());
        }
        Ok(Self { width, rows })
    }

    /// Builds a grid of a single color.
    pub fn filled(width: usize, height: usize, color: Color) -> GridMatchResult<Self> {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Wraps rows the decoder has already laid out correctly.
    pub(crate) fn from_decoded_rows(width: usize, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { width, rows }
    }

    /// Number of pixels in every row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns scanline `y`.
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// Returns all scanlines, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.rows.get(y)?.get(x)
    }

    /// Returns `true` when both grids have the same size and every pixel,
    /// position and color, is equal.
    pub fn equals_exact(&self, other: &Grid) -> bool {
        self.width == other.width
            && self.height() == other.height()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| a.equals_exact(b))
    }

    /// Whole-grid comparison under a color tolerance.
    ///
    /// Always fails with [`GridMatchError::NotSupported`]; use
    /// [`Row::equals_within_tolerance`] per row or a template search instead.
    pub fn equals_within_tolerance(
        &self,
        _other: &Grid,
        _tolerance: Tolerance,
    ) -> GridMatchResult<bool> {
        Err(GridMatchError::NotSupported(
            "tolerance-based whole-grid equality",
        ))
    }

    /// Returns every color present in the grid.
    pub fn distinct_colors(&self) -> BTreeSet<Color> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(Pixel::color))
            .collect()
    }

    /// Copies a region into a new grid whose top-left pixel is `(0, 0)`.
    ///
    /// Handy for cutting a template out of a reference screenshot.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> GridMatchResult<Grid> {
        check_dimensions(width, height)?;
        let out_of_bounds = GridMatchError::RegionOutOfBounds {
            x,
            y,
            width,
            height,
            grid_width: self.width,
            grid_height: self.height(),
        };
        let fits = x
            .checked_add(width)
            .is_some_and(|end| end <= self.width)
            && y.checked_add(height)
                .is_some_and(|end| end <= self.height());
        if !fits {
            return Err(out_of_bounds);
        }
        Self::from_fn(width, height, |cx, cy| self.rows[y + cy][x + cx].color())
    }
}

impl Index<usize> for Grid {
    type Output = Row;

    fn index(&self, y: usize) -> &Row {
        &self.rows[y]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> GridMatchResult<()> {
    if width == 0 || height == 0 || width.checked_mul(height).is_none() {
        return Err(GridMatchError::InvalidDimensions { width, height });
    }
    Ok(())
}
