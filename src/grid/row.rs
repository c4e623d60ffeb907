//! Scanline rows and their builder.

use std::collections::BTreeSet;
use std::ops::Index;

use crate::color::{Color, Metric, Tolerance};
use crate::grid::{Pixel, Position};
use crate::util::{GridMatchError, GridMatchResult};

/// One scanline: a fixed-length run of pixels sharing the same `y`.
///
/// Index `i` always holds the pixel at `x == start_x + i`. Rows are frozen
/// once built; use [`RowBuilder`] to populate one.
#[derive(Clone, Debug)]
pub struct Row {
    y: usize,
    start_x: usize,
    pixels: Box<[Pixel]>,
}

impl Row {
    /// Builds a row from pixels that already carry their positions.
    ///
    /// The pixels must be non-empty, share one `y`, and have strictly
    /// contiguous, increasing `x` coordinates.
    pub fn from_pixels(pixels: Vec<Pixel>) -> GridMatchResult<Self> {
        let first = pixels
            .first()
            .ok_or(GridMatchError::InvalidRow("row has no pixels"))?;
        let y = first.y();
        let start_x = first.x();
        for (i, pixel) in pixels.iter().enumerate() {
            if pixel.y() != y {
                return Err(GridMatchError::InvalidRow("pixels span several scanlines"));
            }
            if start_x.checked_add(i) != Some(pixel.x()) {
                return Err(GridMatchError::InvalidRow("pixel x is not contiguous"));
            }
        }
        Ok(Self {
            y,
            start_x,
            pixels: pixels.into_boxed_slice(),
        })
    }

    /// Returns the number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` for a zero-length row.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the scanline index shared by every pixel.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns the `x` coordinate of the pixel at index 0.
    pub fn start_x(&self) -> usize {
        self.start_x
    }

    /// Returns the pixel at index `i`.
    pub fn get(&self, i: usize) -> Option<&Pixel> {
        self.pixels.get(i)
    }

    /// Returns all pixels in order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterates over the pixels in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    /// Returns `true` when both rows have the same length and equal pixels,
    /// positions included.
    pub fn equals_exact(&self, other: &Row) -> bool {
        self.pixels == other.pixels
    }

    /// Compares colors pairwise, ignoring positions, using [`Metric::Euclidean`].
    ///
    /// Stops at the first pair whose distance exceeds `tolerance`.
    pub fn equals_within_tolerance(
        &self,
        other: &Row,
        tolerance: Tolerance,
    ) -> GridMatchResult<bool> {
        self.equals_within_tolerance_by(other, tolerance, Metric::Euclidean)
    }

    /// Same as [`Row::equals_within_tolerance`] with an explicit metric.
    pub fn equals_within_tolerance_by(
        &self,
        other: &Row,
        tolerance: Tolerance,
        metric: Metric,
    ) -> GridMatchResult<bool> {
        if self.len() != other.len() {
            return Err(GridMatchError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(colors_within_tolerance(
            &self.pixels,
            &other.pixels,
            tolerance,
            metric,
        ))
    }

    /// Copies the contiguous range `[start, start + len)` into a new row.
    pub fn slice(&self, start: usize, len: usize) -> GridMatchResult<Row> {
        let out_of_range = GridMatchError::OutOfRange {
            start,
            len,
            row_len: self.len(),
        };
        let end = start.checked_add(len).ok_or(out_of_range.clone())?;
        let pixels = self.pixels.get(start..end).ok_or(out_of_range)?;
        Ok(Row {
            y: self.y,
            start_x: self.start_x + start,
            pixels: pixels.into(),
        })
    }

    /// Returns every color present in the row.
    pub fn distinct_colors(&self) -> BTreeSet<Color> {
        self.pixels.iter().map(Pixel::color).collect()
    }

    /// Returns `true` if any pixel has exactly `color`.
    pub fn contains_color(&self, color: Color) -> bool {
        self.pixels.iter().any(|p| p.color() == color)
    }
}

/// Pairwise color comparison of two pixel runs, ignoring positions.
///
/// Runs of different lengths never match.
#[inline]
pub fn colors_within_tolerance(
    a: &[Pixel],
    b: &[Pixel],
    tolerance: Tolerance,
    metric: Metric,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if tolerance == Tolerance::EXACT {
        return a.iter().zip(b).all(|(p, q)| p.color() == q.color());
    }
    a.iter()
        .zip(b)
        .all(|(p, q)| tolerance.admits(metric.distance(p.color(), q.color())))
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.equals_exact(other)
    }
}

impl Eq for Row {}

impl Index<usize> for Row {
    type Output = Pixel;

    fn index(&self, i: usize) -> &Pixel {
        &self.pixels[i]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

/// Incrementally fills a row, then freezes it with [`RowBuilder::finish`].
#[derive(Debug)]
pub struct RowBuilder {
    y: usize,
    start_x: usize,
    pixels: Vec<Pixel>,
}

impl RowBuilder {
    /// Starts an empty row at scanline `y` whose first pixel sits at `start_x`.
    pub fn new(y: usize, start_x: usize) -> Self {
        Self::with_capacity(y, start_x, 0)
    }

    /// Like [`RowBuilder::new`] with room for `capacity` pixels.
    pub fn with_capacity(y: usize, start_x: usize, capacity: usize) -> Self {
        Self {
            y,
            start_x,
            pixels: Vec::with_capacity(capacity),
        }
    }

    /// Appends a pixel at the next `x` position.
    ///
    /// Fails with [`GridMatchError::InvalidRow`] once `x` would overflow,
    /// leaving the builder unchanged.
    pub fn push(&mut self, color: Color) -> GridMatchResult<&mut Self> {
        let x = self
            .start_x
            .checked_add(self.pixels.len())
            .ok_or(GridMatchError::InvalidRow("pixel x overflows usize"))?;
        self.pixels.push(Pixel::new(Position::new(x, self.y), color));
        Ok(self)
    }

    /// Appends every color in order, stopping at the first failed push.
    pub fn push_all<I>(&mut self, colors: I) -> GridMatchResult<&mut Self>
    where
        I: IntoIterator<Item = Color>,
    {
        for color in colors {
            self.push(color)?;
        }
        Ok(self)
    }

    /// Replaces the color of an already pushed pixel.
    pub fn set(&mut self, i: usize, color: Color) -> GridMatchResult<()> {
        let len = self.pixels.len();
        let pixel = self.pixels.get_mut(i).ok_or(GridMatchError::OutOfRange {
            start: i,
            len: 1,
            row_len: len,
        })?;
        *pixel = Pixel::new(pixel.position(), color);
        Ok(())
    }

    /// Returns the number of pixels pushed so far.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` before the first push.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Freezes the row.
    pub fn finish(self) -> Row {
        Row {
            y: self.y,
            start_x: self.start_x,
            pixels: self.pixels.into_boxed_slice(),
        }
    }
}
