//! Raw buffer decoding.
//!
//! A [`PixelLayout`] describes how pixels sit in a byte buffer: dimensions,
//! the stride in bytes between scanline starts, bytes per pixel, and the
//! order of the color channels. The stride may exceed the packed scanline
//! length (row padding) and is never assumed equal to it.
//!
//! Buffers owned by something else, such as a locked platform bitmap, are
//! read through [`PixelSource`]: the lock guard lives only for the duration
//! of [`decode_source`] and is dropped on every exit path.

use std::fmt;
use std::ops::Deref;

use crate::color::Color;
use crate::grid::{check_dimensions, Grid, RowBuilder};
use crate::trace::{trace_event, trace_span};
use crate::util::{GridMatchError, GridMatchResult};

/// Byte order of the color channels of one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// Blue, green, red. The usual layout of 24-bit platform bitmaps.
    #[default]
    Bgr,
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red, alpha. Alpha is skipped.
    Bgra,
    /// Red, green, blue, alpha. Alpha is skipped.
    Rgba,
    /// Alpha, red, green, blue. Alpha is skipped.
    Argb,
    /// One luminance byte replicated into all three channels.
    Gray,
}

impl ChannelOrder {
    /// Number of bytes one pixel occupies in this order.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ChannelOrder::Bgr | ChannelOrder::Rgb => 3,
            ChannelOrder::Bgra | ChannelOrder::Rgba | ChannelOrder::Argb => 4,
            ChannelOrder::Gray => 1,
        }
    }

    /// Lowercase name, as used in configs and `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            ChannelOrder::Bgr => "bgr",
            ChannelOrder::Rgb => "rgb",
            ChannelOrder::Bgra => "bgra",
            ChannelOrder::Rgba => "rgba",
            ChannelOrder::Argb => "argb",
            ChannelOrder::Gray => "gray",
        }
    }

    /// Reads one pixel; `bytes` holds exactly `bytes_per_pixel()` bytes.
    #[inline]
    fn read(self, bytes: &[u8]) -> Color {
        match self {
            ChannelOrder::Bgr | ChannelOrder::Bgra => Color::rgb(bytes[2], bytes[1], bytes[0]),
            ChannelOrder::Rgb | ChannelOrder::Rgba => Color::rgb(bytes[0], bytes[1], bytes[2]),
            ChannelOrder::Argb => Color::rgb(bytes[1], bytes[2], bytes[3]),
            ChannelOrder::Gray => Color::gray(bytes[0]),
        }
    }

    /// Appends one pixel; alpha is written opaque and gray uses the mean channel.
    #[inline]
    fn write(self, color: Color, out: &mut Vec<u8>) {
        let Color { r, g, b } = color;
        match self {
            ChannelOrder::Bgr => out.extend_from_slice(&[b, g, r]),
            ChannelOrder::Rgb => out.extend_from_slice(&[r, g, b]),
            ChannelOrder::Bgra => out.extend_from_slice(&[b, g, r, u8::MAX]),
            ChannelOrder::Rgba => out.extend_from_slice(&[r, g, b, u8::MAX]),
            ChannelOrder::Argb => out.extend_from_slice(&[u8::MAX, r, g, b]),
            ChannelOrder::Gray => {
                let mean = (r as u16 + g as u16 + b as u16) / 3;
                out.push(mean as u8);
            }
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry and pixel format of a raw buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    /// Pixels per scanline.
    pub width: usize,
    /// Number of scanlines.
    pub height: usize,
    /// Bytes between the starts of consecutive scanlines.
    pub stride: usize,
    /// Bytes per pixel; must agree with `channel_order`.
    pub bytes_per_pixel: usize,
    pub channel_order: ChannelOrder,
}

impl PixelLayout {
    /// Layout with an explicit stride; bytes per pixel follow the channel order.
    pub fn new(width: usize, height: usize, stride: usize, channel_order: ChannelOrder) -> Self {
        Self {
            width,
            height,
            stride,
            bytes_per_pixel: channel_order.bytes_per_pixel(),
            channel_order,
        }
    }

    /// Layout without row padding.
    pub fn packed(width: usize, height: usize, channel_order: ChannelOrder) -> Self {
        let stride = width.saturating_mul(channel_order.bytes_per_pixel());
        Self::new(width, height, stride, channel_order)
    }

    /// Checks the layout against a buffer of `buffer_len` bytes.
    ///
    /// Returns the packed length of one scanline in bytes.
    pub fn validate(&self, buffer_len: usize) -> GridMatchResult<usize> {
        check_dimensions(self.width, self.height)?;
        if self.bytes_per_pixel != self.channel_order.bytes_per_pixel() {
            return Err(GridMatchError::InvalidFormat {
                bytes_per_pixel: self.bytes_per_pixel,
                channel_order: self.channel_order.name(),
            });
        }
        let line_len = self
            .width
            .checked_mul(self.bytes_per_pixel)
            .ok_or(GridMatchError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        if self.stride < line_len {
            return Err(GridMatchError::InvalidStride {
                min_stride: line_len,
                stride: self.stride,
            });
        }
        let needed = self
            .stride
            .checked_mul(self.height)
            .ok_or(GridMatchError::OutOfBounds {
                needed: usize::MAX,
                got: buffer_len,
            })?;
        if buffer_len < needed {
            return Err(GridMatchError::OutOfBounds {
                needed,
                got: buffer_len,
            });
        }
        Ok(line_len)
    }
}

/// Decodes `buffer` into a grid according to `layout`.
///
/// Either the whole grid is produced or an error is returned; nothing of the
/// buffer is retained.
pub fn decode(buffer: &[u8], layout: PixelLayout) -> GridMatchResult<Grid> {
    let line_len = layout.validate(buffer.len())?;
    let PixelLayout {
        width,
        height,
        stride,
        bytes_per_pixel,
        channel_order,
    } = layout;

    let _span = trace_span!("decode", width = width, height = height, stride = stride).entered();

    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        // validate() bounds stride * height by the buffer length
        let start = y * stride;
        let line = buffer
            .get(start..start + line_len)
            .ok_or(GridMatchError::OutOfBounds {
                needed: start + line_len,
                got: buffer.len(),
            })?;
        let mut builder = RowBuilder::with_capacity(y, 0, width);
        builder.push_all(
            line.chunks_exact(bytes_per_pixel)
                .map(|px| channel_order.read(px)),
        )?;
        rows.push(builder.finish());
    }

    trace_event!("decoded", pixels = width * height);
    Ok(Grid::from_decoded_rows(width, rows))
}

/// Encodes a grid into a tightly packed buffer (`stride == width * bpp`).
pub fn encode(grid: &Grid, channel_order: ChannelOrder) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(grid.width() * grid.height() * channel_order.bytes_per_pixel());
    for row in grid {
        for pixel in row {
            channel_order.write(pixel.color(), &mut out);
        }
    }
    out
}

/// A pixel buffer that must be locked before it can be read.
///
/// The lock guard releases the underlying resource when dropped.
pub trait PixelSource {
    /// Guard giving read access to the raw bytes while the lock is held.
    type Lock<'a>: Deref<Target = [u8]>
    where
        Self: 'a;

    /// Describes the buffer exposed by [`PixelSource::lock`].
    fn layout(&self) -> PixelLayout;

    /// Acquires read access to the buffer.
    fn lock(&self) -> GridMatchResult<Self::Lock<'_>>;
}

/// Locks `source`, decodes it, and releases the lock whether or not
/// decoding succeeds.
pub fn decode_source<S: PixelSource>(source: &S) -> GridMatchResult<Grid> {
    let layout = source.layout();
    let guard = source.lock()?;
    let grid = decode(&guard, layout);
    drop(guard);
    grid
}

/// An in-memory buffer with its layout.
#[derive(Clone, Debug)]
pub struct OwnedBuffer {
    data: Vec<u8>,
    layout: PixelLayout,
}

impl OwnedBuffer {
    /// Wraps raw bytes described by `layout`. Layout errors surface on decode.
    pub fn new(data: Vec<u8>, layout: PixelLayout) -> Self {
        Self { data, layout }
    }

    /// Encodes `grid` into a packed buffer with the given channel order.
    pub fn from_grid(grid: &Grid, channel_order: ChannelOrder) -> Self {
        Self {
            data: encode(grid, channel_order),
            layout: PixelLayout::packed(grid.width(), grid.height(), channel_order),
        }
    }

    /// Raw bytes, including any row padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Gives the bytes back.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl PixelSource for OwnedBuffer {
    type Lock<'a> = &'a [u8];

    fn layout(&self) -> PixelLayout {
        self.layout
    }

    fn lock(&self) -> GridMatchResult<&[u8]> {
        Ok(&self.data)
    }
}
