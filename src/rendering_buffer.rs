//! Pixel buffer — stride-aware storage for packed pixels.
//!
//! A [`PixelBuffer`] is a rectangular window of [`Pixel`]s with a logical
//! width and height and an explicit row stride (pixels per row, which may
//! exceed the width when the backing array carries padding). The backing
//! storage is either owned — allocated zero-filled at construction and freed
//! on drop — or borrowed from the caller, typically the raw pixel array the
//! windowing layer hands over once per frame.
//!
//! Every coordinate-taking operation clips silently: reads outside the
//! logical extent return transparent black, writes outside it do nothing.
//! Callers never bounds-check before drawing.

use log::{debug, error};
use thiserror::Error;

use crate::color::Pixel;
use crate::comp_op;

/// Buffer construction failure.
///
/// Only reachable from [`PixelBuffer::new`]; wrapping caller-supplied
/// storage never fails.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("pixel buffer allocation of {0} bytes failed")]
    Allocation(usize),
}

enum Storage<'a> {
    Owned(Vec<Pixel>),
    Borrowed(&'a mut [Pixel]),
}

impl Storage<'_> {
    #[inline]
    fn pixels(&self) -> &[Pixel] {
        match self {
            Storage::Owned(v) => v.as_slice(),
            Storage::Borrowed(s) => &**s,
        }
    }

    #[inline]
    fn pixels_mut(&mut self) -> &mut [Pixel] {
        match self {
            Storage::Owned(v) => v.as_mut_slice(),
            Storage::Borrowed(s) => &mut **s,
        }
    }
}

/// A stride-aware rectangular pixel buffer.
pub struct PixelBuffer<'a> {
    storage: Storage<'a>,
    width: u32,
    height: u32,
    row_pixels: u32,
}

impl PixelBuffer<'static> {
    /// Allocate an owned, zero-filled buffer.
    ///
    /// `row_pixels` is the stride and must be at least `width`. Allocation
    /// failure is the one construction error callers must check; no
    /// partially-initialized buffer is ever returned.
    pub fn new(width: u32, height: u32, row_pixels: u32) -> Result<Self, BufferError> {
        assert!(row_pixels >= width, "stride {row_pixels} < width {width}");
        let len = row_pixels as usize * height as usize;

        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            let bytes = len * core::mem::size_of::<Pixel>();
            error!("pixel buffer allocation failed: {bytes} bytes");
            return Err(BufferError::Allocation(bytes));
        }
        pixels.resize(len, Pixel(0));

        debug!("allocated {width}x{height} buffer, stride {row_pixels}");
        Ok(Self {
            storage: Storage::Owned(pixels),
            width,
            height,
            row_pixels,
        })
    }
}

impl<'a> PixelBuffer<'a> {
    /// Wrap caller-supplied storage without taking ownership.
    ///
    /// The storage must hold at least `row_pixels × height` pixels. It is
    /// not cleared and is never freed by this buffer.
    pub fn wrap(pixels: &'a mut [Pixel], width: u32, height: u32, row_pixels: u32) -> Self {
        assert!(row_pixels >= width, "stride {row_pixels} < width {width}");
        assert!(
            pixels.len() >= row_pixels as usize * height as usize,
            "storage {} < stride {} x height {}",
            pixels.len(),
            row_pixels,
            height
        );
        Self {
            storage: Storage::Borrowed(pixels),
            width,
            height,
            row_pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels addressable from the start of one row to the next.
    pub fn row_pixels(&self) -> u32 {
        self.row_pixels
    }

    /// Whether the buffer frees its storage on drop.
    pub fn owns_storage(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// The full backing storage, padding included. Read access for external
    /// export/presentation layers.
    pub fn pixels(&self) -> &[Pixel] {
        self.storage.pixels()
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.row_pixels as usize + x as usize
    }

    /// Read the pixel at `(x, y)`, or transparent black outside the logical
    /// extent.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Pixel {
        if !self.in_bounds(x, y) {
            return Pixel(0);
        }
        self.storage.pixels()[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`; no-op outside the logical extent.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Pixel) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x, y);
        self.storage.pixels_mut()[i] = color;
    }

    /// Source-over composite `color` onto the pixel at `(x, y)`; no-op
    /// outside the logical extent.
    #[inline]
    pub fn blend_put(&mut self, x: i32, y: i32, color: Pixel) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x, y);
        let pixels = self.storage.pixels_mut();
        pixels[i] = comp_op::blend(color, pixels[i]);
    }

    /// Overwrite every pixel of the logical extent. Row padding beyond
    /// `width` is untouched.
    pub fn clear(&mut self, color: Pixel) {
        let (w, h) = (self.width, self.height);
        for y in 0..h as i32 {
            self.row_mut(y)[..w as usize].fill(color);
        }
    }

    /// The logical-width slice of row `y`.
    ///
    /// # Panics
    /// `y` must be in `[0, height)`.
    #[inline]
    pub(crate) fn row(&self, y: i32) -> &[Pixel] {
        assert!(y >= 0 && (y as u32) < self.height, "row {y} out of bounds");
        let start = y as usize * self.row_pixels as usize;
        &self.storage.pixels()[start..start + self.width as usize]
    }

    /// The logical-width mutable slice of row `y`.
    #[inline]
    pub(crate) fn row_mut(&mut self, y: i32) -> &mut [Pixel] {
        assert!(y >= 0 && (y as u32) < self.height, "row {y} out of bounds");
        let start = y as usize * self.row_pixels as usize;
        let width = self.width as usize;
        &mut self.storage.pixels_mut()[start..start + width]
    }
}

// ============================================================================
// Tests
// ============================================================================
