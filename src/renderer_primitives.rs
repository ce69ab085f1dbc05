//! Primitive drawing — lines, rectangles, circles.
//!
//! Immediate-mode drawing into a [`PixelBuffer`]. Two write disciplines are
//! used deliberately: the axis-aligned line primitives always composite
//! (they are the building blocks of translucent outlines), while fills
//! always overwrite, which keeps their overlapping interior spans
//! idempotent. The general line exists in both variants, sharing one
//! Bresenham walk.
//!
//! Everything clips against the buffer's logical extent; no primitive ever
//! fails on out-of-range or inverted input.

use crate::basics::Rect;
use crate::circle_bresenham::CircleMidpointInterpolator;
use crate::color::Pixel;
use crate::comp_op::{self, Blender, Src, SrcOver};
use crate::line_bresenham::LineBresenhamInterpolator;
use crate::rendering_buffer::PixelBuffer;

// ============================================================================
// Axis-aligned lines
// ============================================================================

/// Composite a horizontal run of pixels from `x1` to `x2` inclusive.
///
/// The caller must supply `x1 <= x2`; nothing is drawn otherwise. The run
/// is clamped to the buffer's width.
pub fn blend_hline(buf: &mut PixelBuffer, color: Pixel, x1: i32, x2: i32, y: i32) {
    let w = buf.width() as i32;
    let h = buf.height() as i32;
    if x1 > x2 || y < 0 || y >= h || x2 < 0 || x1 >= w {
        return;
    }
    let x1 = x1.max(0) as usize;
    let x2 = x2.min(w - 1) as usize;
    for px in &mut buf.row_mut(y)[x1..=x2] {
        *px = comp_op::blend(color, *px);
    }
}

/// Composite a vertical run of pixels from `y1` to `y2` inclusive.
///
/// The caller must supply `y1 <= y2`; nothing is drawn otherwise. The run
/// is clamped to the buffer's height.
pub fn blend_vline(buf: &mut PixelBuffer, color: Pixel, y1: i32, y2: i32, x: i32) {
    let w = buf.width() as i32;
    let h = buf.height() as i32;
    if y1 > y2 || x < 0 || x >= w || y2 < 0 || y1 >= h {
        return;
    }
    let y1 = y1.max(0);
    let y2 = y2.min(h - 1);
    for y in y1..=y2 {
        buf.blend_put(x, y, color);
    }
}

/// Overwrite a horizontal run of pixels from `x1` to `x2` inclusive.
///
/// Same contract and clipping as [`blend_hline`]; used by the fills.
pub fn copy_hline(buf: &mut PixelBuffer, color: Pixel, x1: i32, x2: i32, y: i32) {
    let w = buf.width() as i32;
    let h = buf.height() as i32;
    if x1 > x2 || y < 0 || y >= h || x2 < 0 || x1 >= w {
        return;
    }
    let x1 = x1.max(0) as usize;
    let x2 = x2.min(w - 1) as usize;
    buf.row_mut(y)[x1..=x2].fill(color);
}

// ============================================================================
// General lines
// ============================================================================

fn line_with<B: Blender>(buf: &mut PixelBuffer, color: Pixel, x1: i32, y1: i32, x2: i32, y2: i32) {
    let mut li = LineBresenhamInterpolator::new(x1, y1, x2, y2);
    // Clipping is per-point: an off-buffer segment is still walked in full
    // but contributes nothing visible.
    while let Some((x, y)) = li.next() {
        let dst = buf.get(x, y);
        buf.put(x, y, B::mix(color, dst));
    }
}

/// Draw a line between two arbitrary endpoints, overwriting.
///
/// The terminal pixel is not plotted; see [`LineBresenhamInterpolator`].
pub fn copy_line(buf: &mut PixelBuffer, color: Pixel, x1: i32, y1: i32, x2: i32, y2: i32) {
    line_with::<Src>(buf, color, x1, y1, x2, y2);
}

/// Draw a line between two arbitrary endpoints, compositing each pixel.
pub fn blend_line(buf: &mut PixelBuffer, color: Pixel, x1: i32, y1: i32, x2: i32, y2: i32) {
    line_with::<SrcOver>(buf, color, x1, y1, x2, y2);
}

// ============================================================================
// Rectangles
// ============================================================================

/// Composite a one-pixel rectangle outline.
///
/// Corners may be given in any order. `right` and `bottom` are exclusive:
/// they are pulled in by one before the inclusive line primitives run. The
/// four corner pixels are each composited exactly once.
pub fn draw_rect(buf: &mut PixelBuffer, color: Pixel, left: i32, top: i32, right: i32, bottom: i32) {
    let mut r = Rect::new(left, top, right, bottom);
    r.normalize();

    let left = r.left;
    let right = r.right - 1;
    let mut top = r.top;
    let mut bottom = r.bottom - 1;

    blend_hline(buf, color, left, right, top);
    blend_hline(buf, color, left, right, bottom);

    // The vertical edges skip their end rows so the corners are not
    // composited twice.
    top += 1;
    bottom -= 1;
    if top <= bottom {
        blend_vline(buf, color, top, bottom, left);
        blend_vline(buf, color, top, bottom, right);
    }
}

/// Overwrite a filled rectangle. Corners may be given in any order;
/// `right` and `bottom` are exclusive; the area is clamped to the buffer.
pub fn fill_rect(buf: &mut PixelBuffer, color: Pixel, left: i32, top: i32, right: i32, bottom: i32) {
    let mut r = Rect::new(left, top, right, bottom);
    r.normalize();

    let w = buf.width() as i32;
    let h = buf.height() as i32;
    if r.bottom < 0 || r.top >= h || r.right < 0 || r.left >= w {
        return;
    }
    let left = r.left.max(0) as usize;
    let right = r.right.min(w) as usize;
    for y in r.top.max(0)..r.bottom.min(h) {
        buf.row_mut(y)[left..right].fill(color);
    }
}

// ============================================================================
// Circles
// ============================================================================

fn plot_circle_points(buf: &mut PixelBuffer, color: Pixel, xc: i32, yc: i32, x: i32, y: i32) {
    buf.blend_put(xc + x, yc + y, color);
    buf.blend_put(xc - x, yc + y, color);
    buf.blend_put(xc + x, yc - y, color);
    buf.blend_put(xc - x, yc - y, color);
    buf.blend_put(xc + y, yc + x, color);
    buf.blend_put(xc - y, yc + x, color);
    buf.blend_put(xc + y, yc - x, color);
    buf.blend_put(xc - y, yc - x, color);
}

/// Composite a one-pixel circle outline around `(xc, yc)`.
///
/// One octant is walked and mirrored eight ways through the compositing
/// pixel write. Positions that coincide on the axes or the diagonal are
/// composited once per mirror. Negative radii draw nothing.
pub fn draw_circle(buf: &mut PixelBuffer, color: Pixel, xc: i32, yc: i32, radius: i32) {
    if radius < 0 {
        return;
    }
    let mut ci = CircleMidpointInterpolator::new(radius);
    plot_circle_points(buf, color, xc, yc, ci.x(), ci.y());
    while ci.next() {
        plot_circle_points(buf, color, xc, yc, ci.x(), ci.y());
    }
}

fn fill_circle_spans(buf: &mut PixelBuffer, color: Pixel, xc: i32, yc: i32, x: i32, y: i32) {
    copy_hline(buf, color, xc - x, xc + x, yc + y);
    copy_hline(buf, color, xc - x, xc + x, yc - y);
    copy_hline(buf, color, xc - y, xc + y, yc + x);
    copy_hline(buf, color, xc - y, xc + y, yc - x);
}

/// Overwrite a filled circle around `(xc, yc)`.
///
/// Each octant step lays down up to four horizontal spans. The middle rows
/// are laid down repeatedly across steps, which is harmless because the
/// span writer overwrites. Negative radii draw nothing.
pub fn fill_circle(buf: &mut PixelBuffer, color: Pixel, xc: i32, yc: i32, radius: i32) {
    if radius < 0 {
        return;
    }
    let mut ci = CircleMidpointInterpolator::new(radius);
    fill_circle_spans(buf, color, xc, yc, ci.x(), ci.y());
    while ci.next() {
        fill_circle_spans(buf, color, xc, yc, ci.x(), ci.y());
    }
}

// ============================================================================
// Tests
// ============================================================================
