//! # softraster
//!
//! Immediate-mode 2D software rasterizer — draws primitives and composites
//! images directly into an in-memory packed-pixel buffer. No GPU, no vector
//! math, no rendering backend: every operation is a bounded integer walk
//! over a buffer of known size.
//!
//! Features:
//!
//! - Stride-aware pixel buffers over owned or caller-supplied storage
//! - One pixel format: packed 32-bit ARGB, straight alpha
//! - Integer source-over compositing and opaque overwrite
//! - Bresenham lines (4-case dispatch), rectangles, midpoint circles
//! - Clipped opaque and composited buffer-to-buffer blits
//! - Fixed 8×8 bitmap text with measurement and centering
//!
//! ## Architecture
//!
//! A frame loop outside this crate obtains a raw pixel array, wraps it with
//! [`rendering_buffer::PixelBuffer::wrap`], issues drawing calls against
//! it, and discards the wrapper; only buffer contents persist between
//! frames. All drawing clips silently against the buffer's logical extent —
//! out-of-range input never errors. The only fallible operation is owned
//! buffer allocation.

// Foundation types
pub mod basics;
pub mod color;
pub mod comp_op;

// Storage & interpolators
pub mod circle_bresenham;
pub mod line_bresenham;
pub mod rendering_buffer;

// Renderers
pub mod blit;
pub mod raster_text;
pub mod renderer_primitives;
