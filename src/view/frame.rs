//! Frame abstraction for drawing primitives
//!
//! Wraps a softbuffer pixel slice so widgets never index the buffer directly.

use crate::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color with
/// full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let channel = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        ((b * (1.0 - alpha) + f * alpha) as u32) << shift
    };

    0xFF000000 | channel(16) | channel(8) | channel(0)
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if buffer.len() < width * height && width > 0 {
            buffer.len() / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = self.pixel_span(rect, false);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.pixel_span(rect, true);
        for y in y0..y1 {
            let row = y * self.width;
            self.buffer[row + x0..row + x1].fill(color);
        }
    }

    /// Fill a rectangle honoring the color's alpha channel
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let (x0, y0, x1, y1) = self.pixel_span(rect, true);
        for y in y0..y1 {
            let row = y * self.width;
            for px in &mut self.buffer[row + x0..row + x1] {
                *px = blend_colors(*px, color, alpha);
            }
        }
    }

    /// Get a single pixel (returns 0 if out of bounds)
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Convert a float rect to a pixel span, optionally intersected with the clip
    fn pixel_span(&self, rect: Rect, clipped: bool) -> (usize, usize, usize, usize) {
        let rect = rect.non_negative();
        let (min_x, min_y, max_x, max_y) = match (clipped, self.clip) {
            (true, Some(c)) => (c.x0, c.y0, c.x1, c.y1),
            _ => (0, 0, self.width, self.height),
        };

        let x0 = (rect.min_x().max(0.0) as usize).clamp(min_x, max_x);
        let y0 = (rect.min_y().max(0.0) as usize).clamp(min_y, max_y);
        let x1 = (rect.max_x().max(0.0) as usize).clamp(x0, max_x);
        let y1 = (rect.max_y().max(0.0) as usize).clamp(y0, max_y);
        (x0, y0, x1, y1)
    }
}
