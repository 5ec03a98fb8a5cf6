//! Thin drawing seam over an [`oxidize_pdf::Page`].
//!
//! The section renderers only need a handful of primitives: anchored text
//! runs with font/size/color, a horizontal hairline, width measurement and
//! one photo placement. Everything else (content streams, encoding, the
//! final write-out) is the library's job.
//!
//! Text color is carried by the page's graphics state, so every string draw
//! sets the fill color through the graphics context before writing the run,
//! the same way the library's own examples do.

use oxidize_pdf::{measure_text, Color, Font, Image, Page};

use crate::error::Result;

pub struct Canvas<'a> {
    page: &'a mut Page,
}

impl<'a> Canvas<'a> {
    pub fn new(page: &'a mut Page) -> Self {
        Self { page }
    }

    /// Width of `text` at `size`, in points.
    pub fn string_width(&self, text: &str, font: Font, size: f64) -> f64 {
        measure_text(text, font, size)
    }

    /// Draws `text` with its left edge at `x`.
    pub fn draw_string(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font: Font,
        size: f64,
        color: Color,
    ) -> Result<()> {
        self.page.graphics().set_fill_color(color);
        self.page.text().set_font(font, size).at(x, y).write(text)?;
        Ok(())
    }

    /// Draws `text` with its right edge at `x`.
    pub fn draw_right_string(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font: Font,
        size: f64,
        color: Color,
    ) -> Result<()> {
        let width = measure_text(text, font.clone(), size);
        self.draw_string(x - width, y, text, font, size, color)
    }

    /// Draws `text` centered on `x`.
    pub fn draw_centred_string(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font: Font,
        size: f64,
        color: Color,
    ) -> Result<()> {
        let width = measure_text(text, font.clone(), size);
        self.draw_string(x - width / 2.0, y, text, font, size, color)
    }

    /// Strokes a horizontal rule from `x1` to `x2` at height `y`.
    pub fn hline(&mut self, x1: f64, x2: f64, y: f64, color: Color, line_width: f64) {
        self.page
            .graphics()
            .set_stroke_color(color)
            .set_line_width(line_width)
            .move_to(x1, y)
            .line_to(x2, y)
            .stroke();
    }

    /// Places `photo` inside the box at `(x, y)` (lower-left corner) of size
    /// `width` x `height`, preserving the photo's aspect ratio and centering
    /// it within the box.
    pub fn draw_photo(
        &mut self,
        photo: &Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let (w, h, dx, dy) = fit_box(width, height, photo.width(), photo.height());
        self.page.add_image("Photo", photo.clone());
        self.page.draw_image("Photo", x + dx, y + dy, w, h)?;
        Ok(())
    }
}

/// Scales an image of `img_w` x `img_h` pixels to fit a `box_w` x `box_h`
/// point box without distortion. Returns the scaled size plus the offsets
/// that center it in the box.
fn fit_box(box_w: f64, box_h: f64, img_w: u32, img_h: u32) -> (f64, f64, f64, f64) {
    if img_w == 0 || img_h == 0 {
        return (box_w, box_h, 0.0, 0.0);
    }
    let scale = (box_w / img_w as f64).min(box_h / img_h as f64);
    let w = img_w as f64 * scale;
    let h = img_h as f64 * scale;
    (w, h, (box_w - w) / 2.0, (box_h - h) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_uses_proportional_metrics() {
        let wide = measure_text("mm", Font::Helvetica, 10.0);
        let narrow = measure_text("ii", Font::Helvetica, 10.0);
        assert!(wide > narrow);
        assert!(narrow > 0.0);
    }

    #[test]
    fn fit_box_preserves_aspect_ratio() {
        // Wide image in a square box: width binds.
        let (w, h, dx, dy) = fit_box(100.0, 100.0, 200, 100);
        assert_eq!((w, h), (100.0, 50.0));
        assert_eq!((dx, dy), (0.0, 25.0));

        // Tall image: height binds.
        let (w, h, dx, dy) = fit_box(100.0, 100.0, 100, 400);
        assert_eq!((w, h), (25.0, 100.0));
        assert_eq!((dx, dy), (37.5, 0.0));
    }

    #[test]
    fn fit_box_degenerate_image_fills_box() {
        let (w, h, dx, dy) = fit_box(99.0, 93.0, 0, 0);
        assert_eq!((w, h, dx, dy), (99.0, 93.0, 0.0, 0.0));
    }
}
