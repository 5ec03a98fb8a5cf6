//! Education: two degrees from the same institution.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::content::DEGREES;
use crate::error::Result;
use crate::sections::title;

pub fn render(canvas: &mut Canvas, style: &Style, y: f64) -> Result<f64> {
    let mut y = title::render(canvas, style, y, "Education")?;

    for (i, degree) in DEGREES.iter().enumerate() {
        if i > 0 {
            y -= 25.0;
        }

        canvas.draw_string(
            style.margin_left,
            y,
            degree.school,
            Font::HelveticaBold,
            11.0,
            style.palette.ink,
        )?;
        canvas.draw_right_string(
            style.right_edge(),
            y,
            degree.location,
            Font::Helvetica,
            10.0,
            style.palette.muted,
        )?;

        y -= 15.0;
        canvas.draw_string(
            style.margin_left,
            y,
            degree.award,
            Font::Helvetica,
            10.0,
            style.palette.ink,
        )?;
        canvas.draw_right_string(
            style.right_edge(),
            y,
            degree.period,
            Font::Helvetica,
            10.0,
            style.palette.muted,
        )?;
    }

    Ok(y - 25.0)
}
