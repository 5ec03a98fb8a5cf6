//! Certifications with their verification links.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::content::CERTIFICATIONS;
use crate::error::Result;
use crate::sections::title;

pub fn render(canvas: &mut Canvas, style: &Style, y: f64) -> Result<f64> {
    let mut y = title::render(canvas, style, y, "Certifications")?;

    for (i, cert) in CERTIFICATIONS.iter().enumerate() {
        if i > 0 {
            y -= 20.0;
        }

        canvas.draw_string(
            style.margin_left,
            y,
            cert.issuer,
            Font::HelveticaBold,
            11.0,
            style.palette.ink,
        )?;

        y -= 15.0;
        canvas.draw_string(
            style.margin_left,
            y,
            cert.title,
            Font::Helvetica,
            10.0,
            style.palette.ink,
        )?;
        canvas.draw_right_string(
            style.right_edge(),
            y,
            cert.year,
            Font::Helvetica,
            10.0,
            style.palette.muted,
        )?;

        y -= 14.0;
        for (j, link) in cert.links.iter().enumerate() {
            if j > 0 {
                y -= 12.0;
            }
            canvas.draw_string(
                style.margin_left + 10.0,
                y,
                &format!("\u{2022} {link}"),
                Font::Helvetica,
                8.0,
                style.palette.link,
            )?;
        }
    }

    Ok(y - 20.0)
}
