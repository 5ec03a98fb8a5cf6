//! Spoken languages, with a badge link where one exists.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::content::LANGUAGES;
use crate::error::Result;
use crate::sections::title;

pub fn render(canvas: &mut Canvas, style: &Style, y: f64) -> Result<f64> {
    let mut y = title::render(canvas, style, y, "Languages")?;

    for (i, language) in LANGUAGES.iter().enumerate() {
        if i > 0 {
            y -= 20.0;
        }

        canvas.draw_string(
            style.margin_left,
            y,
            language.name,
            Font::HelveticaBold,
            10.0,
            style.palette.ink,
        )?;

        y -= 14.0;
        canvas.draw_string(
            style.margin_left,
            y,
            language.level,
            Font::Helvetica,
            9.0,
            style.palette.muted,
        )?;

        for link in language.links {
            y -= 12.0;
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
