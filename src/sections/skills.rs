//! Skills in two columns.
//!
//! Each entry carries an explicit [`Column`] tag. Left-column entries keep
//! the cursor where it is so the matching right-column entry lands on the
//! same row; right-column entries close the row and advance the cursor.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::content::{Column, SKILLS};
use crate::error::Result;
use crate::sections::title;

pub fn render(canvas: &mut Canvas, style: &Style, y: f64) -> Result<f64> {
    let mut y = title::render(canvas, style, y, "Skills")?;

    for skill in &SKILLS {
        match skill.column {
            Column::Left => {
                canvas.draw_string(
                    style.margin_left,
                    y,
                    skill.title,
                    Font::HelveticaBold,
                    10.0,
                    style.palette.ink,
                )?;
                canvas.draw_string(
                    style.margin_left,
                    y - 14.0,
                    skill.value,
                    Font::Helvetica,
                    9.0,
                    style.palette.muted,
                )?;
            }
            Column::Right => {
                canvas.draw_right_string(
                    style.right_edge(),
                    y,
                    skill.title,
                    Font::HelveticaBold,
                    10.0,
                    style.palette.ink,
                )?;
                y -= 14.0;
                canvas.draw_right_string(
                    style.right_edge(),
                    y,
                    skill.value,
                    Font::Helvetica,
                    9.0,
                    style.palette.muted,
                )?;
                y -= 18.0;
            }
        }
    }

    Ok(y - 5.0)
}
