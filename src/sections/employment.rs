//! Employment history: three positions, each with a role/location row, an
//! employer/period row and a bullet list.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::content::JOBS;
use crate::error::Result;
use crate::sections::title;

pub fn render(canvas: &mut Canvas, style: &Style, y: f64) -> Result<f64> {
    let mut y = title::render(canvas, style, y, "Employment")?;

    for job in &JOBS {
        y -= job.gap_above;

        canvas.draw_string(
            style.margin_left,
            y,
            job.role,
            Font::HelveticaBold,
            11.0,
            style.palette.ink,
        )?;
        canvas.draw_right_string(
            style.right_edge(),
            y,
            job.location,
            Font::Helvetica,
            10.0,
            style.palette.muted,
        )?;

        y -= 15.0;
        canvas.draw_string(
            style.margin_left,
            y,
            job.employer,
            Font::Helvetica,
            10.0,
            style.palette.ink,
        )?;
        canvas.draw_right_string(
            style.right_edge(),
            y,
            job.period,
            Font::Helvetica,
            10.0,
            style.palette.muted,
        )?;

        y -= 18.0;
        for bullet in job.bullets {
            canvas.draw_string(
                style.margin_left + 10.0,
                y,
                &format!("\u{2022}  {bullet}"),
                Font::Helvetica,
                9.0,
                style.palette.ink,
            )?;
            y -= 14.0;
        }
    }

    Ok(y - 15.0)
}
