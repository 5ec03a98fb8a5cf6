//! Per-page footer: the privacy notice and a centered page line.
//!
//! Unlike the other renderers the footer does not participate in the cursor
//! hand-off. The composer calls it with a fixed baseline so the footer sits
//! at the same height on every page regardless of how much content precedes
//! it.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::content::{page_line, PRIVACY_NOTICE};
use crate::error::Result;

pub fn render(canvas: &mut Canvas, style: &Style, y: f64, page_number: u32) -> Result<()> {
    let mut y = y;
    for (i, line) in PRIVACY_NOTICE.iter().enumerate() {
        if i > 0 {
            y -= 12.0;
        }
        canvas.draw_string(
            style.margin_left,
            y,
            line,
            Font::HelveticaOblique,
            8.0,
            style.palette.muted,
        )?;
    }

    y -= 30.0;
    canvas.draw_centred_string(
        style.center_x(),
        y,
        &page_line(page_number),
        Font::Helvetica,
        9.0,
        style.palette.ink,
    )?;

    Ok(())
}
