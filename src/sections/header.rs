//! Page 1 header: photo, name, headline, contact line and summary.

use oxidize_pdf::{Font, Image};

use crate::canvas::Canvas;
use crate::config::{Style, CM};
use crate::content::PROFILE;
use crate::error::Result;

const PHOTO_WIDTH: f64 = 3.5 * CM;
const PHOTO_HEIGHT: f64 = 3.3 * CM;

pub fn render(canvas: &mut Canvas, style: &Style, photo: &Image, y: f64) -> Result<f64> {
    canvas.draw_photo(
        photo,
        style.margin_left,
        y - PHOTO_HEIGHT + 30.0,
        PHOTO_WIDTH,
        PHOTO_HEIGHT,
    )?;

    // Name and contact details start to the right of the photo.
    let text_x = style.margin_left + PHOTO_WIDTH + 0.5 * CM;

    canvas.draw_string(
        text_x,
        y,
        PROFILE.first_name,
        Font::Helvetica,
        32.0,
        style.palette.ink,
    )?;
    canvas.draw_string(
        text_x + 160.0,
        y,
        PROFILE.last_name,
        Font::HelveticaBold,
        32.0,
        style.palette.ink,
    )?;

    let y = y - 25.0;
    canvas.draw_string(
        text_x,
        y,
        PROFILE.headline,
        Font::Helvetica,
        11.0,
        style.palette.accent,
    )?;

    let y = y - 20.0;
    canvas.draw_string(
        text_x,
        y,
        PROFILE.contact,
        Font::Helvetica,
        10.0,
        style.palette.ink,
    )?;

    // The summary spans the full content width below the photo.
    let mut y = y - 30.0;
    for (i, line) in PROFILE.summary.iter().enumerate() {
        if i > 0 {
            y -= 14.0;
        }
        canvas.draw_string(
            style.margin_left,
            y,
            line,
            Font::HelveticaOblique,
            10.0,
            style.palette.muted,
        )?;
    }

    Ok(y - 30.0)
}
