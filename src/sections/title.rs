//! Shared section-title treatment: a two-color title followed by a hairline
//! rule that runs from just past the title to the right content edge.

use oxidize_pdf::Font;

use crate::canvas::Canvas;
use crate::config::Style;
use crate::error::Result;

const TITLE_SIZE: f64 = 16.0;
/// Number of leading characters drawn in the accent color.
const ACCENT_PREFIX: usize = 3;
/// Gap between the end of the title and the start of the rule.
const RULE_GAP: f64 = 10.0;

/// Splits a title into its accent-colored prefix and the remainder.
pub fn split_title(title: &str) -> (&str, &str) {
    let split = title
        .char_indices()
        .nth(ACCENT_PREFIX)
        .map(|(i, _)| i)
        .unwrap_or(title.len());
    title.split_at(split)
}

/// X coordinate where the rule begins, strictly to the right of the
/// measured title.
pub fn rule_start(style: &Style, title_width: f64) -> f64 {
    style.margin_left + title_width + RULE_GAP
}

pub fn render(canvas: &mut Canvas, style: &Style, y: f64, title: &str) -> Result<f64> {
    let (accent, rest) = split_title(title);

    canvas.draw_string(
        style.margin_left,
        y,
        accent,
        Font::HelveticaBold,
        TITLE_SIZE,
        style.palette.accent,
    )?;
    let accent_width = canvas.string_width(accent, Font::HelveticaBold, TITLE_SIZE);
    canvas.draw_string(
        style.margin_left + accent_width,
        y,
        rest,
        Font::HelveticaBold,
        TITLE_SIZE,
        style.palette.ink,
    )?;

    let y = y - 5.0;
    let title_width = canvas.string_width(title, Font::HelveticaBold, TITLE_SIZE);
    canvas.hline(
        rule_start(style, title_width),
        style.right_edge(),
        y,
        style.palette.muted,
        0.5,
    );

    Ok(y - 20.0)
}
