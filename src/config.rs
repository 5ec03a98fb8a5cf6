//! Page geometry and palette for the composed document.
//!
//! All layout in this crate is expressed in PDF points (1/72 inch). The
//! original design used centimeter-based margins, so the conversion constant
//! is kept here alongside the rest of the fixed configuration.

use oxidize_pdf::Color;

/// Points per centimeter.
pub const CM: f64 = 28.3465;

/// The color palette of the document.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Dark red (#8B0000) used for the title line and section-title prefixes.
    pub accent: Color,
    /// Dark gray (#333333) used for primary text.
    pub ink: Color,
    /// Light gray (#666666) used for secondary text and rules.
    pub muted: Color,
    /// Blue (#0066CC) used for hyperlink bullets.
    pub link: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0.545, 0.0, 0.0),
            ink: Color::rgb(0.2, 0.2, 0.2),
            muted: Color::rgb(0.4, 0.4, 0.4),
            link: Color::rgb(0.0, 0.4, 0.8),
        }
    }
}

/// Fixed page geometry and palette, handed to the [`Composer`] at
/// construction. There are no free-floating layout globals; every renderer
/// receives this value.
///
/// [`Composer`]: crate::Composer
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Page width in points (A4).
    pub page_width: f64,
    /// Page height in points (A4).
    pub page_height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    /// Baseline of the footer block, measured from the page bottom. The
    /// footer is always drawn here, never at the running cursor.
    pub footer_baseline: f64,
    pub palette: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin_left: 2.0 * CM,
            margin_right: 2.0 * CM,
            margin_top: 2.0 * CM,
            footer_baseline: 2.0 * CM,
            palette: Palette::default(),
        }
    }
}

impl Style {
    /// Cursor position at the top of a fresh page.
    pub fn top_cursor(&self) -> f64 {
        self.page_height - self.margin_top
    }

    /// X coordinate of the right content edge, the anchor for right-aligned
    /// text runs.
    pub fn right_edge(&self) -> f64 {
        self.page_width - self.margin_right
    }

    /// Horizontal center of the page, the anchor for the footer page line.
    pub fn center_x(&self) -> f64 {
        self.page_width / 2.0
    }
}
