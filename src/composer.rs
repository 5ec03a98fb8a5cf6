//! The document composer.
//!
//! Owns the [`oxidize_pdf::Document`], drives the section renderers page by
//! page in a fixed order and serializes the result once at the end. There is
//! no loop and no branching here: the whole document is a straight line of
//! renderer calls joined only by the cursor hand-off.

use std::path::Path;

use oxidize_pdf::{Document, Image, Page};
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::config::Style;
use crate::error::{ComposeError, Result};
use crate::sections;

pub struct Composer {
    style: Style,
}

impl Composer {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Composes both pages and writes the document to `output`.
    ///
    /// The photo is loaded up front so a missing or unreadable asset fails
    /// the run before any output file exists.
    pub fn compose(&self, photo_path: &Path, output: &Path) -> Result<()> {
        let photo =
            Image::from_jpeg_file(photo_path).map_err(|source| ComposeError::PhotoAsset {
                path: photo_path.to_path_buf(),
                source,
            })?;
        debug!(photo = %photo_path.display(), "photo asset loaded");

        let mut doc = Document::new();
        doc.set_title("Francesco Colicino - Curriculum Vitae");
        doc.set_author("Francesco Colicino");
        doc.set_subject("Curriculum Vitae");
        doc.set_creator("cv-composer");

        doc.add_page(self.first_page(&photo)?);
        doc.add_page(self.second_page()?);

        doc.save(output)?;
        info!(output = %output.display(), "CV serialized");
        Ok(())
    }

    fn first_page(&self, photo: &Image) -> Result<Page> {
        let style = &self.style;
        let mut page = Page::a4();
        let mut canvas = Canvas::new(&mut page);

        let mut y = style.top_cursor();
        y = sections::header::render(&mut canvas, style, photo, y)?;
        y = sections::employment::render(&mut canvas, style, y)?;
        y = sections::education::render(&mut canvas, style, y)?;
        sections::skills::render(&mut canvas, style, y)?;

        // The footer always sits at the fixed baseline, not at the cursor
        // the skills section returned.
        sections::footer::render(&mut canvas, style, style.footer_baseline, 1)?;
        debug!("page 1 composed");

        Ok(page)
    }

    fn second_page(&self) -> Result<Page> {
        let style = &self.style;
        let mut page = Page::a4();
        let mut canvas = Canvas::new(&mut page);

        let mut y = style.top_cursor();
        y = sections::certifications::render(&mut canvas, style, y)?;
        sections::languages::render(&mut canvas, style, y)?;

        sections::footer::render(&mut canvas, style, style.footer_baseline, 2)?;
        debug!("page 2 composed");

        Ok(page)
    }
}
