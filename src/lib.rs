//! # cv-composer
//!
//! Composes the Francesco Colicino curriculum vitae as a fixed, two-page A4
//! PDF. Every section is drawn with absolute-positioned primitives (text runs,
//! hairline rules, one photo) through [`oxidize_pdf`], then the document is
//! serialized in a single step.
//!
//! The crate is deliberately linear: a [`Composer`] threads a vertical cursor
//! through a fixed sequence of section renderers and never branches beyond the
//! per-item column tags of the skills section.
//!
//! ```rust,no_run
//! use cv_composer::{Composer, Style};
//!
//! # fn main() -> cv_composer::Result<()> {
//! let composer = Composer::new(Style::default());
//! composer.compose("photo.jpg".as_ref(), "Francesco_Colicino.pdf".as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod composer;
pub mod config;
pub mod content;
pub mod error;
pub mod sections;

pub use canvas::Canvas;
pub use composer::Composer;
pub use config::Style;
pub use error::{ComposeError, Result};
