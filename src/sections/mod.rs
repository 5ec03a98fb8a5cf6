//! Section renderers.
//!
//! Each renderer draws one logical block of the CV onto the canvas and
//! returns the cursor position for whatever comes next. Renderers never look
//! at each other; the cursor hand-off in the composer is the only coupling.

pub mod certifications;
pub mod education;
pub mod employment;
pub mod footer;
pub mod header;
pub mod languages;
pub mod skills;
pub mod title;
