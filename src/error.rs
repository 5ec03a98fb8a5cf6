use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("photo asset '{}' could not be loaded: {source}", path.display())]
    PhotoAsset {
        path: PathBuf,
        #[source]
        source: oxidize_pdf::PdfError,
    },

    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
