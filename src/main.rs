use anyhow::Result;
use clap::Parser;
use cv_composer::{Composer, Style};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "cv-composer",
    about = "Generates the Francesco Colicino curriculum vitae as a two-page PDF",
    version
)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = "Francesco_Colicino.pdf")]
    output: PathBuf,

    /// JPEG photo placed in the page 1 header
    #[arg(long, default_value = "photo.jpg")]
    photo: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cv_composer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let composer = Composer::new(Style::default());
    composer.compose(&cli.photo, &cli.output)?;

    println!("CV created successfully: {}", cli.output.display());
    Ok(())
}
