//! Command-line front end: encodes its argument and prints the symbol or saves it as PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use qrweave::{ECLevel, QRBuilder, Version};

#[derive(Parser)]
#[command(name = "qrweave")]
#[command(author, about = "QR code encoder", long_about = None)]
struct Cli {
    /// Text to encode
    data: String,

    /// Error correction level
    #[arg(short, long, value_enum, ignore_case = true, default_value = "m")]
    ec_level: Level,

    /// Symbol version 1-40; smallest fitting version when omitted
    #[arg(long = "version", value_parser = clap::value_parser!(u8).range(1..=40))]
    symbol_version: Option<u8>,

    /// Save a PNG instead of printing the symbol
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixels per module for PNG output, repeats per module for text output
    #[arg(short, long, default_value = "1")]
    scale: u32,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(log_level).with_target(false).init();

    let mut builder = QRBuilder::new(cli.data.as_bytes());
    builder.ec_level(cli.ec_level.into());
    if let Some(n) = cli.symbol_version {
        builder.version(Version::new(n as usize - 1)?);
    }
    let qr = builder.build().context("Failed to encode input")?;
    info!("Encoded {}", qr.metadata());

    match cli.output {
        Some(path) => {
            qr.to_image(cli.scale.max(1))
                .save(&path)
                .with_context(|| format!("Failed to write image to {}", path.display()))?;
            info!("Saved {}", path.display());
        }
        None => print!("{}", qr.to_str(cli.scale.max(1) as usize)),
    }

    Ok(())
}
