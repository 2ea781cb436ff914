use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pixelmem_core::{
    batch::{convert_file, convert_tree, ConversionJob},
    emit::MemoryFormat,
    CanvasSize,
};

/// Image to memory-image converter
///
/// Letterboxes pictures onto a fixed canvas and packs them into
/// 32-bit words for loading into an external device memory (SDRAM).
/// When INPUT is a directory, its tree is mirrored under OUTPUT with
/// one converted file per image; individual failures are reported but
/// do not stop the batch.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input image file or directory
    input: PathBuf,
    /// Output file or directory
    output: PathBuf,
    /// Output format
    #[arg(short, long, value_enum, default_value = "binary")]
    format: Format,
    /// Canvas width in pixels
    #[arg(long, default_value_t = 224, value_name = "PX")]
    width: u32,
    /// Canvas height in pixels
    #[arg(long, default_value_t = 224, value_name = "PX")]
    height: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Raw little-endian words
    Binary,
    /// Address/data hex listing
    Mem,
}

impl From<Format> for MemoryFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Binary => Self::Binary,
            Format::Mem => Self::MemText,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let canvas = CanvasSize::new(cli.width, cli.height);
    let format = MemoryFormat::from(cli.format);

    if cli.input.is_dir() {
        // Per-file failures are already logged by the batch driver;
        // the process fails only on batch-level setup errors.
        let summary = convert_tree(&cli.input, &cli.output, format, canvas)?;
        if !summary.is_clean() {
            log::warn!(
                "{} of {} files failed, see the log above",
                summary.failures.len(),
                summary.failures.len() + summary.converted.len()
            );
        }
    } else {
        let job = ConversionJob {
            input: cli.input,
            output: cli.output,
            format,
        };
        convert_file(&job, canvas)?;
    }

    Ok(())
}
