//! picascii CLI - Convert images to ASCII art

use clap::Parser;
use picascii::render::{render, render_json};
use picascii::{Converter, PicasciiError};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "picascii", about = "Convert images to ASCII art")]
struct Args {
    /// Input image file (JPEG, PNG, GIF, ...)
    input: PathBuf,
    /// Output width in characters
    #[arg(short, long, default_value = "60")]
    width: usize,
    /// Row scale compensating for tall terminal cells
    #[arg(short = 'c', long, default_value = "0.5")]
    vertical_correction: f64,
    /// Emit one character per source pixel instead of resampling
    #[arg(long, conflicts_with_all = ["width", "vertical_correction"])]
    no_resize: bool,
    /// Print the input path before the art
    #[arg(long)]
    show_path: bool,
    /// Emit a JSON object instead of plain text
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<(), PicasciiError> {
    let converter = if args.no_resize {
        Converter::new().without_resize()
    } else {
        Converter::new()
            .with_width(args.width)
            .with_vertical_correction(args.vertical_correction)
    };

    let glyphs = converter.convert_path(&args.input)?;
    log::info!("rendering {}x{} characters", glyphs.width(), glyphs.height());

    let mut out = io::stdout().lock();
    if args.show_path {
        writeln!(out, "{}", args.input.display()).map_err(PicasciiError::Output)?;
    }
    if args.json {
        render_json(&glyphs, out)
    } else {
        render(&glyphs, out)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            eprintln!("picascii: {err}");
            ExitCode::FAILURE
        }
    }
}
