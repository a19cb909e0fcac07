use badge_qr::encoder::codewords;
use badge_qr::encoder::qr_encoder::QrEncoder;
use badge_qr::encoder::tables::MAX_DATA_BYTES;
use badge_qr::render::{self, RasterOptions, SvgOptions};
use badge_qr::{QrError, config};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Badge QR code tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Svg,
    Png,
    Ascii,
    Path,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a version 4-M symbol
    Encode {
        #[arg(long)]
        text: String,
        #[arg(long, value_enum, default_value = "svg")]
        format: OutputFormat,
        /// Output file; stdout when omitted (required for png)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Printed edge length for svg output
        #[arg(long)]
        size_mm: Option<f32>,
        /// Pixels per module for png output
        #[arg(long)]
        scale: Option<usize>,
    },
    /// Show mask scores and verify read-back for some text
    Inspect {
        #[arg(long)]
        text: String,
    },
}

fn main() -> ExitCode {
    let level = if config::debug_enabled() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode {
            text,
            format,
            out,
            size_mm,
            scale,
        } => encode_cmd(&text, format, out.as_deref(), size_mm, scale),
        Command::Inspect { text } => inspect_cmd(&text),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrtool: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(
    text: &str,
    format: OutputFormat,
    out: Option<&Path>,
    size_mm: Option<f32>,
    scale: Option<usize>,
) -> Result<(), QrError> {
    let symbol = badge_qr::encode(text);
    if symbol.truncated {
        eprintln!(
            "warning: text is {} bytes, only the first {} were encoded",
            text.len(),
            MAX_DATA_BYTES
        );
    }

    let rendered = match format {
        OutputFormat::Png => {
            let mut options = RasterOptions::default();
            if let Some(scale) = scale {
                options.scale = scale.clamp(1, 64);
            }
            return match out {
                Some(path) => render::save_png(&symbol, path, &options),
                None => {
                    use std::io::Write;
                    let bytes = render::to_png_bytes(&symbol, &options)?;
                    std::io::stdout().write_all(&bytes)?;
                    Ok(())
                }
            };
        }
        OutputFormat::Svg => {
            let mut options = SvgOptions::default();
            if let Some(size_mm) = size_mm.filter(|s| s.is_finite() && *s > 0.0) {
                options.size_mm = size_mm;
            }
            render::to_svg(&symbol, &options)
        }
        OutputFormat::Ascii => render::to_ascii(&symbol, config::quiet_zone()),
        OutputFormat::Path => render::to_path(&symbol.modules),
    };

    match out {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn inspect_cmd(text: &str) -> Result<(), QrError> {
    let bytes = text.as_bytes();
    let payload = &bytes[..bytes.len().min(MAX_DATA_BYTES)];
    let codewords = codewords::build(payload);

    println!("Text: {:?} ({} bytes, capacity {})", text, bytes.len(), MAX_DATA_BYTES);
    println!("Codewords: {}", codewords.len());
    for candidate in QrEncoder::candidates(&codewords, config::parallel_masks()) {
        println!(
            "  mask {}: penalty {:.1}",
            candidate.mask_pattern.id(),
            candidate.penalty
        );
    }

    let symbol = badge_qr::encode(text);
    println!(
        "Selected mask {} (penalty {:.1}), truncated={}",
        symbol.mask_pattern.id(),
        symbol.penalty,
        symbol.truncated
    );
    print!("{}", render::to_ascii(&symbol, 2));

    let read_back = badge_qr::read_symbol(&symbol)?;
    println!(
        "Read-back: {} ({} bytes)",
        if read_back == payload { "ok" } else { "MISMATCH" },
        read_back.len()
    );
    Ok(())
}
