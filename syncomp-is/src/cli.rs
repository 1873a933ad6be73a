//! Command line front-end
//!
//! Argument definitions and the per-run flow (analyze, optionally record
//! and persist, print). `main` only loads configuration, installs tracing
//! and hands over; everything here writes to a caller-supplied sink so it
//! can be driven from tests.

use crate::extractors::{EmotionLevels, RawInput, Rgb};
use crate::library::Library;
use crate::pixel_stats::load_channel_statistics;
use crate::record::{Analyzer, SensoryInput};
use crate::session::Session;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use syncomp_common::config::TomlConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "syncomp-is")]
#[command(about = "Map colors, images, text and emotions to musical parameters")]
#[command(version)]
pub struct Args {
    /// Config file (overrides SYNCOMP_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the full record as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Record the result as a composition and append it to the library
    #[arg(long, global = true)]
    pub save: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a hex color such as "#FF6B6B"
    Color { hex: String },

    /// Analyze an image file (PNG, JPEG, ...)
    Image { path: PathBuf },

    /// Analyze text given inline, from a file, or from stdin
    Text {
        text: Option<String>,

        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Analyze emotion slider positions (0-100 each)
    Emotion {
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
        joy: u8,
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(0..=100))]
        sadness: u8,
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u8).range(0..=100))]
        energy: u8,
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u8).range(0..=100))]
        calm: u8,
    },

    /// List compositions stored in the library
    Library,
}

/// Run one parsed command against `config`, printing to `out`
///
/// Text input with neither inline text nor `--file` is read from `stdin`.
pub fn execute(
    args: Args,
    config: &TomlConfig,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let library = Library::new(config.library_path());

    let raw = match args.command {
        Command::Library => return list_library(&library, args.json, out),
        Command::Color { hex } => RawInput::Color(Rgb::from_hex(&hex)?),
        Command::Image { path } => {
            let stats = load_channel_statistics(&path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            RawInput::Image(stats)
        }
        Command::Text { text, file } => RawInput::Text(read_text(text, file, stdin)?),
        Command::Emotion {
            joy,
            sadness,
            energy,
            calm,
        } => RawInput::Emotion(EmotionLevels::new(joy, sadness, energy, calm)?),
    };

    analyze(raw, config, &library, args.json, args.save, out)
}

fn analyze(
    raw: RawInput,
    config: &TomlConfig,
    library: &Library,
    json: bool,
    save: bool,
    out: &mut impl Write,
) -> Result<()> {
    info!("Analyzing {} input", raw.kind());

    let record = Analyzer::from_config(&config.session).analyze(raw)?;
    let mut session = Session::new();
    session.save_input(record);

    if save {
        let recorded = session.record_composition()?;
        let total = library
            .append(recorded)
            .with_context(|| format!("Failed to save to {}", library.path().display()))?;
        info!("Library now holds {} compositions", total);
    }

    let Some(current) = session.current() else {
        return Ok(());
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(current)?)?;
    } else {
        write_record(current, out)?;
        writeln!(out)?;
        writeln!(out, "{}", session.status())?;
    }
    Ok(())
}

/// Text source precedence: inline argument, then `--file`, then `stdin`
pub fn read_text(text: Option<String>, file: Option<PathBuf>, mut stdin: impl Read) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read text file {}", path.display()));
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

fn write_record(record: &SensoryInput, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} input: {}", record.kind().label(), record.source_summary())?;
    for (label, value) in record.parameters().describe() {
        writeln!(out, "  {:<12} {}", format!("{}:", label), value)?;
    }
    Ok(())
}

fn list_library(library: &Library, json: bool, out: &mut impl Write) -> Result<()> {
    let entries = library
        .load()
        .with_context(|| format!("Failed to load library {}", library.path().display()))?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }
    if entries.is_empty() {
        writeln!(out, "No compositions saved in {}", library.path().display())?;
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "#{} {} ({})",
            i + 1,
            entry.created_at().format("%Y-%m-%d %H:%M:%S"),
            entry.id()
        )?;
        write_record(entry, out)?;
    }
    Ok(())
}
