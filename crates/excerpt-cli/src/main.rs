//! # excerpt
//!
//! Truncate an HTML fragment read from a file or stdin and print the result.

#![deny(unsafe_code)]

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use excerpt_core::encoding::EncodingMode;
use excerpt_html::{TruncateOptions, truncate_with};
use excerpt_settings::{ExcerptSettings, load_settings, load_settings_from_path};

/// Truncate HTML to a visible-text budget without breaking its structure.
#[derive(Parser, Debug)]
#[command(name = "excerpt", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Approximate number of visible characters to keep.
    #[arg(short = 'n', long)]
    max_length: Option<usize>,

    /// Text appended at the cut point.
    #[arg(short, long)]
    marker: Option<String>,

    /// Transliterate input to ASCII before truncating.
    #[arg(long)]
    ascii: bool,

    /// Settings file (defaults to `~/.excerpt/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log filter, e.g. `info` or `excerpt_html=debug`.
    #[arg(long)]
    log_level: Option<String>,

    /// Log what was truncated at info level.
    #[arg(long)]
    stats: bool,
}

impl Cli {
    /// Load settings from the explicit path or the default location.
    fn load_settings(&self) -> Result<ExcerptSettings> {
        match &self.settings {
            Some(path) => load_settings_from_path(path)
                .with_context(|| format!("Failed to load settings: {}", path.display())),
            None => load_settings().context("Failed to load settings"),
        }
    }

    /// Flags override settings.
    fn options(&self, settings: &ExcerptSettings) -> TruncateOptions {
        let t = &settings.truncate;
        TruncateOptions {
            max_length: self.max_length.unwrap_or(t.max_length),
            continuation_marker: self
                .marker
                .clone()
                .unwrap_or_else(|| t.continuation_marker.clone()),
            encoding: if self.ascii {
                EncodingMode::Ascii
            } else {
                t.encoding
            },
        }
    }

    fn log_level<'a>(&'a self, settings: &'a ExcerptSettings) -> &'a str {
        self.log_level
            .as_deref()
            .unwrap_or(settings.logging.level.as_str())
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input: {}", p.display())),
        _ => {
            let mut buf = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings()?;
    excerpt_core::logging::init_subscriber(cli.log_level(&settings));

    let options = cli.options(&settings);
    let input = read_input(cli.input.as_deref())?;
    let result = truncate_with(&input, &options);

    if cli.stats {
        tracing::info!(
            input_len = input.len(),
            output_len = result.html.len(),
            max_length = options.max_length,
            visible_length = result.visible_length,
            truncated = result.truncated,
            pruned = result.pruned,
            "excerpt stats"
        );
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", result.html).context("Failed to write output")?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
