// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tenprint`: render a 10 PRINT style book cover to a PNG file.
//!
//! ```text
//! tenprint -t "Ten Print" -s "A Generative Cover" -a "Anonymous" -o cover.png
//! ```
//!
//! Log output goes to stderr and is controlled by `TENPRINT_LOG`
//! (for example `TENPRINT_LOG=debug`).

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tenprint_cover::{CoverConfig, load_font_book, render_cover, save_png};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "TENPRINT_LOG";

#[derive(Debug, Parser)]
#[command(name = "tenprint")]
#[command(version, about = "Generate a 10 PRINT style book cover", long_about = None)]
struct Cli {
    /// Book title.
    #[arg(short, long)]
    title: String,

    /// Book subtitle.
    #[arg(short, long, default_value = "")]
    subtitle: String,

    /// Book author.
    #[arg(short, long)]
    author: String,

    /// Output PNG file.
    #[arg(short, long)]
    output: PathBuf,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Margin as a percentage of the canvas height.
    #[arg(long)]
    margin: Option<u32>,

    /// Configuration file; defaults to the per-user `tenprint/config.toml`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra directory to search for Noto fonts; may be repeated.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration.
    fn apply(&self, mut config: CoverConfig) -> CoverConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(margin) = self.margin {
            config.margin_percent = margin;
        }
        if !self.font_dirs.is_empty() {
            let mut dirs = self.font_dirs.clone();
            dirs.append(&mut config.fonts.search_dirs);
            config.fonts.search_dirs = dirs;
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> tenprint_cover::Result<()> {
    let config = match &cli.config {
        Some(path) => CoverConfig::load(path)?,
        None => CoverConfig::load_or_default()?,
    };
    let config = cli.apply(config);
    debug!(?config, "Resolved configuration");

    let spec = config.cover(
        cli.title.as_str(),
        cli.subtitle.as_str(),
        cli.author.as_str(),
    )?;
    let fonts = load_font_book(&config.fonts)?;
    let (image, report) = render_cover(&spec, &fonts);
    info!(
        grid = report.grid.count,
        title_lines = report.title.map(|wrap| wrap.lines),
        "Rendered cover"
    );
    save_png(&image, &cli.output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("tenprint: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn required_flags() {
        let cli = Cli::try_parse_from(["tenprint", "-t", "Title", "-a", "Author", "-o", "out.png"])
            .unwrap();
        assert_eq!(cli.title, "Title");
        assert_eq!(cli.subtitle, "");
        assert_eq!(cli.author, "Author");
        assert_eq!(cli.output, PathBuf::from("out.png"));

        assert!(Cli::try_parse_from(["tenprint", "-a", "Author", "-o", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["tenprint", "-t", "Title", "-o", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["tenprint", "-t", "Title", "-a", "Author"]).is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "tenprint",
            "--title",
            "T",
            "--subtitle",
            "S",
            "--author",
            "A",
            "--output",
            "o.png",
            "--height",
            "900",
            "--margin",
            "0",
            "--font-dir",
            "/first",
        ])
        .unwrap();
        let mut base = CoverConfig::default();
        base.fonts.search_dirs = vec![PathBuf::from("/second")];

        let config = cli.apply(base);
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 900);
        assert_eq!(config.margin_percent, 0);
        assert_eq!(
            config.fonts.search_dirs,
            vec![PathBuf::from("/first"), PathBuf::from("/second")]
        );
    }
}
