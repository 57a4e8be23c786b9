// SPDX-License-Identifier: MIT
//
// showcase-theme — print a tenant's design tokens.
//
// Wires the crates together for one-off use and for build scripts that
// pre-render tenant stylesheets:
//
//   showcase-color → hex ↔ HSL
//   showcase-theme → presets, accent derivation, assembly, CSS sink
//
// Flow:
//
//   --config file ─┐
//   --mode/--accent ┴─▶ TenantTheme ─▶ derive ─▶ CSS rule | JSON object ─▶ stdout
//                                          └──▶ contrast report (--audit) ─▶ stderr

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use showcase_theme::contrast::DEFAULT_TARGET_RATIO;
use showcase_theme::{
    CssSink, StyleSink, TenantTheme, ThemeMode, TokenSet, contrast_report,
};

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "SHOWCASE_LOG";

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "showcase-theme", version, about = "Derive showcase site design tokens from an accent color")]
struct Cli {
    /// Theme mode: light or dark.
    #[arg(long, value_parser = parse_mode)]
    mode: Option<ThemeMode>,

    /// Accent color as 6 hex digits, `#` optional.
    #[arg(long)]
    accent: Option<String>,

    /// TOML file with `mode` and `accent`; flags override it.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// CSS selector for the rule (css format only).
    #[arg(long, default_value = ":root")]
    selector: String,

    /// Print a contrast report for foreground/background pairs to stderr.
    #[arg(long)]
    audit: bool,

    /// Log derivation details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mode(s: &str) -> Result<ThemeMode, String> {
    s.parse().map_err(|e: showcase_theme::ThemeError| e.to_string())
}

// ─── Config ─────────────────────────────────────────────────────────────────

/// On-disk tenant theme; both fields optional so flags can fill gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    mode: Option<ThemeMode>,
    accent: Option<String>,
}

fn load_config(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Flags win over the file; a missing mode falls back to dark.
fn resolve_theme(cli: &Cli, file: ConfigFile) -> TenantTheme {
    TenantTheme {
        mode: cli.mode.or(file.mode).unwrap_or_default(),
        accent: cli.accent.clone().or(file.accent),
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn render(tokens: &TokenSet, format: Format, selector: &str) -> Result<String> {
    match format {
        Format::Css => {
            let mut sink = CssSink::new(selector);
            sink.apply(tokens)?;
            Ok(sink.into_css())
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(tokens)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn audit_report(tokens: &TokenSet) -> String {
    contrast_report(tokens, DEFAULT_TARGET_RATIO)
        .iter()
        .map(|check| {
            let verdict = if check.passes { "ok" } else { "LOW" };
            format!(
                "{verdict:>3}  {:.2}:1  {} on {}\n",
                check.ratio, check.foreground, check.background
            )
        })
        .collect()
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let file = match &cli.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };
    let theme = resolve_theme(cli, file);
    tracing::debug!(mode = %theme.mode, accent = ?theme.accent, "resolved tenant theme");

    let tokens = theme.derive().context("failed to derive theme")?;
    if cli.audit {
        eprint!("{}", audit_report(&tokens));
    }
    render(&tokens, cli.format, &cli.selector)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("showcase-theme: {e:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
