//! `pirevision` — decode Raspberry Pi revision codes.
//!
//! ```text
//! USAGE:
//!   pirevision                       Decode this board's code from /proc/cpuinfo
//!   pirevision a02082 0x0002         Decode each code given (hex, 0x optional)
//!   pirevision -j c03111             Same, as JSON
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pirev_decoder::{cpuinfo, decode, parse_code, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pirevision", about = "Decode Raspberry Pi revision codes", version)]
struct Cli {
    /// Print JSON instead of text.
    #[arg(short, long)]
    json: bool,

    /// Report codes that fail to decode and continue with the rest.
    #[arg(long)]
    keep_going: bool,

    /// cpuinfo file to read when no codes are given.
    #[arg(long, value_name = "PATH", default_value = cpuinfo::DEFAULT_PATH)]
    cpuinfo: PathBuf,

    /// Revision codes in hex (e.g. a02082 or 0xa02082).
    codes: Vec<String>,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format();

    if cli.codes.is_empty() {
        return cmd_host(&cli.cpuinfo, format);
    }
    cmd_codes(&cli.codes, format, cli.keep_going)
}

fn cmd_host(path: &Path, format: OutputFormat) -> Result<()> {
    let code = cpuinfo::read_revision(path)?;
    print_code(&code, format)
}

fn cmd_codes(codes: &[String], format: OutputFormat, keep_going: bool) -> Result<()> {
    if !keep_going {
        for code in codes {
            print_code(code, format)?;
        }
        return Ok(());
    }

    let mut failed = 0usize;
    for code in codes {
        if let Err(e) = print_code(code, format) {
            eprintln!("Error: {e:#}");
            failed += 1;
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} revision codes could not be decoded", codes.len());
    }
    Ok(())
}

fn print_code(input: &str, format: OutputFormat) -> Result<()> {
    tracing::debug!("Decoding {input:?}");
    let raw = parse_code(input)?;
    let result = decode(raw).with_context(|| format!("Revision code \"{input}\""))?;
    let rendered = format.render(&result).context("Rendering output")?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pirevision"]).unwrap();
        assert!(cli.codes.is_empty());
        assert_eq!(cli.format(), OutputFormat::Text);
        assert_eq!(cli.cpuinfo, PathBuf::from("/proc/cpuinfo"));
        assert!(!cli.keep_going);
    }

    #[test]
    fn test_json_flag_and_codes() {
        let cli = Cli::try_parse_from(["pirevision", "-j", "a02082", "0x0002"]).unwrap();
        assert_eq!(cli.format(), OutputFormat::Json);
        assert_eq!(cli.codes, ["a02082", "0x0002"]);

        let cli = Cli::try_parse_from(["pirevision", "--json", "c03111"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_first_error_aborts() {
        assert!(cmd_codes(&["zz".to_string(), "a02082".to_string()], OutputFormat::Text, false).is_err());
    }

    #[test]
    fn test_keep_going_still_fails() {
        let codes = ["0002".to_string(), "0000".to_string(), "a02082".to_string()];
        let err = cmd_codes(&codes, OutputFormat::Text, true).unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 revision codes could not be decoded");
    }

    #[test]
    fn test_missing_cpuinfo() {
        assert!(cmd_host(Path::new("/nonexistent/cpuinfo"), OutputFormat::Text).is_err());
    }
}
