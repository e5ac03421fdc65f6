//! Command-line argument definitions using clap

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::studio::{uploaded_vision, GenerationDelays};

/// BrandForge - Build a startup brand kit from a one-paragraph vision
#[derive(Parser, Debug)]
#[command(name = "brandforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Startup vision to pre-fill the first step with
    #[arg(short, long)]
    pub vision: Option<String>,

    /// Pitch deck to "upload" instead of typing a vision.
    /// The file is not read; its name is used for a placeholder vision.
    #[arg(long, conflicts_with = "vision")]
    pub pitch_deck: Option<PathBuf>,

    /// Run without the terminal UI, picking suggestions by number
    #[arg(long, default_value = "false")]
    pub no_tui: bool,

    /// Brand identity suggestion to use in --no-tui mode (1-based)
    #[arg(long, default_value = "1", value_parser = validate_choice)]
    pub identity: usize,

    /// Color palette to use in --no-tui mode (1-based)
    #[arg(long, default_value = "1", value_parser = validate_choice)]
    pub palette: usize,

    /// Logo concept to use in --no-tui mode (1-based)
    #[arg(long, default_value = "1", value_parser = validate_choice)]
    pub logo: usize,

    /// Print the finished brand kit as JSON instead of a table
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Run the simulated basic export after a --no-tui run
    #[arg(long, default_value = "false", conflicts_with = "json")]
    pub export: bool,

    /// Multiplier for the simulated generation delays (0 = instant)
    #[arg(long, default_value = "1.0", value_parser = validate_delay_scale)]
    pub delay_scale: f64,

    /// Directory for log files.
    /// Defaults to <local data dir>/brandforge/logs.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the example visions used for inspiration
    Examples,
}

impl Cli {
    /// Vision supplied on the command line, from --vision or --pitch-deck.
    pub fn initial_vision(&self) -> Result<Option<String>> {
        if let Some(vision) = &self.vision {
            return Ok(Some(vision.clone()));
        }
        let Some(path) = &self.pitch_deck else {
            return Ok(None);
        };
        if !path.is_file() {
            bail!("Pitch deck not found: {}", path.display());
        }
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("pitch-deck");
        Ok(Some(uploaded_vision(file_name)))
    }

    /// Generation delays scaled by --delay-scale
    pub fn delays(&self) -> GenerationDelays {
        GenerationDelays::scaled(self.delay_scale)
    }
}

/// Validator for 1-based selections
fn validate_choice(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("selections start at 1".to_string())
    } else {
        Ok(value)
    }
}

/// Validator for delay_scale parameter
fn validate_delay_scale(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value < 0.0 {
        Err(format!(
            "delay_scale must be a non-negative number, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_choice() {
        assert_eq!(validate_choice("2"), Ok(2));
        assert!(validate_choice("0").is_err());
        assert!(validate_choice("-1").is_err());
    }

    #[test]
    fn test_validate_delay_scale() {
        assert_eq!(validate_delay_scale("0"), Ok(0.0));
        assert!(validate_delay_scale("-0.5").is_err());
        assert!(validate_delay_scale("inf").is_err());
        assert!(validate_delay_scale("NaN").is_err());
    }
}
