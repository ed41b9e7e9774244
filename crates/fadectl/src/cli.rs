use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use curveconfig::StartMode;

#[derive(Parser, Debug)]
#[command(
    name = "fadectl",
    author,
    version,
    about = "Materialization curve playback",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Curve config TOML file.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Curve to play (defaults to the config's `defaults.curve`).
    #[arg(long, value_name = "NAME")]
    pub curve: Option<String>,

    /// Playback direction; overrides the config's `on_load` mode.
    #[arg(long, value_name = "DIRECTION", value_parser = parse_direction)]
    pub direction: Option<StartMode>,

    /// Curve-time advanced per real-time second; overrides the config.
    #[arg(long, value_name = "SPEED")]
    pub speed: Option<f32>,

    /// Ticks per second for real-time playback.
    #[arg(long, value_name = "FPS", default_value_t = 60.0)]
    pub fps: f32,

    /// Step with a fixed per-tick delta (seconds) instead of the system
    /// clock; disables frame pacing for deterministic output.
    #[arg(long, value_name = "SECONDS")]
    pub fixed_delta: Option<f32>,

    /// Emit one JSON object per write instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a curve config file and summarise its curves.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Curve config TOML file.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

fn parse_direction(raw: &str) -> Result<StartMode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "materialize" | "in" | "construct" => Ok(StartMode::Materialize),
        "unmaterialize" | "out" | "dissolve" => Ok(StartMode::Unmaterialize),
        "none" => Ok(StartMode::None),
        other => Err(format!(
            "invalid direction '{other}'; expected 'materialize', 'unmaterialize', or 'none'"
        )),
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direction_aliases() {
        assert_eq!(parse_direction("materialize"), Ok(StartMode::Materialize));
        assert_eq!(parse_direction("OUT"), Ok(StartMode::Unmaterialize));
        assert_eq!(parse_direction("none"), Ok(StartMode::None));
        assert!(parse_direction("sideways").is_err());
    }

    #[test]
    fn cli_accepts_playback_flags() {
        let cli = Cli::parse_from([
            "fadectl",
            "curves.toml",
            "--curve",
            "construct",
            "--direction",
            "dissolve",
            "--fixed-delta",
            "0.5",
            "--json",
        ]);
        assert_eq!(cli.run.curve.as_deref(), Some("construct"));
        assert_eq!(cli.run.direction, Some(StartMode::Unmaterialize));
        assert_eq!(cli.run.fixed_delta, Some(0.5));
        assert!(cli.run.json);
    }
}
