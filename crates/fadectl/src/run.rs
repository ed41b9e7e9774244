use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use curveconfig::CurveConfig;
use materializer::{DeltaSource, FixedDeltaSource, Materializer, SystemDeltaSource};
use tracing_subscriber::EnvFilter;

use crate::cli::{CheckArgs, RunArgs};
use crate::output::{OutputFormat, StdoutSink};

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: RunArgs) -> Result<()> {
    let Some(config_path) = args.config.as_deref() else {
        bail!("no curve config given; run `fadectl --help`");
    };
    let config = load_config(config_path)?;

    let name = match args.curve.as_deref() {
        Some(name) => name,
        None => config
            .default_curve()
            .context("config sets no defaults.curve; pass --curve NAME")?,
    };
    let resolved = config.resolved_curve(name)?;

    let speed = args.speed.unwrap_or(resolved.speed);
    if !speed.is_finite() || speed <= 0.0 {
        bail!("--speed must be > 0");
    }

    let mode = args.direction.unwrap_or(resolved.on_load);
    tracing::debug!(
        curve = name,
        parameter = %resolved.parameter,
        speed,
        ?mode,
        keys = resolved.curve.keys().len(),
        end_time = resolved.curve.end_time(),
        "resolved curve"
    );

    let mut driver =
        Materializer::new(resolved.curve, speed).with_parameter(resolved.parameter);
    driver.apply_start_mode(mode);
    if !driver.is_running() {
        tracing::info!(
            curve = name,
            "no playback selected (on_load = none and no --direction); nothing to do"
        );
        return Ok(());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut sink = StdoutSink::new(format);

    match args.fixed_delta {
        Some(dt) => {
            if !dt.is_finite() || dt <= 0.0 {
                bail!("--fixed-delta must be > 0");
            }
            let mut source = FixedDeltaSource::new(dt);
            while driver.tick(source.delta(), &mut sink) {}
        }
        None => {
            if !args.fps.is_finite() || args.fps <= 0.0 {
                bail!("--fps must be > 0");
            }
            let frame = Duration::from_secs_f32(1.0 / args.fps);
            let mut source = SystemDeltaSource::new();
            source.reset();
            while driver.tick(source.delta(), &mut sink) {
                thread::sleep(frame);
            }
        }
    }

    tracing::debug!(curve = name, amount = driver.amount(), "playback complete");
    Ok(())
}

pub fn check(args: CheckArgs) -> Result<()> {
    let config = load_config(&args.config)?;

    println!("Curves in {}:", args.config.display());
    for (name, def) in &config.curves {
        let resolved = config.resolved_curve(name)?;
        println!(
            "  {name:<20} keys={:<3} domain=[0, {:.3}] speed={:.2} interpolation={} parameter={}",
            def.keys.len(),
            resolved.curve.end_time(),
            resolved.speed,
            def.interpolation,
            resolved.parameter
        );
    }
    if let Some(default) = config.default_curve() {
        println!("Default curve: {default}");
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<CurveConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read curve config {}", path.display()))?;
    CurveConfig::from_toml_str(&raw)
        .with_context(|| format!("failed to load curve config {}", path.display()))
}
