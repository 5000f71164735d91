//! Command line and logging setup for the terminal runner.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::core::{ConfigError, GameConfig};
use crate::types::{RotationPolicy, DEFAULT_BOARD_ROWS, DEFAULT_SPEED};

/// Rotation policy as spelled on the command line
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RotationArg {
    /// Rotate around the top-left corner; rotations that do not fit are ignored
    Anchored,
    /// Like anchored, then try shifting left, right, up and down by one
    WallKick,
}

impl From<RotationArg> for RotationPolicy {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::Anchored => RotationPolicy::PivotAnchored,
            RotationArg::WallKick => RotationPolicy::WallKick,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle for the terminal")]
pub struct Cli {
    #[arg(long, default_value_t = DEFAULT_BOARD_ROWS, help = "Board height in rows (4-40)")]
    pub rows: u8,

    #[arg(long, default_value_t = DEFAULT_SPEED, help = "Fall speed; 5 and above fall five rows per second")]
    pub speed: u32,

    #[arg(long, help = "Seed for the piece sequence (random when omitted)")]
    pub seed: Option<u32>,

    #[arg(long, value_enum, default_value_t = RotationArg::Anchored, help = "Rotation policy")]
    pub rotation: RotationArg,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,

    #[arg(long, help = "Write logs to this file (the terminal is used by the game)")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Validated game configuration from the parsed arguments
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig::default()
            .with_rows(self.rows)
            .with_speed(self.speed)
            .with_rotation_policy(self.rotation.into())
            .with_seed(self.seed.unwrap_or_else(clock_seed));
        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Install the global subscriber when a log file was requested.
///
/// Without `--log-file` no subscriber is installed and events are discarded,
/// since stdout belongs to the game screen.
pub fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(cli.log_level())
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
