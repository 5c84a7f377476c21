#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeArg {
    /// Pale sky with black outlines
    #[default]
    Daylight,
    /// Deep blue sky with light outlines
    Dusk,
    /// Keep the terminal's own background
    Terminal,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for tracing::Level {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => tracing::Level::ERROR,
            LogLevelArg::Warn => tracing::Level::WARN,
            LogLevelArg::Info => tracing::Level::INFO,
            LogLevelArg::Debug => tracing::Level::DEBUG,
            LogLevelArg::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "balloon-ascension",
    version,
    about = "Hot-air-balloon fleets rising in your terminal"
)]
pub struct Cli {
    /// Number of fleets, one panel each (1..6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub fleets: Option<u8>,

    /// Animation period per fleet in milliseconds (20..1000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(20..=1000))]
    pub tick_ms: Option<u64>,

    /// Base balloon unit in world units
    #[arg(long, value_parser = clap::value_parser!(i32).range(2..=200))]
    pub base_unit: Option<i32>,

    /// Seed for reproducible fleets and jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial ascent speed for every fleet (-10..10)
    #[arg(long, allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-10..=10))]
    pub ascent: Option<i32>,

    /// Initial jitter intensity for every fleet (0..10)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub jitter: Option<u32>,

    /// One ascent slider drives every fleet
    #[arg(long)]
    pub linked_ascent: bool,

    /// Scene configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Daylight)]
    pub theme: ThemeArg,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity (with --log-file)
    #[arg(long, value_enum, default_value_t = LogLevelArg::Info)]
    pub log_level: LogLevelArg,

    /// Simulate without a terminal UI and print the scene as JSON
    #[arg(long)]
    pub snapshot: bool,

    /// Animation steps per fleet before printing (with --snapshot)
    #[arg(long, default_value_t = 0)]
    pub ticks: u32,
}
