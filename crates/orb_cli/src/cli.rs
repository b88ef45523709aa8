use clap::{Parser, ValueEnum};
use log::LevelFilter;
use orb_renderer::{RenderConfig, Shading};
use serde::Deserialize;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Shading mode, shared by the command line and scene files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    Path,
    Normals,
}

impl From<ShadingMode> for Shading {
    fn from(mode: ShadingMode) -> Self {
        match mode {
            ShadingMode::Path => Shading::PathTraced,
            ShadingMode::Normals => Shading::Normals,
        }
    }
}

/// Render settings a scene file may carry. Unset fields fall back to
/// the renderer defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOverrides {
    pub samples_per_pixel: Option<u32>,
    pub max_depth: Option<u32>,
    pub shading: Option<ShadingMode>,
    pub seed: Option<u64>,
    pub jitter: Option<bool>,
}

impl RenderOverrides {
    /// Layer `self` over `base`, keeping base values where unset.
    pub fn over(&self, base: &RenderOverrides) -> RenderOverrides {
        RenderOverrides {
            samples_per_pixel: self.samples_per_pixel.or(base.samples_per_pixel),
            max_depth: self.max_depth.or(base.max_depth),
            shading: self.shading.or(base.shading),
            seed: self.seed.or(base.seed),
            jitter: self.jitter.or(base.jitter),
        }
    }

    pub fn to_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            samples_per_pixel: self.samples_per_pixel.unwrap_or(defaults.samples_per_pixel),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            shading: self.shading.map(Shading::from).unwrap_or(defaults.shading),
            jitter: self.jitter.unwrap_or(defaults.jitter),
            seed: self.seed.unwrap_or(defaults.seed),
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "orb")]
#[command(about = "Render a scene of spheres with a CPU path tracer")]
pub struct Args {
    /// Scene description (JSON). Defaults to the built-in four-sphere scene
    #[arg(long)]
    pub scene: Option<String>,

    /// Image width in pixels
    #[arg(long, default_value = "400")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "225")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    #[arg(long, value_enum)]
    pub shading: Option<ShadingMode>,

    /// Sample every pixel at its corner instead of jittering
    #[arg(long)]
    pub no_jitter: bool,

    /// Seed for the sample streams
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (0 = one per core, 1 = single-threaded)
    #[arg(long, short = 'j', default_value = "0")]
    pub threads: usize,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings given explicitly on the command line.
    pub fn overrides(&self) -> RenderOverrides {
        RenderOverrides {
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            shading: self.shading,
            seed: self.seed,
            jitter: self.no_jitter.then_some(false),
        }
    }
}
