//! petal - selective hue recoloring and background matting for PNG images
//!
//! Pixels whose hue falls in a configurable band are remapped (deep red, pink
//! folded into red, or any recipe), and near-white or light gray backdrops can
//! be made transparent.

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use petal_ops::{OpsError, Preset};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "petal")]
#[command(author, version, about = "Selective hue recoloring and background matting")]
#[command(long_about = "
Recolors pixels of a PNG image whose hue lies in a band, and mattes flat
light backgrounds to transparency. Alpha is never altered by recoloring
and fully transparent pixels are left alone.

Examples:
  petal recolor flower.png -o flower_red.png
  petal recolor flower.png -o out.png --preset pink-to-red
  petal recolor flower.png -o out.png --low 0.1 --high 0.9 --target-hue 0.0
  petal recolor flower.png -o out.png -c recipe.yaml
  petal matte product.png -o product_cut.png --no-gray
  petal inspect flower.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor pixels whose hue lies in a band
    #[command(visible_alias = "r")]
    Recolor(RecolorArgs),

    /// Make near-white and light gray pixels transparent
    #[command(visible_alias = "m")]
    Matte(MatteArgs),

    /// Report what recolor and matte would select, without writing
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// Hue band overrides shared by `recolor` and `inspect`.
#[derive(Args, Clone, Default)]
pub struct BandArgs {
    /// Built-in recipe (deep-red, pink-to-red)
    #[arg(short, long, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// YAML recipe file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hues strictly below this are eligible
    #[arg(long)]
    pub low: Option<f32>,

    /// Hues strictly above this are eligible
    #[arg(long)]
    pub high: Option<f32>,
}

#[derive(Args)]
pub struct RecolorArgs {
    /// Input PNG
    #[arg(required_unless_present = "dump_recipe")]
    pub input: Option<PathBuf>,

    /// Output PNG
    #[arg(short, long, required_unless_present = "dump_recipe")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub band: BandArgs,

    /// Set every eligible hue to this value
    #[arg(long, conflicts_with = "keep_hue")]
    pub target_hue: Option<f32>,

    /// Leave hue untouched, only scale saturation and value
    #[arg(long)]
    pub keep_hue: bool,

    /// Saturation multiplier
    #[arg(short, long)]
    pub saturation: Option<f32>,

    /// Value (brightness) multiplier
    #[arg(long)]
    pub value: Option<f32>,

    /// Print the effective recipe as YAML and exit
    #[arg(long)]
    pub dump_recipe: bool,
}

#[derive(Args)]
pub struct MatteArgs {
    /// Input PNG
    pub input: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub matte: MatteOptionArgs,

    /// Also zero RGB of matted pixels
    #[arg(long)]
    pub clear_color: bool,
}

/// Matte predicate flags shared by `matte` and `inspect`.
#[derive(Args, Clone)]
pub struct MatteOptionArgs {
    /// Channels at or above this count as white
    #[arg(short = 't', long, default_value = "250")]
    pub white_threshold: u8,

    /// Maximum r/g and g/b spread (exclusive) for the gray test
    #[arg(long, default_value = "10")]
    pub gray_tolerance: u8,

    /// Red must exceed this for the gray test
    #[arg(long, default_value = "200")]
    pub gray_min: u8,

    /// Disable the gray test
    #[arg(long)]
    pub no_gray: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Input PNG files
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    #[command(flatten)]
    pub band: BandArgs,

    #[command(flatten)]
    pub matte: MatteOptionArgs,
}

fn parse_preset(s: &str) -> std::result::Result<Preset, String> {
    s.parse().map_err(|e: OpsError| e.to_string())
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the verbosity flag. With a log file the returned guard
/// must live until exit so buffered lines are flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to install logger: {e}"))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to install logger: {e}"))?;
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Recolor(args) => commands::recolor::run(args, cli.verbose),
        Commands::Matte(args) => commands::matte::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
    }
}
