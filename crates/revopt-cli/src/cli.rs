use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (defaults to [logging].level, then "info")
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Path to a revopt.toml configuration file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Booking export to load (overrides [data].path)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Price elasticity of demand (overrides [simulation].elasticity)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub elasticity: Option<f64>,

    /// Skip malformed rows instead of failing the load
    #[arg(long, global = true)]
    pub skip_invalid_rows: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every chart plus the simulation panel
    Dashboard {
        /// Room type (defaults to the first one in the data)
        #[arg(long)]
        room: Option<String>,
        /// Check-in month as YYYY-MM (defaults to the room's first month)
        #[arg(long)]
        month: Option<String>,
        /// Proposed price (defaults to the recommended price)
        #[arg(long)]
        price: Option<f64>,
        /// Width of the text charts
        #[arg(long, default_value_t = 60)]
        width: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Booking count and revenue per price point
    Revenue {
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Current (mean) vs recommended (median) price per month
    Compare {
        /// Only show this room type
        #[arg(long)]
        room: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Predict bookings and revenue at a proposed price
    Simulate {
        #[arg(long)]
        room: String,
        /// Check-in month as YYYY-MM
        #[arg(long)]
        month: String,
        /// Proposed price (defaults to the recommended price)
        #[arg(long)]
        price: Option<f64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// List room types
    Rooms,
    /// List months with bookings for a room type
    Months {
        #[arg(long)]
        room: String,
    },
    /// Write the derived tables to disk
    Export {
        /// Output directory
        #[arg(short, long, value_hint = ValueHint::DirPath)]
        out_dir: PathBuf,
        /// csv or parquet
        #[arg(long, default_value = "csv")]
        format: String,
    },
    /// Interactive panel: change room, month and price and see the effect
    Explore {
        #[arg(long, default_value_t = 60)]
        width: usize,
    },
    /// Print the resolved configuration as TOML
    Config,
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
