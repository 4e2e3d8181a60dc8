//! CLI definition using clap

use clap::{Parser, Subcommand};
use printcost_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "printcost")]
#[command(author = "tunascraft")]
#[command(version)]
#[command(about = "Cost estimation and quoting for a 3D printing craft shop")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full cost breakdown with every parameter explicit
    Manual {
        /// Piece mass in grams
        #[arg(long)]
        mass: f64,

        /// Print time, whole hours
        #[arg(long, default_value_t = 0.0)]
        hours: f64,

        /// Print time, extra minutes
        #[arg(long, default_value_t = 0.0)]
        minutes: f64,

        /// Spool price per kg
        #[arg(long, default_value_t = 400.0)]
        filament_price: f64,

        /// Printer power draw in watts
        #[arg(long, default_value_t = 150.0)]
        power: f64,

        /// Energy cost per kWh
        #[arg(long, default_value_t = 2.5)]
        kwh_cost: f64,

        /// Post-processing time in minutes
        #[arg(long, default_value_t = 15.0)]
        labor_minutes: f64,

        /// Labor rate per hour
        #[arg(long, default_value_t = 50.0)]
        labor_rate: f64,

        /// Machine depreciation/maintenance per hour
        #[arg(long, default_value_t = 10.0)]
        machine_rate: f64,

        /// Expected failure rate, percent
        #[arg(long, default_value_t = 10.0)]
        failure_rate: f64,

        /// Profit margin, percent
        #[arg(long, default_value_t = 100.0)]
        margin: f64,

        /// Tax (IVA), percent
        #[arg(long, default_value_t = 16.0)]
        tax_rate: f64,
    },

    /// Public quote: mass, time, and margin; shop settings fill in the rest
    Public {
        /// Piece mass in grams
        #[arg(long)]
        mass: f64,

        /// Print time, whole hours
        #[arg(long, default_value_t = 0.0)]
        hours: f64,

        /// Print time, extra minutes
        #[arg(long, default_value_t = 0.0)]
        minutes: f64,

        /// Profit margin, percent. Uses config default if not specified.
        #[arg(long)]
        margin: Option<f64>,

        /// Material preset key (e.g., PLA, PETG)
        #[arg(long, short = 'm')]
        material: Option<String>,

        /// Spool price per kg (overrides the preset price)
        #[arg(long)]
        filament_price: Option<f64>,
    },

    /// Measure an STL model and quote it at the public per-gram rate
    Scan {
        /// Path to the model file
        file: PathBuf,

        /// Material preset key. Uses config default if not specified.
        #[arg(long, short = 'm')]
        material: Option<String>,
    },

    /// Quote every model file in a folder
    Batch {
        /// Folder to scan for .stl files
        folder: PathBuf,

        /// Write the full report as JSON to this path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Parallel jobs. 0 = auto CPU count.
        #[arg(long, short = 'j')]
        jobs: Option<usize>,

        /// Material preset key. Uses config default if not specified.
        #[arg(long, short = 'm')]
        material: Option<String>,
    },

    /// List the material presets
    Materials,

    /// Convert a saved batch report to CSV
    Export {
        /// Path to a batch report JSON file
        report: PathBuf,

        /// Output CSV path. Defaults to the report path with .csv.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the currency code
        #[arg(long)]
        set_currency: Option<String>,

        /// Set the tax (IVA) percentage
        #[arg(long)]
        set_tax_rate: Option<f64>,

        /// Set the setup fee for mesh quotes
        #[arg(long)]
        set_setup_fee: Option<f64>,

        /// Set the assumed throughput for time estimates, g/h
        #[arg(long)]
        set_grams_per_hour: Option<f64>,

        /// Set the default material preset
        #[arg(long)]
        set_default_material: Option<String>,

        /// Set the material preset TOML master file
        #[arg(long)]
        set_materials_path: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
