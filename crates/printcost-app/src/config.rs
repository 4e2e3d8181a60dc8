//! Configuration management for printcost
//!
//! Config stored at: ~/.config/printcost/config.json
//!
//! The energy/labor/machine/failure/tax defaults double as the hidden shop
//! settings of the public quote flow, so changing them here changes what a
//! public quote charges.

use printcost_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Currency code shown next to prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Average printer power draw in watts
    #[serde(default = "default_power_rating_watts")]
    pub power_rating_watts: f64,

    /// Energy tariff per kWh
    #[serde(default = "default_energy_cost_per_kwh")]
    pub energy_cost_per_kwh: f64,

    /// Hourly rate for post-processing labor
    #[serde(default = "default_labor_rate_per_hour")]
    pub labor_rate_per_hour: f64,

    /// Average post-processing time per piece, minutes
    #[serde(default = "default_post_processing_minutes")]
    pub post_processing_minutes: f64,

    /// Printer depreciation/maintenance per machine-hour
    #[serde(default = "default_machine_rate_per_hour")]
    pub machine_rate_per_hour: f64,

    /// Expected scrap allowance, percent
    #[serde(default = "default_failure_rate_percent")]
    pub failure_rate_percent: f64,

    /// Default markup for public quotes, percent
    #[serde(default = "default_profit_margin_percent")]
    pub default_profit_margin_percent: f64,

    /// Sales tax (IVA), percent
    #[serde(default = "default_tax_rate_percent")]
    pub tax_rate_percent: f64,

    /// Fixed setup fee added to mesh-derived quotes
    #[serde(default = "default_setup_fee")]
    pub setup_fee: f64,

    /// Assumed deposition throughput for time estimates, g/h
    #[serde(default = "default_grams_per_hour")]
    pub grams_per_hour: f64,

    /// Material preset used when none is specified
    #[serde(default = "default_material")]
    pub default_material: String,

    /// Optional TOML master file overriding the built-in material presets
    #[serde(default)]
    pub materials_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_currency() -> String {
    "MXN".to_string()
}

fn default_power_rating_watts() -> f64 {
    150.0
}

fn default_energy_cost_per_kwh() -> f64 {
    2.5
}

fn default_labor_rate_per_hour() -> f64 {
    50.0
}

fn default_post_processing_minutes() -> f64 {
    15.0
}

fn default_machine_rate_per_hour() -> f64 {
    5.0
}

fn default_failure_rate_percent() -> f64 {
    10.0
}

fn default_profit_margin_percent() -> f64 {
    200.0
}

fn default_tax_rate_percent() -> f64 {
    16.0
}

fn default_setup_fee() -> f64 {
    50.0
}

fn default_grams_per_hour() -> f64 {
    12.0
}

fn default_material() -> String {
    "PLA".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            power_rating_watts: default_power_rating_watts(),
            energy_cost_per_kwh: default_energy_cost_per_kwh(),
            labor_rate_per_hour: default_labor_rate_per_hour(),
            post_processing_minutes: default_post_processing_minutes(),
            machine_rate_per_hour: default_machine_rate_per_hour(),
            failure_rate_percent: default_failure_rate_percent(),
            default_profit_margin_percent: default_profit_margin_percent(),
            tax_rate_percent: default_tax_rate_percent(),
            setup_fee: default_setup_fee(),
            grams_per_hour: default_grams_per_hour(),
            default_material: default_material(),
            materials_path: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("printcost");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Printcost Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Currency:             {}", self.currency)?;
        writeln!(f, "Power rating:         {} W", self.power_rating_watts)?;
        writeln!(f, "Energy cost:          {}/kWh", self.energy_cost_per_kwh)?;
        writeln!(f, "Labor rate:           {}/h", self.labor_rate_per_hour)?;
        writeln!(f, "Post-processing:      {} min", self.post_processing_minutes)?;
        writeln!(f, "Machine rate:         {}/h", self.machine_rate_per_hour)?;
        writeln!(f, "Failure rate:         {}%", self.failure_rate_percent)?;
        writeln!(f, "Default margin:       {}%", self.default_profit_margin_percent)?;
        writeln!(f, "Tax rate (IVA):       {}%", self.tax_rate_percent)?;
        writeln!(f, "Setup fee:            {}", self.setup_fee)?;
        writeln!(f, "Throughput:           {} g/h", self.grams_per_hour)?;
        writeln!(f, "Default material:     {}", self.default_material)?;
        writeln!(
            f,
            "Materials file:       {}",
            self.materials_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in presets)".to_string())
        )?;
        writeln!(f, "Output format:        {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:          {}", path.display())?;
        }

        Ok(())
    }
}
