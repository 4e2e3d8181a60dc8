//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_batch_report, output_breakdown, output_mesh_quote};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use printcost_app::config::Config;
use printcost_app::constants::builtin_presets;
use printcost_app::export::export_to_csv;
use printcost_app::quote::{
    self, BatchEntry, BatchReport, MeshQuote, PublicQuoteRequest, QuoteServiceError,
};
use printcost_app::scanner::{scan_directory, validate_model};
use printcost_domain::model::{CostInputs, MaterialSpec};
use printcost_domain::repository::MaterialRepository;
use printcost_domain::service::duration_hours;
use printcost_infra::FileMaterialRepository;
use printcost_types::{Error, OutputFormat, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match &cli.command {
        Commands::Manual {
            mass,
            hours,
            minutes,
            filament_price,
            power,
            kwh_cost,
            labor_minutes,
            labor_rate,
            machine_rate,
            failure_rate,
            margin,
            tax_rate,
        } => {
            let inputs = CostInputs {
                material_price_per_kg: *filament_price,
                part_mass_grams: *mass,
                print_duration_hours: duration_hours(*hours, *minutes),
                power_rating_watts: *power,
                energy_cost_per_kwh: *kwh_cost,
                post_processing_minutes: *labor_minutes,
                labor_rate_per_hour: *labor_rate,
                machine_rate_per_hour: *machine_rate,
                failure_rate_percent: *failure_rate,
                profit_margin_percent: *margin,
                tax_rate_percent: *tax_rate,
            };
            cmd_manual(&config, &inputs)
        }

        Commands::Public {
            mass,
            hours,
            minutes,
            margin,
            material,
            filament_price,
        } => cmd_public(
            &config,
            *mass,
            *hours,
            *minutes,
            *margin,
            material.clone(),
            *filament_price,
        ),

        Commands::Scan { file, material } => cmd_scan(&cli, &config, file.clone(), material.clone()),

        Commands::Batch {
            folder,
            output,
            jobs,
            material,
        } => {
            // Use CLI jobs if specified, otherwise default 4. 0 = auto CPU count.
            let job_count = match jobs {
                Some(0) => num_cpus::get(),
                Some(n) => *n,
                None => 4,
            };
            cmd_batch(
                &cli,
                &config,
                folder.clone(),
                output.clone(),
                job_count,
                material.clone(),
            )
        }

        Commands::Materials => cmd_materials(&config),

        Commands::Export { report, output } => cmd_export(report.clone(), output.clone()),

        Commands::Config {
            show,
            set_currency,
            set_tax_rate,
            set_setup_fee,
            set_grams_per_hour,
            set_default_material,
            set_materials_path,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_currency.clone(),
            *set_tax_rate,
            *set_setup_fee,
            *set_grams_per_hour,
            set_default_material.clone(),
            set_materials_path.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn quote_error(e: QuoteServiceError) -> Error {
    match e {
        QuoteServiceError::UnknownMaterial(key) => Error::UnknownMaterial(key),
        QuoteServiceError::Mesh(mesh) => Error::Mesh(mesh.to_string()),
        other => Error::QuoteFailed(other.to_string()),
    }
}

fn cmd_manual(config: &Config, inputs: &CostInputs) -> Result<()> {
    let breakdown = quote::manual_quote(inputs).map_err(quote_error)?;
    output_breakdown(config.output_format, &breakdown, &config.currency)
}

fn cmd_public(
    config: &Config,
    mass: f64,
    hours: f64,
    minutes: f64,
    margin: Option<f64>,
    material: Option<String>,
    filament_price: Option<f64>,
) -> Result<()> {
    let material_key = material.unwrap_or_else(|| config.default_material.clone());
    let spec = quote::resolve_material(&material_key, config).map_err(quote_error)?;

    let request = PublicQuoteRequest {
        mass_grams: mass,
        hours,
        minutes,
        profit_margin_percent: margin.unwrap_or(config.default_profit_margin_percent),
        material_price_per_kg: filament_price.unwrap_or(spec.price_per_kg),
    };

    let breakdown = quote::public_quote(&request, config).map_err(quote_error)?;
    output_breakdown(config.output_format, &breakdown, &config.currency)
}

fn cmd_scan(cli: &Cli, config: &Config, file: PathBuf, material: Option<String>) -> Result<()> {
    validate_model(&file)?;

    let material_key = material.unwrap_or_else(|| config.default_material.clone());
    let spec = quote::resolve_material(&material_key, config).map_err(quote_error)?;

    if cli.verbose {
        eprintln!("Measuring model: {}", file.display());
    }

    let quote = quote::mesh_quote(&file, &material_key, &spec, config).map_err(quote_error)?;

    if cli.verbose {
        eprintln!(
            "{} triangulated facets priced as {} ({})",
            file.display(),
            quote.material,
            spec.name
        );
    }

    output_mesh_quote(config.output_format, &quote, &config.currency)
}

/// Result from a single quoting task
#[derive(Debug)]
struct QuoteTaskResult {
    model_path: PathBuf,
    result: std::result::Result<MeshQuote, String>,
}

fn cmd_batch(
    cli: &Cli,
    config: &Config,
    folder: PathBuf,
    output: Option<PathBuf>,
    jobs: usize,
    material: Option<String>,
) -> Result<()> {
    // Scan directory
    let models = scan_directory(&folder)?;

    if models.is_empty() {
        return Err(Error::FileNotFound(format!(
            "No model files found in {}",
            folder.display()
        )));
    }

    let material_key = material.unwrap_or_else(|| config.default_material.clone());
    let spec = quote::resolve_material(&material_key, config).map_err(quote_error)?;

    let total_models = models.len();
    if cli.verbose {
        eprintln!(
            "Found {} models to quote as {} with {} parallel jobs",
            total_models, material_key, jobs
        );
    }

    // Setup progress bar
    let pb = ProgressBar::new(total_models as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Shared results collector
    let results: Arc<Mutex<Vec<QuoteTaskResult>>> = Arc::new(Mutex::new(Vec::new()));
    let models = Arc::new(models);
    let next_index = Arc::new(AtomicUsize::new(0));

    // Track timing
    let started_at = Utc::now();

    // Spawn worker threads
    let mut handles = Vec::new();
    let verbose = cli.verbose;
    let job_count = jobs.min(total_models).max(1);

    for worker_id in 0..job_count {
        let models = Arc::clone(&models);
        let next_index = Arc::clone(&next_index);
        let results = Arc::clone(&results);
        let config = config.clone();
        let spec = spec.clone();
        let material_key = material_key.clone();
        let pb = pb.clone();

        let handle = thread::spawn(move || loop {
            // Get next model to process (lock-free)
            let idx = next_index.fetch_add(1, Ordering::SeqCst);
            if idx >= models.len() {
                break;
            }

            let model = &models[idx];

            let filename = model
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string();

            if verbose {
                pb.set_message(format!("[W{}] {}", worker_id, filename));
            }

            let result = quote::mesh_quote(model, &material_key, &spec, &config)
                .map_err(|e| e.to_string());

            // Store result
            {
                let mut results_guard = results.lock().unwrap();
                results_guard.push(QuoteTaskResult {
                    model_path: model.clone(),
                    result,
                });
            }

            pb.inc(1);
        });

        handles.push(handle);
    }

    // Wait for all workers to complete
    for handle in handles {
        let _ = handle.join();
    }

    pb.finish_with_message("Complete");

    let completed_at = Utc::now();

    // Collect results
    let task_results = Arc::try_unwrap(results)
        .expect("All workers should be done")
        .into_inner()
        .unwrap();

    // Convert to entries
    let mut entries = Vec::new();
    let mut successful = 0;
    let mut failed = 0;

    for task_result in task_results {
        match task_result.result {
            Ok(quote) => {
                entries.push(BatchEntry {
                    file: task_result.model_path.display().to_string(),
                    quoted_at: Utc::now(),
                    quote,
                });
                successful += 1;
            }
            Err(e) => {
                if cli.verbose {
                    eprintln!("Failed to quote {}: {}", task_result.model_path.display(), e);
                }
                failed += 1;
            }
        }
    }

    // Sort entries by file path for consistent output
    entries.sort_by(|a, b| a.file.cmp(&b.file));

    let report = BatchReport {
        entries,
        total_processed: total_models,
        successful,
        failed,
        started_at,
        completed_at,
    };

    // Output results
    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(&output_path, content)?;
        println!("Report saved to: {}", output_path.display());
    } else {
        output_batch_report(config.output_format, &report, &config.currency)?;
    }

    Ok(())
}

fn cmd_materials(config: &Config) -> Result<()> {
    let presets: Vec<(String, MaterialSpec)> = match &config.materials_path {
        Some(path) => {
            let repo = FileMaterialRepository::new(path.clone())?;
            repo.find_all()?
        }
        None => builtin_presets().into_iter().collect(),
    };

    if config.output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&presets)?;
        println!("{}", content);
        return Ok(());
    }

    println!("Material Presets");
    println!("================");
    println!(
        "{:<8} {:<20} {:>8} {:>10} {:>8}",
        "Key", "Name", "$/kg", "g/cm³", "$/g"
    );
    println!("{}", "-".repeat(58));

    for (key, spec) in &presets {
        println!(
            "{:<8} {:<20} {:>8.2} {:>10.2} {:>8.2}",
            key, spec.name, spec.price_per_kg, spec.density_g_cm3, spec.price_per_gram
        );
    }

    Ok(())
}

fn cmd_export(report_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    // Load report
    let content = std::fs::read_to_string(&report_path)?;
    let report: BatchReport = serde_json::from_str(&content)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| report_path.with_extension("csv"));

    // Export to CSV
    export_to_csv(&report, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_currency: Option<String>,
    set_tax_rate: Option<f64>,
    set_setup_fee: Option<f64>,
    set_grams_per_hour: Option<f64>,
    set_default_material: Option<String>,
    set_materials_path: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if let Some(tax_rate) = set_tax_rate {
        config.tax_rate_percent = tax_rate;
        modified = true;
    }

    if let Some(setup_fee) = set_setup_fee {
        config.setup_fee = setup_fee;
        modified = true;
    }

    if let Some(grams_per_hour) = set_grams_per_hour {
        config.grams_per_hour = grams_per_hour;
        modified = true;
    }

    if let Some(material) = set_default_material {
        config.default_material = material;
        modified = true;
    }

    if let Some(path) = set_materials_path {
        config.materials_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
