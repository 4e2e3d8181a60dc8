//! Quote orchestration
//!
//! Three flows, matching how the shop actually quotes:
//!
//! - manual: the admin calculator; every parameter explicit, exact pricing.
//! - public: visitor supplies mass/time/margin, everything else comes from
//!   the hidden shop settings in [`Config`]; the pre-tax price is rounded
//!   up to the nearest 5 before tax.
//! - mesh: an uploaded STL is measured and priced with the flat per-gram
//!   rate plus setup fee. Mesh quotes never go through the full breakdown;
//!   the per-gram rate already covers time and labor.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use printcost_domain::model::{CostBreakdown, CostInputs, MaterialSpec};
use printcost_domain::repository::MaterialRepository;
use printcost_domain::service::{
    duration_hours, estimate_cost, estimate_cost_with_policy, estimate_print_hours,
    estimated_mass_grams, flat_price, gram_pricing::MM3_PER_CM3, RoundingPolicy,
};
use printcost_infra::FileMaterialRepository;
use printcost_mesh::{load_stl, measure_volume, MeshError};

use crate::config::Config;
use crate::constants::get_material_preset;

/// Price step for public quotes: round up to the nearest 5 before tax
const PUBLIC_PRICE_STEP: f64 = 5.0;

#[derive(Debug, Error)]
pub enum QuoteServiceError {
    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("material preset error: {0}")]
    Presets(String),

    #[error("quote produced a non-finite result, check the inputs")]
    NonFinite,
}

/// What a public visitor fills in; everything else is shop configuration
#[derive(Debug, Clone, Default)]
pub struct PublicQuoteRequest {
    pub mass_grams: f64,
    pub hours: f64,
    pub minutes: f64,
    pub profit_margin_percent: f64,
    pub material_price_per_kg: f64,
}

/// Result of quoting an uploaded model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshQuote {
    /// Material code the quote was priced with
    pub material: String,
    pub volume_cm3: f64,
    pub estimated_mass_grams: f64,
    pub estimated_print_hours: f64,
    pub price: f64,
}

/// One quoted file in a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub file: String,
    pub quoted_at: DateTime<Utc>,
    pub quote: MeshQuote,
}

/// Results of a batch quoting run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Full-breakdown quote from explicit inputs
pub fn manual_quote(inputs: &CostInputs) -> Result<CostBreakdown, QuoteServiceError> {
    let breakdown = estimate_cost(inputs);
    if !breakdown.is_finite() {
        return Err(QuoteServiceError::NonFinite);
    }
    Ok(breakdown)
}

/// Public quote: visitor inputs plus hidden shop settings, rounded pricing
///
/// An empty form (zero mass and zero time) short-circuits to a zero price
/// so the fixed post-processing setting does not price thin air.
pub fn public_quote(
    request: &PublicQuoteRequest,
    config: &Config,
) -> Result<CostBreakdown, QuoteServiceError> {
    if request.mass_grams == 0.0 && request.hours == 0.0 && request.minutes == 0.0 {
        return Ok(CostBreakdown::default());
    }

    let inputs = CostInputs {
        material_price_per_kg: request.material_price_per_kg,
        part_mass_grams: request.mass_grams,
        print_duration_hours: duration_hours(request.hours, request.minutes),
        power_rating_watts: config.power_rating_watts,
        energy_cost_per_kwh: config.energy_cost_per_kwh,
        post_processing_minutes: config.post_processing_minutes,
        labor_rate_per_hour: config.labor_rate_per_hour,
        machine_rate_per_hour: config.machine_rate_per_hour,
        failure_rate_percent: config.failure_rate_percent,
        profit_margin_percent: request.profit_margin_percent,
        tax_rate_percent: config.tax_rate_percent,
    };

    let breakdown =
        estimate_cost_with_policy(&inputs, RoundingPolicy::CeilToStep(PUBLIC_PRICE_STEP));
    if !breakdown.is_finite() {
        return Err(QuoteServiceError::NonFinite);
    }
    Ok(breakdown)
}

/// Measure an STL file and price it with the flat per-gram heuristic
pub fn mesh_quote(
    path: &Path,
    material_key: &str,
    spec: &MaterialSpec,
    config: &Config,
) -> Result<MeshQuote, QuoteServiceError> {
    let triangles = load_stl(path)?;
    let volume = measure_volume(&triangles);

    let mass_grams = estimated_mass_grams(volume.volume_cubic_units, spec.density_g_cm3);
    let price = flat_price(mass_grams, spec.price_per_gram, config.setup_fee);
    let hours = estimate_print_hours(mass_grams, config.grams_per_hour);

    if !price.is_finite() || !mass_grams.is_finite() {
        return Err(QuoteServiceError::NonFinite);
    }

    Ok(MeshQuote {
        material: material_key.to_uppercase(),
        volume_cm3: volume.volume_cubic_units / MM3_PER_CM3,
        estimated_mass_grams: mass_grams,
        estimated_print_hours: hours,
        price,
    })
}

/// Resolve a material key against the TOML master file, falling back to the
/// built-in presets when no file is configured
pub fn resolve_material(
    key: &str,
    config: &Config,
) -> Result<MaterialSpec, QuoteServiceError> {
    if let Some(ref path) = config.materials_path {
        let repo = FileMaterialRepository::new(path.clone())
            .map_err(|e| QuoteServiceError::Presets(e.to_string()))?;
        return repo
            .find_by_key(key)
            .map_err(|e| QuoteServiceError::Presets(e.to_string()))?
            .ok_or_else(|| QuoteServiceError::UnknownMaterial(key.to_string()));
    }

    get_material_preset(key).ok_or_else(|| QuoteServiceError::UnknownMaterial(key.to_string()))
}
