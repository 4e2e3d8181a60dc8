//! Material preset type definitions

use serde::{Deserialize, Serialize};

/// Filament material data used for pricing and mass estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Display name (e.g., "PLA Estándar")
    pub name: String,
    /// Spool price per kilogram
    pub price_per_kg: f64,
    /// Density in g/cm³ (e.g., PLA ≈ 1.24)
    pub density_g_cm3: f64,
    /// Public flat-rate price per gram of printed material
    pub price_per_gram: f64,
}
