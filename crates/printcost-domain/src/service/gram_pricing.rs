//! Flat per-gram pricing for mesh-derived quotes
//!
//! The public scanner path folds machine time, labor, and energy into a
//! single per-gram rate plus a fixed setup fee. This is a deliberately
//! separate model from the layered breakdown in `cost_estimator`; feeding a
//! mesh-derived mass into the full breakdown on top of a per-gram rate would
//! double-count labor and machine cost.

/// Cubic millimeters per cubic centimeter
pub const MM3_PER_CM3: f64 = 1000.0;

/// Convert a raw mesh volume (mm³) to estimated mass in grams
///
/// volume is divided by 1000 (mm³ -> cm³) and multiplied by the material
/// density in g/cm³.
pub fn estimated_mass_grams(volume_mm3: f64, density_g_cm3: f64) -> f64 {
    volume_mm3 / MM3_PER_CM3 * density_g_cm3
}

/// Public flat-rate price: mass x per-gram rate + setup fee
pub fn flat_price(mass_grams: f64, price_per_gram: f64, setup_fee: f64) -> f64 {
    mass_grams * price_per_gram + setup_fee
}

/// Rough print-time estimate from an assumed deposition throughput
///
/// Returns 0 for a non-positive throughput rather than dividing by zero.
pub fn estimate_print_hours(mass_grams: f64, grams_per_hour: f64) -> f64 {
    if grams_per_hour <= 0.0 {
        return 0.0;
    }
    mass_grams / grams_per_hour
}
