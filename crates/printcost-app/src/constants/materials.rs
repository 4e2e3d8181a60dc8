//! Built-in filament presets
//!
//! Spool prices and public per-gram rates for the materials the shop
//! stocks. A TOML master file (see `printcost-infra`) overrides these.

use std::collections::BTreeMap;

use printcost_domain::model::MaterialSpec;

/// The shop's stock materials keyed by material code
pub fn builtin_presets() -> BTreeMap<String, MaterialSpec> {
    let mut presets = BTreeMap::new();
    presets.insert(
        "PLA".to_string(),
        MaterialSpec {
            name: "PLA Estándar".to_string(),
            price_per_kg: 400.0,
            density_g_cm3: 1.24,
            price_per_gram: 1.5,
        },
    );
    presets.insert(
        "PETG".to_string(),
        MaterialSpec {
            name: "PETG Resistente".to_string(),
            price_per_kg: 500.0,
            density_g_cm3: 1.27,
            price_per_gram: 1.8,
        },
    );
    presets.insert(
        "TPU".to_string(),
        MaterialSpec {
            name: "TPU Flexible".to_string(),
            price_per_kg: 650.0,
            density_g_cm3: 1.21,
            price_per_gram: 2.2,
        },
    );
    presets.insert(
        "ABS".to_string(),
        MaterialSpec {
            name: "ABS Ingeniería".to_string(),
            price_per_kg: 450.0,
            density_g_cm3: 1.04,
            price_per_gram: 1.6,
        },
    );
    presets
}

/// Get a built-in preset by material code, case-insensitively
pub fn get_material_preset(key: &str) -> Option<MaterialSpec> {
    builtin_presets().get(&key.to_uppercase()).cloned()
}
