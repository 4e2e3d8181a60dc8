//! Constants for print quoting

pub mod materials;

pub use materials::{builtin_presets, get_material_preset};
