//! Infrastructure layer - master data loading

pub mod material_presets;

pub use material_presets::{FileMaterialRepository, MaterialPresetLoader};
