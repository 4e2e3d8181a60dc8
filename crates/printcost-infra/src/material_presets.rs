//! Material preset master data (TOML)
//!
//! A shop can override the built-in filament presets with a TOML file:
//!
//! ```toml
//! [materials.PLA]
//! name = "PLA Estándar"
//! price_per_kg = 400.0
//! density_g_cm3 = 1.24
//! price_per_gram = 1.5
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use printcost_domain::model::MaterialSpec;
use printcost_domain::repository::MaterialRepository;
use printcost_types::Error;

#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    materials: BTreeMap<String, MaterialSpec>,
}

/// Loaded material presets keyed by material code (e.g., "PLA")
#[derive(Debug, Clone)]
pub struct MaterialPresetLoader {
    presets: BTreeMap<String, MaterialSpec>,
}

impl MaterialPresetLoader {
    /// Load presets from a TOML master file
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let file: PresetFile = toml::from_str(&content)
            .map_err(|e| Error::PresetLoader(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            presets: file.materials,
        })
    }

    /// All presets in key order
    pub fn all_presets(&self) -> Vec<(String, MaterialSpec)> {
        self.presets
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Look up a preset by key, case-insensitively
    pub fn get(&self, key: &str) -> Option<&MaterialSpec> {
        self.presets
            .get(key)
            .or_else(|| self.presets.get(&key.to_uppercase()))
    }

    pub fn count(&self) -> usize {
        self.presets.len()
    }
}

/// File-based material repository (TOML)
pub struct FileMaterialRepository {
    toml_path: PathBuf,
    loader: MaterialPresetLoader,
}

impl FileMaterialRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = MaterialPresetLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = MaterialPresetLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl MaterialRepository for FileMaterialRepository {
    fn find_all(&self) -> Result<Vec<(String, MaterialSpec)>, Error> {
        Ok(self.loader.all_presets())
    }

    fn find_by_key(&self, key: &str) -> Result<Option<MaterialSpec>, Error> {
        Ok(self.loader.get(key).cloned())
    }
}
