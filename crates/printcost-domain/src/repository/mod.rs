//! Repository trait definitions for master data

use crate::model::MaterialSpec;
use printcost_types::Error;

/// Repository for material presets
pub trait MaterialRepository {
    /// Load all material presets as (key, spec) pairs
    fn find_all(&self) -> Result<Vec<(String, MaterialSpec)>, Error>;

    /// Find a preset by its key (e.g., "PLA")
    fn find_by_key(&self, key: &str) -> Result<Option<MaterialSpec>, Error>;
}
