//! CSV export of batch quote reports

use printcost_types::{Error, Result};
use std::path::Path;

use crate::quote::BatchReport;

/// Export a batch report to a CSV file
pub fn export_to_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)
        .map_err(|e| Error::Export(e.to_string()))?;

    writer
        .write_record([
            "file",
            "material",
            "volume_cm3",
            "mass_g",
            "est_hours",
            "price",
            "quoted_at",
        ])
        .map_err(|e| Error::Export(e.to_string()))?;

    for entry in &report.entries {
        writer
            .write_record([
                entry.file.as_str(),
                entry.quote.material.as_str(),
                &format!("{:.3}", entry.quote.volume_cm3),
                &format!("{:.2}", entry.quote.estimated_mass_grams),
                &format!("{:.2}", entry.quote.estimated_print_hours),
                &format!("{:.2}", entry.quote.price),
                &entry.quoted_at.to_rfc3339(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
