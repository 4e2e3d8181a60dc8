//! End-to-end quoting flows against a real model file on disk

use std::io::Write;
use std::path::PathBuf;

use printcost_app::config::Config;
use printcost_app::constants::get_material_preset;
use printcost_app::export::export_to_csv;
use printcost_app::quote::{
    manual_quote, mesh_quote, public_quote, BatchEntry, BatchReport, PublicQuoteRequest,
};
use printcost_domain::model::CostInputs;
use printcost_mesh::unit_cube;

/// Write a binary STL of the unit cube scaled by `factor` to `dir`
fn write_cube_stl(dir: &tempfile::TempDir, factor: f64) -> PathBuf {
    let triangles = unit_cube();

    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for t in &triangles {
        bytes.extend_from_slice(&[0u8; 12]);
        for p in [&t.a, &t.b, &t.c] {
            for coord in [p.x * factor, p.y * factor, p.z * factor] {
                bytes.extend_from_slice(&(coord as f32).to_le_bytes());
            }
        }
        bytes.extend_from_slice(&[0u8; 2]);
    }

    let path = dir.path().join("cube.stl");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&bytes).unwrap();
    path
}

#[test]
fn test_scan_flow_prices_a_measured_cube() {
    let dir = tempfile::tempdir().unwrap();
    // 20 mm cube: 8000 mm³ = 8 cm³
    let path = write_cube_stl(&dir, 20.0);

    let config = Config::default();
    let spec = get_material_preset("PLA").unwrap();
    let quote = mesh_quote(&path, "PLA", &spec, &config).unwrap();

    assert!((quote.volume_cm3 - 8.0).abs() < 1e-4);
    // 8 cm³ of PLA at 1.24 g/cm³ = 9.92 g
    assert!((quote.estimated_mass_grams - 9.92).abs() < 1e-3);
    // 9.92 g at 1.5/g + 50 setup fee
    assert!((quote.price - 64.88).abs() < 1e-2);
    assert!(quote.estimated_print_hours > 0.0);
}

#[test]
fn test_manual_flow_layering_literals() {
    // Base costs of exactly 100 -> 110 -> 220 -> 255.2
    let inputs = CostInputs {
        material_price_per_kg: 400.0,
        part_mass_grams: 250.0,
        failure_rate_percent: 10.0,
        profit_margin_percent: 100.0,
        tax_rate_percent: 16.0,
        ..Default::default()
    };
    let breakdown = manual_quote(&inputs).unwrap();
    assert!((breakdown.production_subtotal - 110.0).abs() < 1e-9);
    assert!((breakdown.price_before_tax - 220.0).abs() < 1e-9);
    assert!((breakdown.final_price - 255.2).abs() < 1e-6);
}

#[test]
fn test_public_flow_never_prices_below_exact_quote() {
    // Rounding up before tax can only raise the price
    let config = Config::default();
    let request = PublicQuoteRequest {
        mass_grams: 37.0,
        hours: 1.0,
        minutes: 23.0,
        profit_margin_percent: 180.0,
        material_price_per_kg: 450.0,
    };
    let public = public_quote(&request, &config).unwrap();

    let exact_inputs = CostInputs {
        material_price_per_kg: request.material_price_per_kg,
        part_mass_grams: request.mass_grams,
        print_duration_hours: request.hours + request.minutes / 60.0,
        power_rating_watts: config.power_rating_watts,
        energy_cost_per_kwh: config.energy_cost_per_kwh,
        post_processing_minutes: config.post_processing_minutes,
        labor_rate_per_hour: config.labor_rate_per_hour,
        machine_rate_per_hour: config.machine_rate_per_hour,
        failure_rate_percent: config.failure_rate_percent,
        profit_margin_percent: request.profit_margin_percent,
        tax_rate_percent: config.tax_rate_percent,
    };
    let exact = manual_quote(&exact_inputs).unwrap();

    assert!(public.final_price >= exact.final_price - 1e-9);
    // Both quotes share the same production cost; only rounding differs
    assert!((public.production_subtotal - exact.production_subtotal).abs() < 1e-9);
}

#[test]
fn test_batch_report_round_trips_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cube_stl(&dir, 10.0);

    let config = Config::default();
    let spec = get_material_preset("PETG").unwrap();
    let quote = mesh_quote(&path, "PETG", &spec, &config).unwrap();

    let now = chrono::Utc::now();
    let report = BatchReport {
        entries: vec![BatchEntry {
            file: path.display().to_string(),
            quoted_at: now,
            quote,
        }],
        total_processed: 1,
        successful: 1,
        failed: 0,
        started_at: now,
        completed_at: now,
    };

    // JSON round trip, as written by `batch --output`
    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: BatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.entries.len(), 1);
    assert_eq!(parsed.entries[0].quote.material, "PETG");

    // CSV export, as written by `export`
    let csv_path = dir.path().join("report.csv");
    export_to_csv(&parsed, &csv_path).unwrap();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with("file,material,volume_cm3"));
    assert!(content.contains("PETG"));
}
