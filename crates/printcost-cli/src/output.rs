//! Output formatting module

use printcost_app::quote::{BatchReport, MeshQuote};
use printcost_domain::model::CostBreakdown;
use printcost_types::{OutputFormat, Result};

/// Format a money amount like the shop's invoices: $1,234.56
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Format a fractional hour count as "2h 30m"
pub fn format_hours(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    format!("{}h {}m", whole as u64, minutes as u64)
}

pub fn output_breakdown(
    output_format: OutputFormat,
    breakdown: &CostBreakdown,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(breakdown)?;
        println!("{}", content);
    } else {
        println!("\nQuote Result");
        println!("============");
        println!("Material cost:      {:>12}", format_currency(breakdown.material_cost));
        println!("Electricity:        {:>12}", format_currency(breakdown.electricity_cost));
        println!("Machine:            {:>12}", format_currency(breakdown.machine_cost));
        println!("Labor:              {:>12}", format_currency(breakdown.labor_cost));
        println!("Failure allowance:  {:>12}", format_currency(breakdown.failure_cost));
        println!("--------------------------------");
        println!("Production cost:    {:>12}", format_currency(breakdown.production_subtotal));
        println!("Profit:             {:>12}", format_currency(breakdown.profit_amount));
        println!("Price before tax:   {:>12}", format_currency(breakdown.price_before_tax));
        println!("Tax (IVA):          {:>12}", format_currency(breakdown.tax_amount));
        println!("--------------------------------");
        println!(
            "Suggested price:    {:>12} {}",
            format_currency(breakdown.final_price),
            currency
        );
    }

    Ok(())
}

pub fn output_mesh_quote(
    output_format: OutputFormat,
    quote: &MeshQuote,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
    } else {
        println!("\nModel Quote");
        println!("===========");
        println!("Material:        {}", quote.material);
        println!("Volume:          {:.2} cm³", quote.volume_cm3);
        println!("Est. weight:     {:.1} g", quote.estimated_mass_grams);
        println!("Est. print time: {}", format_hours(quote.estimated_print_hours));
        println!(
            "Est. price:      {} {}",
            format_currency(quote.price),
            currency
        );
    }

    Ok(())
}

pub fn output_batch_report(
    output_format: OutputFormat,
    report: &BatchReport,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Quote Complete");
    println!("====================");
    println!("Total:      {}", report.total_processed);
    println!("Successful: {}", report.successful);
    println!("Failed:     {}", report.failed);
    println!(
        "Duration:   {:.1}s",
        (report.completed_at - report.started_at).num_milliseconds() as f64 / 1000.0
    );

    if report.entries.is_empty() {
        return Ok(());
    }

    println!();
    println!(
        "{:<40} {:>10} {:>8} {:>10} {:>12}",
        "File", "Vol(cm³)", "Mass(g)", "Time", "Price"
    );
    println!("{}", "-".repeat(84));

    for entry in &report.entries {
        let filename = std::path::Path::new(&entry.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&entry.file);

        let display_name = if filename.len() > 38 {
            format!("{}...", &filename[..35])
        } else {
            filename.to_string()
        };

        println!(
            "{:<40} {:>10.2} {:>8.1} {:>10} {:>12}",
            display_name,
            entry.quote.volume_cm3,
            entry.quote.estimated_mass_grams,
            format_hours(entry.quote.estimated_print_hours),
            format_currency(entry.quote.price),
        );
    }

    println!();
    println!("Prices in {}", currency);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(255.2), "$255.20");
        assert_eq!(format_currency(51.864), "$51.86");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.89), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.5), "2h 30m");
        assert_eq!(format_hours(0.0), "0h 0m");
        assert_eq!(format_hours(1.0 + 1.0 / 60.0), "1h 1m");
    }
}
