use serde::Serialize;

use pricepath_core::{EnsembleVariant, HistoricalRiskReport, RiskReport, SimulationSet};

/// Serializable document backing the `--format json` output.
#[derive(Serialize)]
struct ReportDocument<'a> {
    window: usize,
    variants: Vec<VariantEntry>,
    historical: &'a HistoricalRiskReport,
}

#[derive(Serialize)]
struct VariantEntry {
    label: &'static str,
    report: RiskReport,
}

pub fn to_json(set: &SimulationSet, historical: &HistoricalRiskReport) -> color_eyre::Result<String> {
    let variants = set
        .reports()?
        .into_iter()
        .map(|(variant, report)| VariantEntry {
            label: variant.label(),
            report,
        })
        .collect();

    let document = ReportDocument {
        window: set.window,
        variants,
        historical,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn print_text(set: &SimulationSet, historical: &HistoricalRiskReport) -> color_eyre::Result<()> {
    println!("Terminal price risk (window: {})", set.window);
    println!(
        "{:<6} {:>14} {:>14} {:>14} {:>10}",
        "", "5% VaR", "1% VaR", "Expected", "Vol"
    );
    for (variant, report) in set.reports()? {
        println!(
            "{:<6} {:>14} {:>14} {:>14} {:>10}",
            variant.label(),
            format_currency(report.var_5pct),
            format_currency(report.var_1pct),
            format_currency(report.expected_value),
            format_volatility(report.volatility_pct),
        );
    }

    println!();
    println!("Historical");
    println!(
        "  Annualized volatility: {}",
        format_percentage(historical.annualized_volatility)
    );
    match historical.sharpe_ratio {
        Some(sharpe) => println!("  Sharpe ratio:          {:.2}", sharpe),
        None => println!("  Sharpe ratio:          n/a"),
    }
    println!(
        "  Max drawdown:          {}",
        format_percentage(historical.max_drawdown)
    );

    Ok(())
}

/// Format a currency value
fn format_currency(value: f64) -> String {
    // Format with thousands separators manually
    let abs_value = value.abs();
    let dollars = abs_value as i64;
    let cents = ((abs_value - dollars as f64) * 100.0).round() as i64;

    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${}.{:02}", dollars_formatted, cents)
    } else {
        format!("-${}.{:02}", dollars_formatted, cents)
    }
}

/// Format a percentage value
fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn format_volatility(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{:.2}%", pct),
        None => "n/a".to_string(),
    }
}
