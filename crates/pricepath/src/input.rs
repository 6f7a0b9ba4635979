use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use pricepath_core::{PricePoint, PriceSeries};

/// Load a price series from a JSON file holding an array of
/// `{"date": "YYYY-MM-DD", "close": f64}` records.
///
/// Records are sorted by date and duplicate dates collapse to the
/// last record in file order.
pub fn load_series(path: &Path) -> color_eyre::Result<PriceSeries> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let points: Vec<PricePoint> = serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse {}", path.display()))?;

    if points.is_empty() {
        return Err(eyre!("{} holds no price records", path.display()));
    }

    Ok(PriceSeries::new(points))
}
