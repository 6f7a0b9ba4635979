//! Integration tests for the simulation engine
//!
//! Tests are organized by topic:
//! - `generation` - Path generation mechanics and parameter validation
//! - `smoothing` - Moving-average transforms and boundary fill
//! - `risk` - Terminal-value aggregation and historical metrics
//! - `end_to_end` - Full simulation scenarios

mod generation;

use crate::series::PriceSeries;

/// A series with a constant closing price (zero mean, zero volatility).
fn flat_series(close: f64, len: usize) -> PriceSeries {
    PriceSeries::from_closes(jiff::civil::date(2025, 1, 2), &vec![close; len])
}

/// A series whose log-returns alternate `drift + swing` / `drift - swing`,
/// scaled so the final close lands exactly on `last_close`.
fn drift_series(drift: f64, swing: f64, len: usize, last_close: f64) -> PriceSeries {
    let mut closes = Vec::with_capacity(len);
    let mut price = 1.0;
    closes.push(price);
    for i in 1..len {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        price *= (drift + sign * swing).exp();
        closes.push(price);
    }

    // Rescaling every close leaves the log-returns unchanged
    let scale = last_close / closes[len - 1];
    for close in &mut closes {
        *close *= scale;
    }

    PriceSeries::from_closes(jiff::civil::date(2024, 1, 2), &closes)
}
