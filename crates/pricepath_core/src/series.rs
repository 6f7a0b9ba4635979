//! Historical price series input type

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single daily observation: trading date and closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    pub close: f64,
}

/// An ordered sequence of closing prices, chronologically ascending with no
/// duplicate dates.
///
/// This is the immutable input to the engine; it is owned by the caller and
/// never modified by any component. The constructor normalizes its input by
/// sorting on date and keeping the last record for a duplicated date, so the
/// ordering invariants hold for any source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    #[must_use]
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        // Duplicate dates keep the most recently supplied record
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();
        Self { points }
    }

    /// Build a series of consecutive daily closes starting at `start`.
    #[must_use]
    pub fn from_closes(start: Date, closes: &[f64]) -> Self {
        let points = start
            .series(1.day())
            .zip(closes.iter())
            .map(|(date, &close)| PricePoint { date, close })
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in chronological order.
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    /// The most recent closing price, if any.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}
