//! Fake progress data for the weekly chart.
//!
//! Nothing here is derived from real measurements. It stands in for a
//! persistence layer until one exists and is not part of the metrics
//! contract.

use chrono::{Days, NaiveDate};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CHART_DAYS: u64 = 7;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SamplePoint {
    pub date: NaiveDate,
    /// Kilograms, within one kilogram of the base weight.
    pub weight: f64,
    pub workouts: u32,
    /// Glasses
    pub water: u32,
    pub calories: u32,
}

/// Seven points ending on `today`, oldest first.
pub fn weekly_chart<R: Rng>(
    base_weight: f64,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SamplePoint> {
    (0..CHART_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| SamplePoint {
            date,
            weight: base_weight + (rng.random::<f64>() - 0.5) * 2.0,
            workouts: rng.random_range(0..2),
            water: rng.random_range(2..10),
            calories: rng.random_range(1500..2000),
        })
        .collect()
}

/// Placeholder workout streak, 1 to 15 days.
pub fn streak_days<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(1..=15)
}
