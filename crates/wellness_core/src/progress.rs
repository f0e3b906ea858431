use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{WellnessError, WellnessResult};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ProgressEntry {
    pub date: DateTime<Utc>,
    /// Kilograms
    pub weight: Option<f64>,
    pub workout_completed: Option<bool>,
    /// Glasses
    pub water_intake: Option<u32>,
    pub calories_consumed: Option<u32>,
    pub notes: Option<String>,
}

impl ProgressEntry {
    pub fn validate(&self) -> WellnessResult<()> {
        if let Some(w) = self.weight
            && !(w.is_finite() && w > 0.0)
        {
            return Err(WellnessError::Validation("weight must be positive".into()));
        }
        Ok(())
    }
}

/// Append-only list of user-entered progress.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ProgressLog {
    entries: Vec<ProgressEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ProgressSummary {
    pub entries: usize,
    pub workouts_completed: usize,
    pub latest_weight: Option<f64>,
    pub avg_water_intake: Option<f64>,
}

impl ProgressLog {
    pub fn push(&mut self, entry: ProgressEntry) -> WellnessResult<()> {
        entry.validate()?;
        // blank notes are treated as absent
        let entry = ProgressEntry {
            notes: entry.notes.filter(|n| !n.trim().is_empty()),
            ..entry
        };
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn workouts_completed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.workout_completed == Some(true))
            .count()
    }

    /// Weight of the most recently dated entry that recorded one.
    pub fn latest_weight(&self) -> Option<f64> {
        self.entries
            .iter()
            .filter_map(|e| e.weight.map(|w| (e.date, w)))
            .max_by_key(|(date, _)| *date)
            .map(|(_, w)| w)
    }

    pub fn avg_water_intake(&self) -> Option<f64> {
        let values: Vec<u32> = self.entries.iter().filter_map(|e| e.water_intake).collect();
        if values.is_empty() {
            return None;
        }
        let total: u32 = values.iter().sum();
        Some((f64::from(total) / values.len() as f64 * 10.0).round() / 10.0)
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            entries: self.len(),
            workouts_completed: self.workouts_completed(),
            latest_weight: self.latest_weight(),
            avg_water_intake: self.avg_water_intake(),
        }
    }
}
