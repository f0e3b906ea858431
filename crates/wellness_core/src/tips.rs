use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIP: &str = "Stay hydrated! Aim for 8 glasses of water daily.";

pub const HEALTH_TIPS: &[&str] = &[
    "Stay hydrated! Aim for 8 glasses of water daily to maintain optimal body function.",
    "Get 7-9 hours of quality sleep each night to support muscle recovery and mental health.",
    "Include 5 servings of fruits and vegetables in your daily diet for essential nutrients.",
    "Take the stairs instead of elevators when possible to increase daily activity.",
    "Practice deep breathing exercises to reduce stress and improve focus.",
    "Stretch for 10 minutes daily to improve flexibility and reduce muscle tension.",
    "Limit processed foods and opt for whole, nutrient-dense options.",
    "Take regular breaks from screen time to protect your eyes and posture.",
    "Meal prep on weekends to maintain healthy eating habits throughout the week.",
    "Listen to your body - rest when you need it and push when you feel strong.",
    "Include protein in every meal to support muscle maintenance and satiety.",
    "Practice gratitude daily to boost mental well-being and reduce stress.",
    "Stand up and move every hour if you have a desk job to combat sedentary behavior.",
    "Choose stairs over elevators to add extra cardio to your day.",
    "Keep healthy snacks nearby to avoid reaching for processed options.",
];

pub fn random_tip<R: Rng>(rng: &mut R) -> &'static str {
    HEALTH_TIPS.choose(rng).copied().unwrap_or(DEFAULT_TIP)
}

/// The tip currently shown and the day it was picked.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct DailyTip {
    pub text: String,
    /// `None` until the first refresh.
    pub shown_on: Option<NaiveDate>,
}

impl Default for DailyTip {
    fn default() -> Self {
        Self {
            text: DEFAULT_TIP.to_string(),
            shown_on: None,
        }
    }
}

impl DailyTip {
    /// Picks a new tip unless one was already chosen on `today`.
    /// Returns `true` when the tip changed.
    pub fn refresh<R: Rng>(&mut self, today: NaiveDate, rng: &mut R) -> bool {
        if self.shown_on == Some(today) {
            return false;
        }
        self.text = random_tip(rng).to_string();
        self.shown_on = Some(today);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_tip_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(HEALTH_TIPS.contains(&random_tip(&mut rng)));
        }
    }

    #[test]
    fn refresh_once_per_day() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tip = DailyTip::default();
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(tip.refresh(day, &mut rng));
        let first = tip.text.clone();
        assert!(!tip.refresh(day, &mut rng));
        assert_eq!(tip.text, first);
        assert!(tip.refresh(day.succ_opt().unwrap(), &mut rng));
        assert_eq!(tip.shown_on, day.succ_opt());
    }
}
