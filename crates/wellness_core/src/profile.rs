//! User profile values and the registration/edit boundary.
//!
//! The metrics functions assume a well-formed profile. Everything that builds
//! or changes a [`UserProfile`] goes through [`UserProfile::register`] or
//! [`UserProfile::apply`], which reject non-positive biometrics.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{WellnessError, WellnessResult};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

wire_tokens!(Gender, "gender", {
    Male => "male",
    Female => "female",
    Other => "other",
});

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    #[default]
    LoseWeight,
    BuildMuscle,
    StayActive,
    Endurance,
}

wire_tokens!(FitnessGoal, "fitness goal", {
    LoseWeight => "lose_weight",
    BuildMuscle => "build_muscle",
    StayActive => "stay_active",
    Endurance => "endurance",
});

impl FitnessGoal {
    /// Human wording, e.g. "lose weight".
    pub fn phrase(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
}

wire_tokens!(ActivityLevel, "activity level", {
    Sedentary => "sedentary",
    LightlyActive => "lightly_active",
    ModeratelyActive => "moderately_active",
    VeryActive => "very_active",
});

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    #[default]
    Balanced,
    Vegetarian,
    Keto,
    Paleo,
}

wire_tokens!(DietaryPreference, "dietary preference", {
    Balanced => "balanced",
    Vegetarian => "vegetarian",
    Keto => "keto",
    Paleo => "paleo",
});

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Years
    pub age: u32,
    pub gender: Gender,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub created_at: DateTime<Utc>,
}

/// Registration input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct NewProfile {
    pub email: String,
    pub name: String,
    /// Age in years
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    #[serde(default)]
    pub fitness_goal: FitnessGoal,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
}

/// Profile edit; absent fields keep their current value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub fitness_goal: Option<FitnessGoal>,
    pub activity_level: Option<ActivityLevel>,
    pub dietary_preference: Option<DietaryPreference>,
}

impl UserProfile {
    pub fn register(new: NewProfile) -> WellnessResult<Self> {
        let email = new.email.trim().to_string();
        let name = new.name.trim().to_string();
        if email.is_empty() || name.is_empty() {
            return Err(WellnessError::Validation(
                "email and name are required".into(),
            ));
        }
        let profile = Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            age: new.age,
            gender: new.gender,
            weight: new.weight,
            height: new.height,
            fitness_goal: new.fitness_goal,
            activity_level: new.activity_level,
            dietary_preference: new.dietary_preference,
            created_at: Utc::now(),
        };
        profile.validate()?;
        tracing::debug!(id = %profile.id, "registered profile");
        Ok(profile)
    }

    /// Returns the edited profile; `self` is left unchanged.
    pub fn apply(&self, update: ProfileUpdate) -> WellnessResult<Self> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(WellnessError::Validation("name must not be empty".into()));
            }
            next.name = name;
        }
        if let Some(age) = update.age {
            next.age = age;
        }
        if let Some(weight) = update.weight {
            next.weight = weight;
        }
        if let Some(height) = update.height {
            next.height = height;
        }
        if let Some(goal) = update.fitness_goal {
            next.fitness_goal = goal;
        }
        if let Some(level) = update.activity_level {
            next.activity_level = level;
        }
        if let Some(diet) = update.dietary_preference {
            next.dietary_preference = diet;
        }
        next.validate()?;
        Ok(next)
    }

    pub fn validate(&self) -> WellnessResult<()> {
        if self.age == 0 {
            return Err(WellnessError::Validation("age must be positive".into()));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(WellnessError::Validation("weight must be positive".into()));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(WellnessError::Validation("height must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_profile() -> NewProfile {
        NewProfile {
            email: "sam@example.com".into(),
            name: "Sam".into(),
            age: 30,
            gender: Gender::Male,
            weight: 80.0,
            height: 180.0,
            fitness_goal: FitnessGoal::LoseWeight,
            activity_level: ActivityLevel::ModeratelyActive,
            dietary_preference: DietaryPreference::Balanced,
        }
    }

    #[test]
    fn register_assigns_id_and_trims() {
        let mut input = new_profile();
        input.email = "  sam@example.com ".into();
        let p = UserProfile::register(input).expect("valid profile");
        assert!(!p.id.is_empty());
        assert_eq!(p.email, "sam@example.com");
    }

    #[test]
    fn register_rejects_non_positive_biometrics() {
        for (age, weight, height) in [(0, 80.0, 180.0), (30, 0.0, 180.0), (30, 80.0, -1.0)] {
            let mut input = new_profile();
            input.age = age;
            input.weight = weight;
            input.height = height;
            assert!(matches!(
                UserProfile::register(input),
                Err(WellnessError::Validation(_))
            ));
        }
    }

    #[test]
    fn register_rejects_nan_height() {
        let mut input = new_profile();
        input.height = f64::NAN;
        assert!(UserProfile::register(input).is_err());
    }

    #[test]
    fn apply_keeps_original_on_error() {
        let p = UserProfile::register(new_profile()).unwrap();
        let res = p.apply(ProfileUpdate {
            weight: Some(-5.0),
            ..Default::default()
        });
        assert!(res.is_err());
        assert_eq!(p.weight, 80.0);
    }

    #[test]
    fn apply_changes_only_given_fields() {
        let p = UserProfile::register(new_profile()).unwrap();
        let next = p
            .apply(ProfileUpdate {
                weight: Some(78.5),
                fitness_goal: Some(FitnessGoal::BuildMuscle),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(next.weight, 78.5);
        assert_eq!(next.fitness_goal, FitnessGoal::BuildMuscle);
        assert_eq!(next.height, p.height);
        assert_eq!(next.id, p.id);
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.as_str().parse::<FitnessGoal>().unwrap(), *goal);
        }
        assert!("LoseWeight".parse::<FitnessGoal>().is_err());
        assert!("vegan".parse::<DietaryPreference>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_tokens_and_form_defaults() {
        let v = serde_json::json!({
            "email": "a@b.c", "name": "A", "age": 40, "weight": 60.0, "height": 165.0
        });
        let input: NewProfile = serde_json::from_value(v).unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(
            serde_json::to_value(ActivityLevel::VeryActive).unwrap(),
            "very_active"
        );
    }

    #[test]
    fn goal_phrase_replaces_underscores() {
        assert_eq!(FitnessGoal::BuildMuscle.phrase(), "build muscle");
    }
}
