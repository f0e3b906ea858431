//! Body metrics and energy targets.
//!
//! Every function here is pure and total over a valid profile; callers are
//! expected to have validated biometrics (see [`crate::profile`]). A zero
//! height yields non-finite results rather than an error.
//!
//! # References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::profile::{ActivityLevel, FitnessGoal, Gender, UserProfile};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

const IDEAL_BMI_MIN: f64 = 18.5;
const IDEAL_BMI_MAX: f64 = 24.9;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body mass index from kilograms and centimeters, unrounded.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Boundary values fall into the higher band: 25.0 is [`BmiCategory::Overweight`].
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor.
///
/// `Gender::Other` uses the female offset.
pub fn compute_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Multiplier applied to TDEE: 20% deficit to lose weight, 10% surplus to build muscle.
pub fn goal_factor(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::LoseWeight => 0.8,
        FitnessGoal::BuildMuscle => 1.1,
        FitnessGoal::StayActive | FitnessGoal::Endurance => 1.0,
    }
}

/// Total daily energy expenditure (kcal/day) before goal adjustment.
pub fn compute_tdee(profile: &UserProfile) -> f64 {
    compute_bmr(profile) * activity_factor(profile.activity_level)
}

/// Goal-adjusted daily calorie target, rounded half away from zero.
pub fn compute_daily_calories(profile: &UserProfile) -> i64 {
    (compute_tdee(profile) * goal_factor(profile.fitness_goal)).round() as i64
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct IdealWeightRange {
    /// Kilograms
    pub min: i64,
    /// Kilograms
    pub max: i64,
}

/// Weight range for a BMI between 18.5 and 24.9. The formula does not
/// branch on gender.
pub fn ideal_weight_range(height_cm: f64, _gender: Gender) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let sq = height_m * height_m;
    IdealWeightRange {
        min: (IDEAL_BMI_MIN * sq).round() as i64,
        max: (IDEAL_BMI_MAX * sq).round() as i64,
    }
}

/// Daily macronutrient split in grams: 30% protein, 40% carbs, 30% fat.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct MacroTargets {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

pub fn macro_targets(daily_calories: i64) -> MacroTargets {
    let kcal = daily_calories as f64;
    MacroTargets {
        protein_g: (kcal * 0.3 / KCAL_PER_GRAM_PROTEIN).round() as i64,
        carbs_g: (kcal * 0.4 / KCAL_PER_GRAM_CARBS).round() as i64,
        fat_g: (kcal * 0.3 / KCAL_PER_GRAM_FAT).round() as i64,
    }
}

/// Everything the dashboard shows for one profile.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: i64,
    pub ideal_weight: IdealWeightRange,
    pub macros: MacroTargets,
}

impl HealthMetrics {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let bmi = compute_bmi(profile.weight, profile.height);
        let daily_calories = compute_daily_calories(profile);
        Self {
            bmi,
            bmi_category: classify_bmi(bmi),
            bmr: compute_bmr(profile),
            tdee: compute_tdee(profile),
            daily_calories,
            ideal_weight: ideal_weight_range(profile.height, profile.gender),
            macros: macro_targets(daily_calories),
        }
    }
}
