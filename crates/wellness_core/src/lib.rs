//! Health metrics, static workout/meal catalogs and the local state holders
//! behind the wellness coach.

use thiserror::Error;

/// Implements `as_str`, `Display` and `FromStr` for a closed enumeration
/// using its snake_case wire tokens.
macro_rules! wire_tokens {
    ($ty:ident, $kind:literal, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::WellnessError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($ty::$variant),)+
                    other => Err($crate::WellnessError::Validation(format!(
                        "unknown {} '{}'",
                        $kind, other
                    ))),
                }
            }
        }
    };
}

pub mod catalog;
pub mod coach;
pub mod config;
pub mod filter;
pub mod metrics;
pub mod profile;
pub mod progress;
pub mod sample;
pub mod state;
pub mod tips;

pub use catalog::{Catalog, Difficulty, Exercise, MealPlan, MealType, WorkoutPlan, WorkoutType};
pub use filter::Selection;
pub use metrics::{BmiCategory, HealthMetrics, IdealWeightRange, MacroTargets};
pub use profile::{
    ActivityLevel, DietaryPreference, FitnessGoal, Gender, NewProfile, ProfileUpdate, UserProfile,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WellnessError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub type WellnessResult<T> = Result<T, WellnessError>;
