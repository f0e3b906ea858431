use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use wellness_core::coach::ChatMessage;
use wellness_core::progress::{ProgressEntry, ProgressSummary};
use wellness_core::sample::SamplePoint;
use wellness_core::state::View;
use wellness_core::{
    BmiCategory, DietaryPreference, FitnessGoal, Gender, HealthMetrics, IdealWeightRange,
    MealPlan, UserProfile, WorkoutPlan,
};

#[derive(Debug, Serialize, JsonSchema)]
pub struct ProfileResult {
    pub profile: UserProfile,
    pub welcome: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct MetricsResult {
    pub profile_id: String,
    pub metrics: HealthMetrics,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct BmiParams {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub label: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct IdealWeightParams {
    /// Height in centimeters
    pub height: f64,
    #[serde(default)]
    pub gender: Gender,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct IdealWeightResult {
    pub height: f64,
    pub range: IdealWeightRange,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WorkoutFilterParams {
    /// strength, cardio, flexibility or "all" (default)
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RecommendedWorkoutsParams {
    /// Defaults to the registered profile's goal.
    pub goal: Option<FitnessGoal>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct WorkoutsResult {
    pub workouts: Vec<WorkoutPlan>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct IdParam {
    pub id: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct WorkoutResult {
    pub workout: WorkoutPlan,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct MealFilterParams {
    /// breakfast, lunch, dinner, snack or "all" (default)
    pub kind: Option<String>,
    /// A dietary preference token or "all" (default)
    pub diet: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RecommendedMealsParams {
    /// Defaults to the registered profile's preference.
    pub preference: Option<DietaryPreference>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct MealsResult {
    pub meals: Vec<MealPlan>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct MealResult {
    pub meal: MealPlan,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AskCoachParams {
    pub message: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CoachReplyResult {
    pub question: ChatMessage,
    pub reply: ChatMessage,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ChatHistoryResult {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TipResult {
    pub tip: String,
    pub shown_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct WaterResult {
    pub glasses: u32,
    pub goal: u32,
    pub goal_reached: bool,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ProgressEntryParams {
    /// RFC 3339 timestamp; defaults to now.
    pub date: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub workout_completed: Option<bool>,
    pub water_intake: Option<u32>,
    pub calories_consumed: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ProgressResult {
    pub entries: Vec<ProgressEntry>,
    pub summary: ProgressSummary,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SampleProgressResult {
    pub points: Vec<SamplePoint>,
    pub streak_days: u32,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ViewParams {
    pub view: View,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ViewResult {
    pub view: View,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WeeklyPlanPromptParams {
    /// Sessions per week, default 3
    pub sessions: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct NutritionReviewPromptParams {
    pub meal_type: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ClearProfileResult {
    /// `false` when no profile was registered.
    pub cleared: bool,
}
