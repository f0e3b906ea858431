use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};

use wellness_core::{DietaryPreference, FitnessGoal, HealthMetrics};

pub fn weekly_workout_plan_prompt(goal: Option<FitnessGoal>, sessions: u32) -> GetPromptResult {
    let goal_text = goal
        .map(|g| g.phrase())
        .unwrap_or_else(|| "general fitness".to_string());
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Build me a weekly workout plan with {} sessions aimed at {}.\n\nUse get_recommended_workouts for plans matching my goal and list_workouts to mix in other types. Use get_workout to look at the exercises of each plan. Spread strength, cardio and flexibility across the week, keep rest days between hard sessions, and list each session with its day, plan, duration and difficulty.",
            sessions, goal_text
        ),
    )])
    .with_description(format!("Weekly workout plan for {}", goal_text))
}

pub fn nutrition_review_prompt(
    preference: Option<DietaryPreference>,
    metrics: Option<&HealthMetrics>,
    meal_type: &str,
) -> GetPromptResult {
    let diet = preference.map(|p| p.as_str()).unwrap_or("balanced");
    let targets = match metrics {
        Some(m) => format!(
            "My daily target is {} kcal ({} g protein, {} g carbs, {} g fat).",
            m.daily_calories, m.macros.protein_g, m.macros.carbs_g, m.macros.fat_g
        ),
        None => "I have not registered a profile yet, so call get_health_metrics after register_profile to get my targets.".to_string(),
    };
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Review my nutrition for a {} diet. {}\n\nUse list_meals with diet={} and kind={} to find options, and get_meal for ingredients. Suggest a day of meals close to my targets and point out where I fall short.",
            diet, targets, diet, meal_type
        ),
    )])
    .with_description(format!("Nutrition review for a {} diet", diet))
}
