use wellness_core::filter::{recommended_meals, recommended_workouts};
use wellness_core::{Catalog, HealthMetrics, NewProfile, UserProfile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let profile = UserProfile::register(NewProfile {
        email: "demo@example.com".into(),
        name: "Demo".into(),
        age: 34,
        gender: Default::default(),
        weight: 72.5,
        height: 168.0,
        fitness_goal: Default::default(),
        activity_level: Default::default(),
        dietary_preference: Default::default(),
    })?;
    let m = HealthMetrics::for_profile(&profile);
    println!("BMI {:.1} ({})", m.bmi, m.bmi_category);
    println!("Daily calories: {}", m.daily_calories);
    println!("Ideal weight: {}-{} kg", m.ideal_weight.min, m.ideal_weight.max);

    let catalog = Catalog::builtin();
    for plan in recommended_workouts(catalog, profile.fitness_goal) {
        println!("Workout: {} ({} min)", plan.name, plan.duration);
    }
    for meal in recommended_meals(catalog, profile.dietary_preference) {
        println!("Meal: {} ({} kcal)", meal.name, meal.calories);
    }
    Ok(())
}
