use rmcp::model::RawResource;

use wellness_core::Catalog;

pub const WORKOUTS_URI: &str = "wellness://catalog/workouts";
pub const MEALS_URI: &str = "wellness://catalog/meals";

/// Descriptors for the built-in catalog resources.
pub fn catalog_resources() -> Vec<RawResource> {
    let mut workouts = RawResource::new(WORKOUTS_URI, "Workout Catalog");
    workouts.description =
        Some("All built-in workout plans with their exercises".to_string());
    workouts.mime_type = Some("application/json".to_string());

    let mut meals = RawResource::new(MEALS_URI, "Meal Catalog");
    meals.description = Some(
        "All built-in meal plans with macros, ingredients and dietary tags".to_string(),
    );
    meals.mime_type = Some("application/json".to_string());

    vec![workouts, meals]
}

/// Pretty JSON for a catalog resource, `None` for unknown URIs.
pub fn catalog_resource_text(
    catalog: &Catalog,
    uri: &str,
) -> Option<Result<String, serde_json::Error>> {
    match uri {
        WORKOUTS_URI => Some(serde_json::to_string_pretty(&serde_json::json!({
            "workouts": catalog.workouts,
        }))),
        MEALS_URI => Some(serde_json::to_string_pretty(&serde_json::json!({
            "meals": catalog.meals,
        }))),
        _ => None,
    }
}
