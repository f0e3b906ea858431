//! Static workout and meal catalogs.

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::profile::DietaryPreference;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
}

wire_tokens!(WorkoutType, "workout type", {
    Cardio => "cardio",
    Strength => "strength",
    Flexibility => "flexibility",
});

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

wire_tokens!(Difficulty, "difficulty", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

wire_tokens!(MealType, "meal type", {
    Breakfast => "breakfast",
    Lunch => "lunch",
    Dinner => "dinner",
    Snack => "snack",
});

/// A single movement. Duration, reps and sets are all optional; a record
/// with none of them is still valid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    /// Seconds
    pub duration: Option<u32>,
    pub reps: Option<u32>,
    pub sets: Option<u32>,
    pub description: String,
    pub target_muscles: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    /// Minutes
    pub duration: u32,
    pub difficulty: Difficulty,
    /// Free-form tag compared against a fitness goal token.
    pub goal: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MealPlan {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MealType,
    pub calories: f64,
    /// Grams
    pub protein: f64,
    /// Grams
    pub carbs: f64,
    /// Grams
    pub fat: f64,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub dietary_tags: Vec<DietaryPreference>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub workouts: Vec<WorkoutPlan>,
    pub meals: Vec<MealPlan>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(build_builtin);

impl Catalog {
    /// The built-in dataset, constructed once on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn workout(&self, id: &str) -> Option<&WorkoutPlan> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn meal(&self, id: &str) -> Option<&MealPlan> {
        self.meals.iter().find(|m| m.id == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct ExerciseDef {
    id: &'static str,
    name: &'static str,
    kind: WorkoutType,
    duration: Option<u32>,
    reps: Option<u32>,
    sets: Option<u32>,
    description: &'static str,
    target_muscles: &'static [&'static str],
}

const EXERCISES: &[ExerciseDef] = &[
    ExerciseDef {
        id: "push-ups",
        name: "Push-ups",
        kind: WorkoutType::Strength,
        duration: None,
        reps: Some(15),
        sets: Some(3),
        description: "Classic bodyweight exercise targeting chest, shoulders, and triceps",
        target_muscles: &["chest", "shoulders", "triceps", "core"],
    },
    ExerciseDef {
        id: "squats",
        name: "Squats",
        kind: WorkoutType::Strength,
        duration: None,
        reps: Some(20),
        sets: Some(3),
        description: "Fundamental lower body exercise targeting glutes and quadriceps",
        target_muscles: &["glutes", "quadriceps", "hamstrings", "calves"],
    },
    ExerciseDef {
        id: "planks",
        name: "Planks",
        kind: WorkoutType::Strength,
        duration: Some(60),
        reps: None,
        sets: Some(3),
        description: "Core strengthening exercise that builds stability and endurance",
        target_muscles: &["core", "shoulders", "back"],
    },
    ExerciseDef {
        id: "jumping-jacks",
        name: "Jumping Jacks",
        kind: WorkoutType::Cardio,
        duration: Some(30),
        reps: None,
        sets: Some(3),
        description: "High-energy cardio exercise that gets your heart pumping",
        target_muscles: &["full-body"],
    },
    ExerciseDef {
        id: "lunges",
        name: "Lunges",
        kind: WorkoutType::Strength,
        duration: None,
        reps: Some(12),
        sets: Some(3),
        description: "Unilateral leg exercise that builds strength and balance",
        target_muscles: &["glutes", "quadriceps", "hamstrings"],
    },
    ExerciseDef {
        id: "mountain-climbers",
        name: "Mountain Climbers",
        kind: WorkoutType::Cardio,
        duration: Some(45),
        reps: None,
        sets: Some(3),
        description: "Dynamic cardio exercise that combines core and cardio training",
        target_muscles: &["core", "shoulders", "legs"],
    },
    ExerciseDef {
        id: "burpees",
        name: "Burpees",
        kind: WorkoutType::Cardio,
        duration: None,
        reps: Some(10),
        sets: Some(3),
        description: "Full-body exercise that combines strength and cardio",
        target_muscles: &["full-body"],
    },
    ExerciseDef {
        id: "child-pose",
        name: "Child's Pose",
        kind: WorkoutType::Flexibility,
        duration: Some(60),
        reps: None,
        sets: Some(1),
        description: "Restorative yoga pose that stretches the back and hips",
        target_muscles: &["back", "hips", "shoulders"],
    },
    ExerciseDef {
        id: "cat-cow",
        name: "Cat-Cow Stretch",
        kind: WorkoutType::Flexibility,
        duration: None,
        reps: Some(15),
        sets: Some(2),
        description: "Dynamic spine mobility exercise",
        target_muscles: &["spine", "core"],
    },
    ExerciseDef {
        id: "high-knees",
        name: "High Knees",
        kind: WorkoutType::Cardio,
        duration: Some(30),
        reps: None,
        sets: Some(3),
        description: "Dynamic cardio exercise to elevate heart rate",
        target_muscles: &["legs", "core"],
    },
];

struct WorkoutDef {
    id: &'static str,
    name: &'static str,
    kind: WorkoutType,
    duration: u32,
    difficulty: Difficulty,
    goal: &'static str,
    exercise_ids: &'static [&'static str],
}

const WORKOUTS: &[WorkoutDef] = &[
    WorkoutDef {
        id: "beginner-strength",
        name: "Beginner Strength Training",
        kind: WorkoutType::Strength,
        duration: 30,
        difficulty: Difficulty::Beginner,
        goal: "build_muscle",
        exercise_ids: &["push-ups", "squats", "planks", "lunges"],
    },
    WorkoutDef {
        id: "cardio-blast",
        name: "Cardio Blast",
        kind: WorkoutType::Cardio,
        duration: 25,
        difficulty: Difficulty::Intermediate,
        goal: "lose_weight",
        exercise_ids: &["jumping-jacks", "mountain-climbers", "burpees", "high-knees"],
    },
    WorkoutDef {
        id: "flexibility-flow",
        name: "Flexibility Flow",
        kind: WorkoutType::Flexibility,
        duration: 20,
        difficulty: Difficulty::Beginner,
        goal: "stay_active",
        exercise_ids: &["child-pose", "cat-cow", "planks"],
    },
    WorkoutDef {
        id: "full-body-hiit",
        name: "Full Body HIIT",
        kind: WorkoutType::Cardio,
        duration: 35,
        difficulty: Difficulty::Advanced,
        goal: "endurance",
        exercise_ids: &[
            "burpees",
            "mountain-climbers",
            "squats",
            "push-ups",
            "jumping-jacks",
        ],
    },
];

fn builtin_meals() -> Vec<MealPlan> {
    use DietaryPreference::*;

    let meal = |id: &str,
                name: &str,
                kind: MealType,
                (calories, protein, carbs, fat): (f64, f64, f64, f64),
                ingredients: &[&str],
                instructions: &[&str],
                dietary_tags: &[DietaryPreference]| MealPlan {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        calories,
        protein,
        carbs,
        fat,
        ingredients: strings(ingredients),
        instructions: strings(instructions),
        dietary_tags: dietary_tags.to_vec(),
    };

    vec![
        meal(
            "protein-breakfast",
            "Protein Power Breakfast",
            MealType::Breakfast,
            (350.0, 25.0, 30.0, 15.0),
            &["2 eggs", "1 slice whole grain toast", "1/2 avocado", "spinach", "tomatoes"],
            &[
                "Scramble eggs with spinach and tomatoes",
                "Toast bread and top with sliced avocado",
                "Serve together with a glass of water",
            ],
            &[Balanced, Vegetarian],
        ),
        meal(
            "quinoa-bowl",
            "Mediterranean Quinoa Bowl",
            MealType::Lunch,
            (450.0, 18.0, 55.0, 20.0),
            &["1 cup quinoa", "cucumber", "cherry tomatoes", "feta cheese", "olive oil", "lemon"],
            &[
                "Cook quinoa according to package instructions",
                "Chop vegetables and mix with quinoa",
                "Add feta cheese and dress with olive oil and lemon",
                "Season with herbs and serve",
            ],
            &[Balanced, Vegetarian],
        ),
        meal(
            "grilled-salmon",
            "Grilled Salmon with Vegetables",
            MealType::Dinner,
            (520.0, 35.0, 25.0, 30.0),
            &["salmon fillet", "broccoli", "sweet potato", "olive oil", "garlic", "herbs"],
            &[
                "Season salmon with herbs and garlic",
                "Grill salmon for 6-8 minutes per side",
                "Steam broccoli and roast sweet potato",
                "Drizzle with olive oil and serve",
            ],
            &[Balanced, Keto],
        ),
        meal(
            "keto-salad",
            "Keto Chicken Salad",
            MealType::Lunch,
            (400.0, 30.0, 8.0, 28.0),
            &["chicken breast", "mixed greens", "avocado", "bacon", "cheese", "olive oil"],
            &[
                "Grill chicken breast and slice",
                "Prepare mixed greens in a bowl",
                "Add sliced avocado, bacon, and cheese",
                "Top with chicken and dress with olive oil",
            ],
            &[Keto],
        ),
        meal(
            "veggie-smoothie",
            "Green Power Smoothie",
            MealType::Snack,
            (180.0, 8.0, 35.0, 4.0),
            &["spinach", "banana", "apple", "almond milk", "chia seeds"],
            &[
                "Add all ingredients to blender",
                "Blend until smooth",
                "Add ice if desired",
                "Serve immediately",
            ],
            &[Vegetarian, Balanced],
        ),
        meal(
            "paleo-bowl",
            "Paleo Power Bowl",
            MealType::Dinner,
            (480.0, 32.0, 20.0, 32.0),
            &["grass-fed beef", "sweet potato", "brussels sprouts", "avocado", "coconut oil"],
            &[
                "Cook beef in coconut oil",
                "Roast sweet potato and brussels sprouts",
                "Slice avocado",
                "Combine in bowl and serve",
            ],
            &[Paleo],
        ),
    ]
}

fn build_builtin() -> Catalog {
    let exercises: Vec<Exercise> = EXERCISES
        .iter()
        .map(|e| Exercise {
            id: e.id.to_string(),
            name: e.name.to_string(),
            kind: e.kind,
            duration: e.duration,
            reps: e.reps,
            sets: e.sets,
            description: e.description.to_string(),
            target_muscles: strings(e.target_muscles),
        })
        .collect();

    let workouts = WORKOUTS
        .iter()
        .map(|w| WorkoutPlan {
            id: w.id.to_string(),
            name: w.name.to_string(),
            kind: w.kind,
            duration: w.duration,
            difficulty: w.difficulty,
            goal: w.goal.to_string(),
            exercises: w
                .exercise_ids
                .iter()
                .filter_map(|id| exercises.iter().find(|e| e.id == *id).cloned())
                .collect(),
        })
        .collect();

    tracing::debug!("built-in catalog initialized");

    Catalog {
        exercises,
        workouts,
        meals: builtin_meals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sizes() {
        let c = Catalog::builtin();
        assert_eq!(c.exercises.len(), 10);
        assert_eq!(c.workouts.len(), 4);
        assert_eq!(c.meals.len(), 6);
    }

    #[test]
    fn every_workout_exercise_resolves() {
        for w in &WORKOUTS[..] {
            let plan = Catalog::builtin().workout(w.id).expect("plan present");
            assert_eq!(plan.exercises.len(), w.exercise_ids.len(), "plan {}", w.id);
            let ids: Vec<&str> = plan.exercises.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, w.exercise_ids);
        }
    }

    #[test]
    fn ids_are_unique() {
        let c = Catalog::builtin();
        let mut ids: Vec<&str> = c.workouts.iter().map(|w| w.id.as_str()).collect();
        ids.extend(c.meals.iter().map(|m| m.id.as_str()));
        ids.extend(c.exercises.iter().map(|e| e.id.as_str()));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn lookups_by_id() {
        let c = Catalog::builtin();
        assert_eq!(c.meal("keto-salad").map(|m| m.calories), Some(400.0));
        assert_eq!(c.exercise("child-pose").map(|e| e.name.as_str()), Some("Child's Pose"));
        assert!(c.workout("missing").is_none());
    }

    #[test]
    fn serialized_type_field_uses_wire_name() {
        let plan = Catalog::builtin().workout("cardio-blast").unwrap();
        let v = serde_json::to_value(plan).unwrap();
        assert_eq!(v["type"], "cardio");
        assert_eq!(v["difficulty"], "intermediate");
        let meal = serde_json::to_value(Catalog::builtin().meal("grilled-salmon").unwrap()).unwrap();
        assert_eq!(meal["dietary_tags"], serde_json::json!(["balanced", "keto"]));
    }

    #[test]
    fn exercise_without_duration_reps_or_sets() {
        let bare = Exercise {
            id: "breathing".into(),
            name: "Box Breathing".into(),
            kind: WorkoutType::Flexibility,
            duration: None,
            reps: None,
            sets: None,
            description: "Slow four-count breaths".into(),
            target_muscles: Vec::new(),
        };
        let v = serde_json::to_value(&bare).unwrap();
        assert_eq!(v["type"], "flexibility");
        assert!(v["duration"].is_null() && v["reps"].is_null() && v["sets"].is_null());
        let back: Exercise = serde_json::from_value(v).unwrap();
        assert_eq!(back, bare);

        // the keys may be left out entirely
        let sparse: Exercise = serde_json::from_value(serde_json::json!({
            "id": "breathing",
            "name": "Box Breathing",
            "type": "flexibility",
            "description": "Slow four-count breaths",
            "target_muscles": [],
        }))
        .unwrap();
        assert_eq!(sparse, bare);
    }
}
