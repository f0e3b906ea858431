//! Catalog selection and recommendation.
//!
//! All functions are linear scans that borrow from the catalog and keep its
//! order.

use std::str::FromStr;

use crate::WellnessError;
use crate::catalog::{Catalog, MealPlan, MealType, WorkoutPlan, WorkoutType};
use crate::profile::{DietaryPreference, FitnessGoal};

/// A filter criterion: either everything or one concrete value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }
}

impl<T> Selection<T> {
    /// `None` means no criterion was given, which is the same as "all".
    pub fn parse_opt(raw: Option<&str>) -> Result<Self, WellnessError>
    where
        T: FromStr<Err = WellnessError>,
    {
        match raw {
            None => Ok(Selection::All),
            Some(s) => s.parse(),
        }
    }
}

impl<T: FromStr<Err = WellnessError>> FromStr for Selection<T> {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

pub fn filter_workouts(catalog: &Catalog, kind: Selection<WorkoutType>) -> Vec<&WorkoutPlan> {
    catalog
        .workouts
        .iter()
        .filter(|plan| kind.matches(&plan.kind))
        .collect()
}

/// Plans whose goal tag equals the goal token exactly.
pub fn recommended_workouts(catalog: &Catalog, goal: FitnessGoal) -> Vec<&WorkoutPlan> {
    recommended_workouts_for_tag(catalog, goal.as_str())
}

/// Case-sensitive, no partial matching.
pub fn recommended_workouts_for_tag<'a>(catalog: &'a Catalog, goal: &str) -> Vec<&'a WorkoutPlan> {
    catalog
        .workouts
        .iter()
        .filter(|plan| plan.goal == goal)
        .collect()
}

pub fn filter_meals(
    catalog: &Catalog,
    kind: Selection<MealType>,
    diet: Selection<DietaryPreference>,
) -> Vec<&MealPlan> {
    catalog
        .meals
        .iter()
        .filter(|meal| {
            let type_match = kind.matches(&meal.kind);
            let diet_match = match diet {
                Selection::All => true,
                Selection::Only(pref) => meal.dietary_tags.contains(&pref),
            };
            type_match && diet_match
        })
        .collect()
}

pub fn recommended_meals(catalog: &Catalog, preference: DietaryPreference) -> Vec<&MealPlan> {
    catalog
        .meals
        .iter()
        .filter(|meal| meal.dietary_tags.contains(&preference))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| id(i).to_string()).collect()
    }

    #[test]
    fn all_returns_whole_catalog_in_order() {
        let c = Catalog::builtin();
        let out = filter_workouts(c, Selection::All);
        let expected: Vec<&WorkoutPlan> = c.workouts.iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn type_filter_keeps_relative_order() {
        let c = Catalog::builtin();
        let cardio = filter_workouts(c, Selection::Only(WorkoutType::Cardio));
        assert_eq!(
            ids(&cardio, |w: &WorkoutPlan| w.id.as_str()),
            vec!["cardio-blast", "full-body-hiit"]
        );
        let strength = filter_workouts(c, Selection::Only(WorkoutType::Strength));
        assert!(strength.iter().all(|w| w.kind == WorkoutType::Strength));
        assert_eq!(strength.len(), 1);
    }

    #[test]
    fn recommended_workouts_exact_goal_match() {
        let c = Catalog::builtin();
        let out = recommended_workouts(c, FitnessGoal::Endurance);
        assert_eq!(ids(&out, |w: &WorkoutPlan| w.id.as_str()), vec!["full-body-hiit"]);
        assert!(recommended_workouts_for_tag(c, "Endurance").is_empty());
        assert!(recommended_workouts_for_tag(c, "endur").is_empty());
    }

    #[test]
    fn keto_meals_are_exactly_tagged_subset() {
        let c = Catalog::builtin();
        let first = recommended_meals(c, DietaryPreference::Keto);
        let second = recommended_meals(c, DietaryPreference::Keto);
        assert_eq!(first, second);
        assert_eq!(
            ids(&first, |m: &MealPlan| m.id.as_str()),
            vec!["grilled-salmon", "keto-salad"]
        );
        let expected = c
            .meals
            .iter()
            .filter(|m| m.dietary_tags.contains(&DietaryPreference::Keto))
            .count();
        assert_eq!(first.len(), expected);
        assert!(first.len() <= c.meals.len());
    }

    #[test]
    fn meal_filters_are_anded() {
        let c = Catalog::builtin();
        let out = filter_meals(
            c,
            Selection::Only(MealType::Lunch),
            Selection::Only(DietaryPreference::Vegetarian),
        );
        assert_eq!(ids(&out, |m: &MealPlan| m.id.as_str()), vec!["quinoa-bowl"]);
        assert_eq!(filter_meals(c, Selection::All, Selection::All).len(), c.meals.len());
        let dinners = filter_meals(c, Selection::Only(MealType::Dinner), Selection::All);
        assert_eq!(dinners.len(), 2);
        assert!(
            filter_meals(
                c,
                Selection::Only(MealType::Snack),
                Selection::Only(DietaryPreference::Paleo)
            )
            .is_empty()
        );
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("all".parse::<Selection<WorkoutType>>().unwrap(), Selection::All);
        assert_eq!(
            "flexibility".parse::<Selection<WorkoutType>>().unwrap(),
            Selection::Only(WorkoutType::Flexibility)
        );
        assert!("yoga".parse::<Selection<WorkoutType>>().is_err());
        assert_eq!(
            Selection::<MealType>::parse_opt(None).unwrap(),
            Selection::All
        );
    }
}
