use std::hint::black_box;

use chrono::Utc;
use criterion::{Criterion, criterion_group, criterion_main};
use wellness_core::filter::{filter_meals, filter_workouts};
use wellness_core::{
    ActivityLevel, Catalog, DietaryPreference, FitnessGoal, Gender, HealthMetrics, Selection,
    UserProfile,
};

fn sample_profile() -> UserProfile {
    UserProfile {
        id: "bench".into(),
        email: "bench@example.com".into(),
        name: "Bench".into(),
        age: 30,
        gender: Gender::Male,
        weight: 80.0,
        height: 180.0,
        fitness_goal: FitnessGoal::LoseWeight,
        activity_level: ActivityLevel::ModeratelyActive,
        dietary_preference: DietaryPreference::Balanced,
        created_at: Utc::now(),
    }
}

fn bench_health_metrics(c: &mut Criterion) {
    let profile = sample_profile();
    c.bench_function("health_metrics_for_profile", |b| {
        b.iter(|| HealthMetrics::for_profile(black_box(&profile)))
    });
}

fn bench_catalog_filters(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    c.bench_function("filter_workouts_all", |b| {
        b.iter(|| filter_workouts(black_box(catalog), Selection::All).len())
    });
    c.bench_function("filter_meals_keto", |b| {
        b.iter(|| {
            filter_meals(
                black_box(catalog),
                Selection::All,
                Selection::Only(DietaryPreference::Keto),
            )
            .len()
        })
    });
}

criterion_group!(benches, bench_health_metrics, bench_catalog_filters);
criterion_main!(benches);
