use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, GetPromptRequestParams, GetPromptResult, ListPromptsResult, ListResourcesResult,
    PaginatedRequestParams, ReadResourceRequestParams, ReadResourceResult, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer};
use rmcp::{prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router};

use wellness_core::coach::{ChatMessage, Coach};
use wellness_core::config::Config;
use wellness_core::filter::{
    filter_meals, filter_workouts, recommended_meals, recommended_workouts,
};
use wellness_core::metrics::{classify_bmi, compute_bmi, ideal_weight_range};
use wellness_core::progress::ProgressEntry;
use wellness_core::state::AppState;
use wellness_core::{
    Catalog, HealthMetrics, NewProfile, ProfileUpdate, Selection, UserProfile, WellnessError,
    sample,
};

pub mod error;
mod middleware;
mod prompts;
mod resources;
pub mod telemetry;
pub mod types;

pub use error::{McpError, McpResult};
use types::*;

#[derive(Clone)]
pub struct WellnessMcpHandler {
    state: Arc<AppState>,
    catalog: &'static Catalog,
    coach: Coach,
    water_goal: u32,
    tool_router: rmcp::handler::server::tool::ToolRouter<WellnessMcpHandler>,
    prompt_router: rmcp::handler::server::router::prompt::PromptRouter<WellnessMcpHandler>,
}

/// Instruments a tool body and turns its error into the tool error string.
async fn run<T, Fut>(name: &'static str, op: Fut) -> Result<T, String>
where
    Fut: Future<Output = McpResult<T>>,
{
    middleware::instrumented(name, op)
        .await
        .map_err(String::from)
}

fn require_positive(field: &str, value: f64) -> McpResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WellnessError::Validation(format!("{field} must be positive")).into())
    }
}

#[tool_router]
#[prompt_router]
impl WellnessMcpHandler {
    pub fn new(config: &Config) -> Self {
        Self::with_state(config, Arc::new(AppState::new()))
    }

    pub fn with_state(config: &Config, state: Arc<AppState>) -> Self {
        Self {
            state,
            catalog: Catalog::builtin(),
            coach: Coach::from_config(config),
            water_goal: config.water_goal,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_router.list_all().len()
    }

    async fn current_profile(&self) -> McpResult<UserProfile> {
        self.state
            .snapshot()
            .await
            .profile
            .clone()
            .ok_or(McpError::NoProfile)
    }

    fn water(&self, glasses: u32) -> WaterResult {
        WaterResult {
            glasses,
            goal: self.water_goal,
            goal_reached: glasses >= self.water_goal,
        }
    }

    // === Profile & metrics ===

    #[tool(
        name = "register_profile",
        description = "Register the user profile (replaces any existing one)"
    )]
    async fn register_profile(
        &self,
        params: Parameters<NewProfile>,
    ) -> Result<Json<ProfileResult>, String> {
        run("register_profile", async move {
            let profile = UserProfile::register(params.0)?;
            let welcome = self.coach.welcome(Some(&profile));
            self.state
                .register_profile(profile.clone(), welcome.clone())
                .await;
            Ok(Json(ProfileResult {
                profile,
                welcome: Some(welcome.text),
            }))
        })
        .await
    }

    #[tool(name = "get_profile", description = "Get the registered user profile")]
    async fn get_profile(&self) -> Result<Json<ProfileResult>, String> {
        run("get_profile", async move {
            let profile = self.current_profile().await?;
            Ok(Json(ProfileResult {
                profile,
                welcome: None,
            }))
        })
        .await
    }

    #[tool(
        name = "update_profile",
        description = "Edit profile fields; omitted fields keep their value"
    )]
    async fn update_profile(
        &self,
        params: Parameters<ProfileUpdate>,
    ) -> Result<Json<ProfileResult>, String> {
        run("update_profile", async move {
            let updated = self.current_profile().await?.apply(params.0)?;
            self.state.set_profile(updated.clone()).await;
            Ok(Json(ProfileResult {
                profile: updated,
                welcome: None,
            }))
        })
        .await
    }

    #[tool(
        name = "clear_profile",
        description = "Log out: forget the registered profile and the coach conversation"
    )]
    async fn clear_profile(&self) -> Result<Json<ClearProfileResult>, String> {
        run("clear_profile", async move {
            let cleared = self.state.clear_profile().await;
            Ok(Json(ClearProfileResult { cleared }))
        })
        .await
    }

    #[tool(
        name = "get_health_metrics",
        description = "BMI, BMR, TDEE, daily calories, ideal weight range and macro targets for the registered profile"
    )]
    async fn get_health_metrics(&self) -> Result<Json<MetricsResult>, String> {
        run("get_health_metrics", async move {
            let profile = self.current_profile().await?;
            Ok(Json(MetricsResult {
                profile_id: profile.id.clone(),
                metrics: HealthMetrics::for_profile(&profile),
            }))
        })
        .await
    }

    #[tool(
        name = "calculate_bmi",
        description = "Compute BMI and its category from weight (kg) and height (cm)"
    )]
    async fn calculate_bmi(&self, params: Parameters<BmiParams>) -> Result<Json<BmiResult>, String> {
        run("calculate_bmi", async move {
            let p = params.0;
            require_positive("weight", p.weight)?;
            require_positive("height", p.height)?;
            let bmi = compute_bmi(p.weight, p.height);
            let category = classify_bmi(bmi);
            Ok(Json(BmiResult {
                bmi,
                category,
                label: category.label().to_string(),
            }))
        })
        .await
    }

    #[tool(
        name = "ideal_weight_range",
        description = "Healthy weight range (kg) for a height in cm"
    )]
    async fn ideal_weight_range(
        &self,
        params: Parameters<IdealWeightParams>,
    ) -> Result<Json<IdealWeightResult>, String> {
        run("ideal_weight_range", async move {
            let p = params.0;
            require_positive("height", p.height)?;
            Ok(Json(IdealWeightResult {
                height: p.height,
                range: ideal_weight_range(p.height, p.gender),
            }))
        })
        .await
    }

    // === Catalog ===

    #[tool(
        name = "list_workouts",
        description = "List workout plans, optionally filtered by type"
    )]
    async fn list_workouts(
        &self,
        params: Parameters<WorkoutFilterParams>,
    ) -> Result<Json<WorkoutsResult>, String> {
        run("list_workouts", async move {
            let kind = Selection::parse_opt(params.0.kind.as_deref())?;
            let workouts = filter_workouts(self.catalog, kind)
                .into_iter()
                .cloned()
                .collect();
            Ok(Json(WorkoutsResult { workouts }))
        })
        .await
    }

    #[tool(
        name = "get_recommended_workouts",
        description = "Workout plans matching a fitness goal (defaults to the profile's goal)"
    )]
    async fn get_recommended_workouts(
        &self,
        params: Parameters<RecommendedWorkoutsParams>,
    ) -> Result<Json<WorkoutsResult>, String> {
        run("get_recommended_workouts", async move {
            let goal = match params.0.goal {
                Some(goal) => goal,
                None => self.current_profile().await?.fitness_goal,
            };
            let workouts = recommended_workouts(self.catalog, goal)
                .into_iter()
                .cloned()
                .collect();
            Ok(Json(WorkoutsResult { workouts }))
        })
        .await
    }

    #[tool(name = "get_workout", description = "Get a workout plan by id")]
    async fn get_workout(&self, params: Parameters<IdParam>) -> Result<Json<WorkoutResult>, String> {
        run("get_workout", async move {
            let id = params.0.id;
            let workout = self
                .catalog
                .workout(&id)
                .cloned()
                .ok_or_else(|| McpError::NotFound(format!("workout '{id}'")))?;
            Ok(Json(WorkoutResult { workout }))
        })
        .await
    }

    #[tool(
        name = "list_meals",
        description = "List meal plans, optionally filtered by meal type and dietary preference"
    )]
    async fn list_meals(&self, params: Parameters<MealFilterParams>) -> Result<Json<MealsResult>, String> {
        run("list_meals", async move {
            let p = params.0;
            let kind = Selection::parse_opt(p.kind.as_deref())?;
            let diet = Selection::parse_opt(p.diet.as_deref())?;
            let meals = filter_meals(self.catalog, kind, diet)
                .into_iter()
                .cloned()
                .collect();
            Ok(Json(MealsResult { meals }))
        })
        .await
    }

    #[tool(
        name = "get_recommended_meals",
        description = "Meal plans tagged with a dietary preference (defaults to the profile's preference)"
    )]
    async fn get_recommended_meals(
        &self,
        params: Parameters<RecommendedMealsParams>,
    ) -> Result<Json<MealsResult>, String> {
        run("get_recommended_meals", async move {
            let preference = match params.0.preference {
                Some(pref) => pref,
                None => self.current_profile().await?.dietary_preference,
            };
            let meals = recommended_meals(self.catalog, preference)
                .into_iter()
                .cloned()
                .collect();
            Ok(Json(MealsResult { meals }))
        })
        .await
    }

    #[tool(name = "get_meal", description = "Get a meal plan by id")]
    async fn get_meal(&self, params: Parameters<IdParam>) -> Result<Json<MealResult>, String> {
        run("get_meal", async move {
            let id = params.0.id;
            let meal = self
                .catalog
                .meal(&id)
                .cloned()
                .ok_or_else(|| McpError::NotFound(format!("meal '{id}'")))?;
            Ok(Json(MealResult { meal }))
        })
        .await
    }

    // === Coach ===

    #[tool(
        name = "ask_coach",
        description = "Send a message to the fitness coach and wait for its reply"
    )]
    async fn ask_coach(&self, params: Parameters<AskCoachParams>) -> Result<Json<CoachReplyResult>, String> {
        run("ask_coach", async move {
            let text = params.0.message;
            if text.trim().is_empty() {
                return Err(WellnessError::Validation("message must not be empty".into()).into());
            }
            let profile = self.state.snapshot().await.profile.clone();
            let question = ChatMessage::user(text.trim());
            let reply = self.coach.reply(&question.text, profile.as_ref()).await?;
            self.state
                .add_chat_exchange(question.clone(), reply.clone())
                .await;
            Ok(Json(CoachReplyResult { question, reply }))
        })
        .await
    }

    #[tool(name = "get_chat_history", description = "All chat messages, oldest first")]
    async fn get_chat_history(&self) -> Result<Json<ChatHistoryResult>, String> {
        run("get_chat_history", async move {
            let snapshot = self.state.snapshot().await;
            let messages = if snapshot.chat.is_empty() {
                vec![self.coach.welcome(snapshot.profile.as_ref())]
            } else {
                snapshot.chat.clone()
            };
            Ok(Json(ChatHistoryResult { messages }))
        })
        .await
    }

    // === Daily tracking ===

    #[tool(name = "get_daily_tip", description = "Health tip of the day")]
    async fn get_daily_tip(&self) -> Result<Json<TipResult>, String> {
        run("get_daily_tip", async move {
            let tip = self.state.refresh_daily_tip(Utc::now().date_naive()).await;
            Ok(Json(TipResult {
                tip: tip.text,
                shown_on: tip.shown_on,
            }))
        })
        .await
    }

    #[tool(name = "add_water_glass", description = "Log one glass of water")]
    async fn add_water_glass(&self) -> Result<Json<WaterResult>, String> {
        run("add_water_glass", async move {
            let glasses = self.state.add_water_glass().await;
            Ok(Json(self.water(glasses)))
        })
        .await
    }

    #[tool(name = "reset_water_intake", description = "Reset the water counter to zero")]
    async fn reset_water_intake(&self) -> Result<Json<WaterResult>, String> {
        run("reset_water_intake", async move {
            self.state.reset_water_intake().await;
            Ok(Json(self.water(0)))
        })
        .await
    }

    #[tool(
        name = "add_progress_entry",
        description = "Record weight, workout completion, water, calories or notes"
    )]
    async fn add_progress_entry(
        &self,
        params: Parameters<ProgressEntryParams>,
    ) -> Result<Json<ProgressResult>, String> {
        run("add_progress_entry", async move {
            let p = params.0;
            let entry = ProgressEntry {
                date: p.date.unwrap_or_else(Utc::now),
                weight: p.weight,
                workout_completed: p.workout_completed,
                water_intake: p.water_intake,
                calories_consumed: p.calories_consumed,
                notes: p.notes,
            };
            self.state.add_progress_entry(entry).await?;
            let snapshot = self.state.snapshot().await;
            let log = &snapshot.progress;
            Ok(Json(ProgressResult {
                entries: log.entries().to_vec(),
                summary: log.summary(),
            }))
        })
        .await
    }

    #[tool(name = "get_progress", description = "Recorded progress entries and their summary")]
    async fn get_progress(&self) -> Result<Json<ProgressResult>, String> {
        run("get_progress", async move {
            let snapshot = self.state.snapshot().await;
            let log = &snapshot.progress;
            Ok(Json(ProgressResult {
                entries: log.entries().to_vec(),
                summary: log.summary(),
            }))
        })
        .await
    }

    #[tool(
        name = "get_sample_progress",
        description = "Randomly generated weekly chart data and streak (demo data, not measurements)"
    )]
    async fn get_sample_progress(&self) -> Result<Json<SampleProgressResult>, String> {
        run("get_sample_progress", async move {
            let base_weight = self
                .state
                .snapshot()
                .await
                .profile
                .as_ref()
                .map(|p| p.weight)
                .unwrap_or(70.0);
            let mut rng = rand::rng();
            let points = sample::weekly_chart(base_weight, Utc::now().date_naive(), &mut rng);
            let streak_days = sample::streak_days(&mut rng);
            Ok(Json(SampleProgressResult {
                points,
                streak_days,
            }))
        })
        .await
    }

    #[tool(name = "set_view", description = "Select the current app view")]
    async fn set_view(&self, params: Parameters<ViewParams>) -> Result<Json<ViewResult>, String> {
        run("set_view", async move {
            let view = params.0.view;
            self.state.set_view(view).await;
            Ok(Json(ViewResult { view }))
        })
        .await
    }

    // === MCP Prompts ===

    /// Weekly plan built from the catalog for the user's goal
    #[prompt(
        name = "weekly-workout-plan",
        description = "Plan a week of workouts from the catalog for the user's goal"
    )]
    async fn weekly_workout_plan(&self, params: Parameters<WeeklyPlanPromptParams>) -> GetPromptResult {
        let sessions = params.0.sessions.unwrap_or(3);
        let goal = self
            .state
            .snapshot()
            .await
            .profile
            .as_ref()
            .map(|p| p.fitness_goal);

        prompts::weekly_workout_plan_prompt(goal, sessions)
    }

    /// Meal review against the user's calorie and macro targets
    #[prompt(
        name = "nutrition-review",
        description = "Review meal options against daily calorie and macro targets"
    )]
    async fn nutrition_review(&self, params: Parameters<NutritionReviewPromptParams>) -> GetPromptResult {
        let meal_type = params.0.meal_type.unwrap_or_else(|| "all".to_string());
        let snapshot = self.state.snapshot().await;
        let profile = snapshot.profile.as_ref();
        let metrics = profile.map(HealthMetrics::for_profile);

        prompts::nutrition_review_prompt(
            profile.map(|p| p.dietary_preference),
            metrics.as_ref(),
            &meal_type,
        )
    }
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl rmcp::ServerHandler for WellnessMcpHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Wellness coach MCP server - health metrics (BMI, BMR, TDEE, daily calories), \
             workout and meal catalogs, a scripted fitness coach, and daily tracking.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let resources = resources::catalog_resources()
            .into_iter()
            .map(|r| r.no_annotation())
            .collect();

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        match resources::catalog_resource_text(self.catalog, &request.uri) {
            Some(Ok(text)) => Ok(ReadResourceResult::new(vec![
                ResourceContents::TextResourceContents {
                    uri: request.uri.clone(),
                    mime_type: Some("application/json".to_string()),
                    text,
                    meta: None,
                },
            ])),
            Some(Err(e)) => Err(ErrorData::internal_error(e.to_string(), None)),
            None => Err(ErrorData::invalid_params(
                format!("Unknown resource URI: {}", request.uri),
                None,
            )),
        }
    }
}
