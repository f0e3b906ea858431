//! Shared application state.
//!
//! One `AppSnapshot` lives behind an async `RwLock<Arc<_>>`. Readers get an
//! `Arc` clone and never observe later writes; every setter builds a new
//! snapshot and swaps it in.

use std::sync::Arc;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::WellnessResult;
use crate::coach::ChatMessage;
use crate::profile::UserProfile;
use crate::progress::{ProgressEntry, ProgressLog};
use crate::tips::DailyTip;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Fitness,
    Nutrition,
    Progress,
    Coach,
    Profile,
}

wire_tokens!(View, "view", {
    Dashboard => "dashboard",
    Fitness => "fitness",
    Nutrition => "nutrition",
    Progress => "progress",
    Coach => "coach",
    Profile => "profile",
});

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct AppSnapshot {
    pub profile: Option<UserProfile>,
    pub view: View,
    pub progress: ProgressLog,
    pub chat: Vec<ChatMessage>,
    /// Glasses of water logged today.
    pub water_intake: u32,
    pub daily_tip: DailyTip,
}

#[derive(Debug, Default)]
pub struct AppState {
    inner: RwLock<Arc<AppSnapshot>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: AppSnapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub async fn snapshot(&self) -> Arc<AppSnapshot> {
        self.inner.read().await.clone()
    }

    /// Applies `f` to a copy of the current snapshot and publishes the copy
    /// only when `f` succeeds.
    async fn update<T, F>(&self, f: F) -> WellnessResult<T>
    where
        F: FnOnce(&mut AppSnapshot) -> WellnessResult<T>,
    {
        let mut guard = self.inner.write().await;
        let mut next = AppSnapshot::clone(&guard);
        let out = f(&mut next)?;
        *guard = Arc::new(next);
        Ok(out)
    }

    /// Infallible form of `update`.
    async fn modify<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut AppSnapshot) -> T,
    {
        let mut guard = self.inner.write().await;
        let mut next = AppSnapshot::clone(&guard);
        let out = f(&mut next);
        *guard = Arc::new(next);
        out
    }

    pub async fn set_profile(&self, profile: UserProfile) {
        self.modify(|s| {
            tracing::debug!(id = %profile.id, "profile replaced");
            s.profile = Some(profile);
        })
        .await
    }

    /// Stores a freshly registered profile and, when the chat is still
    /// empty, the coach's welcome message. Returns whether the welcome was
    /// stored.
    pub async fn register_profile(&self, profile: UserProfile, welcome: ChatMessage) -> bool {
        self.modify(|s| {
            tracing::debug!(id = %profile.id, "profile registered");
            s.profile = Some(profile);
            let greet = s.chat.is_empty();
            if greet {
                s.chat.push(welcome);
            }
            greet
        })
        .await
    }

    /// Logs out: drops the profile and the conversation.
    pub async fn clear_profile(&self) -> bool {
        self.modify(|s| {
            let had = s.profile.take().is_some();
            s.chat.clear();
            tracing::debug!(had_profile = had, "profile cleared");
            had
        })
        .await
    }

    pub async fn set_view(&self, view: View) {
        self.modify(|s| {
            tracing::debug!(from = %s.view, to = %view, "view changed");
            s.view = view;
        })
        .await
    }

    /// Returns the number of entries after the push.
    pub async fn add_progress_entry(&self, entry: ProgressEntry) -> WellnessResult<usize> {
        self.update(|s| {
            s.progress.push(entry)?;
            Ok(s.progress.len())
        })
        .await
    }

    /// Appends a question and its reply together so concurrent exchanges
    /// never interleave.
    pub async fn add_chat_exchange(&self, question: ChatMessage, reply: ChatMessage) {
        self.modify(|s| {
            s.chat.push(question);
            s.chat.push(reply);
        })
        .await
    }

    /// Returns the new glass count.
    pub async fn add_water_glass(&self) -> u32 {
        self.modify(|s| {
            s.water_intake = s.water_intake.saturating_add(1);
            s.water_intake
        })
        .await
    }

    pub async fn reset_water_intake(&self) {
        self.modify(|s| s.water_intake = 0).await
    }

    /// Rotates the tip if it was not picked on `today` and returns the tip
    /// now in effect.
    pub async fn refresh_daily_tip(&self, today: NaiveDate) -> DailyTip {
        self.modify(|s| {
            let mut rng = rand::rng();
            if s.daily_tip.refresh(today, &mut rng) {
                tracing::debug!(%today, "daily tip rotated");
            }
            s.daily_tip.clone()
        })
        .await
    }
}
