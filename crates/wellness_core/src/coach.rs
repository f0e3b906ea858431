//! Scripted coach replies.
//!
//! Messages are matched against an ordered keyword table; the first rule with
//! any keyword contained in the lower-cased message wins. Unmatched messages
//! get a random fallback. Both the fallback pick and the simulated thinking
//! delay are intentionally random.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::profile::UserProfile;
use crate::{WellnessError, WellnessResult};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    pub fn coach(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    fn new(text: String, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            is_user,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// `{goal}` and `{diet}` are substituted from the profile.
    pub template: &'static str,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "workout",
        keywords: &["workout", "exercise"],
        template: "Based on your fitness goal of {goal}, I recommend focusing on a balanced routine. Here's what I suggest:\n\n\
1. **Strength Training** (3x/week): Focus on compound movements like squats, deadlifts, and push-ups\n\
2. **Cardio** (2-3x/week): Mix high-intensity intervals with steady-state cardio\n\
3. **Flexibility** (daily): 10-15 minutes of stretching or yoga\n\n\
Start with 3-4 exercises per session, 3 sets of 8-12 reps. Remember to warm up before and cool down after each workout. Would you like me to create a specific plan for today?",
    },
    Rule {
        name: "motivation",
        keywords: &["motivation", "motivated"],
        template: "I understand staying motivated can be challenging! Here are some proven strategies:\n\n\
- **Set Small, Achievable Goals**: Break your big goal into weekly milestones\n\
- **Track Your Progress**: Celebrate small wins along the way\n\
- **Find an Accountability Partner**: Share your journey with someone\n\
- **Create an Energizing Playlist**: Music can boost your workout performance\n\
- **Use Visual Reminders**: Set your workout clothes out the night before\n\n\
Remember, motivation gets you started, but habit keeps you going. What's your biggest motivation challenge right now?",
    },
    Rule {
        name: "nutrition",
        keywords: &["nutrition", "diet", "food"],
        template: "Great question about nutrition! Based on your dietary preference ({diet}), here are some key recommendations:\n\n\
- **Balanced Meals**: Include protein, complex carbs, healthy fats, and vegetables\n\
- **Timing**: Eat every 3-4 hours to maintain energy levels\n\
- **Hydration**: Aim for 8-10 glasses of water daily\n\
- **Whole Foods**: Choose minimally processed options when possible\n\n\
For your goal of {goal}, focus on:\n\
- Adequate protein (0.8-1g per kg body weight)\n\
- Pre-workout: Light carbs for energy\n\
- Post-workout: Protein and carbs for recovery\n\n\
Would you like specific meal ideas or help planning your daily nutrition?",
    },
    Rule {
        name: "recipe",
        keywords: &["recipe", "meal"],
        template: "Here are some quick, healthy recipe ideas perfect for your lifestyle:\n\n\
- **Breakfast**: Overnight oats with berries and nuts\n\
- **Lunch**: Greek yogurt bowl with vegetables and hummus\n\
- **Dinner**: Grilled chicken/fish with roasted vegetables\n\
- **Snack**: Apple slices with almond butter\n\n\
**5-Minute Meals:**\n\
- Veggie-packed smoothie\n\
- Avocado toast with egg\n\
- Greek yogurt parfait\n\
- Protein-rich salad wrap\n\n\
All of these align with your {diet} dietary preference. Would you like the detailed recipe for any of these?",
    },
    Rule {
        name: "weight",
        keywords: &["weight", "lose", "gain"],
        template: "Weight management is about creating sustainable habits. Here's a balanced approach:\n\n\
- **Track Consistently**: Monitor your progress weekly, not daily\n\
- **Combine Cardio + Strength**: Both are important for body composition\n\
- **Portion Control**: Use smaller plates, eat slowly, listen to hunger cues\n\
- **Quality Sleep**: 7-9 hours supports healthy metabolism\n\
- **Manage Stress**: High stress can impact weight management\n\n\
For your goal of {goal}, focus on:\n\
- Creating a moderate calorie deficit/surplus\n\
- Prioritizing whole foods\n\
- Staying consistent with your routine\n\n\
Remember, healthy weight changes happen gradually. Aim for 0.5-1 kg per week for sustainable results. What specific challenges are you facing?",
    },
    Rule {
        name: "time",
        keywords: &["time", "busy", "schedule"],
        template: "I totally understand the time crunch! Here are efficient workout strategies:\n\n\
- **HIIT Workouts**: 15-20 minutes of high-intensity intervals\n\
- **Bodyweight Exercises**: No equipment needed - squats, push-ups, planks\n\
- **Daily Movement**: Take stairs, walk during calls, park farther away\n\
- **Morning Routines**: 10-15 minutes before your day starts\n\n\
**Quick Workout Ideas:**\n\
- 7-minute bodyweight circuit\n\
- Tabata training (4 minutes!)\n\
- Lunchtime walk\n\
- Desk exercises throughout the day\n\n\
The key is consistency over duration. Even 10 minutes daily is better than 2 hours once a week. What time of day works best for you?",
    },
];

pub const FALLBACK_REPLIES: &[&str] = &[
    "That's a great question! I'm here to help you achieve your fitness goals. Could you tell me more about what specific area you'd like to focus on?",
    "I'd love to help you with that! Whether it's about workouts, nutrition, or motivation, I'm here to guide you. What's your main concern right now?",
    "Thanks for reaching out! As your fitness coach, I can help you with personalized advice. What aspect of your health journey would you like to explore?",
    "I'm excited to help you on your fitness journey! Tell me more about what you're looking to achieve or what challenges you're facing.",
    "Great to hear from you! I'm here to provide personalized guidance based on your goals and preferences. What would you like to know more about?",
];

/// First matching rule for `message`, if any.
pub fn match_rule(message: &str) -> Option<&'static Rule> {
    let lowered = message.to_lowercase();
    RULES.iter().find(|r| r.matches(&lowered))
}

fn render(template: &str, profile: Option<&UserProfile>) -> String {
    let (goal, diet) = match profile {
        Some(p) => (p.fitness_goal.phrase(), p.dietary_preference.as_str().to_string()),
        None => ("general fitness".to_string(), "current".to_string()),
    };
    template.replace("{goal}", &goal).replace("{diet}", &diet)
}

#[derive(Clone, Debug)]
pub struct Coach {
    delay: Duration,
    jitter: Duration,
}

impl Default for Coach {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Coach {
    pub fn new(delay: Duration, jitter: Duration) -> Self {
        Self { delay, jitter }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.coach_delay, config.coach_jitter)
    }

    pub fn welcome(&self, profile: Option<&UserProfile>) -> ChatMessage {
        let name = profile.map(|p| p.name.as_str()).unwrap_or("there");
        ChatMessage::coach(format!(
            "Hello {name}! I'm your fitness coach. I'm here to help you with workout plans, nutrition advice, motivation, and answer any health-related questions you might have. What would you like to talk about today?"
        ))
    }

    /// Reply text without any delay.
    pub fn respond<R: Rng>(&self, message: &str, profile: Option<&UserProfile>, rng: &mut R) -> String {
        match match_rule(message) {
            Some(rule) => {
                tracing::debug!(rule = rule.name, "coach rule matched");
                render(rule.template, profile)
            }
            None => FALLBACK_REPLIES
                .choose(rng)
                .copied()
                .unwrap_or(FALLBACK_REPLIES[0])
                .to_string(),
        }
    }

    /// `delay` plus a uniform extra in `[0, jitter]`.
    pub fn thinking_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.delay;
        }
        self.delay + Duration::from_millis(rng.random_range(0..=jitter_ms))
    }

    /// Waits out the thinking delay, then returns the coach's message.
    pub async fn reply(
        &self,
        message: &str,
        profile: Option<&UserProfile>,
    ) -> WellnessResult<ChatMessage> {
        if message.trim().is_empty() {
            return Err(WellnessError::Validation("message must not be empty".into()));
        }
        // ThreadRng is not Send; keep it out of the await.
        let (text, delay) = {
            let mut rng = rand::rng();
            (
                self.respond(message, profile, &mut rng),
                self.thinking_delay(&mut rng),
            )
        };
        tokio::time::sleep(delay).await;
        Ok(ChatMessage::coach(text))
    }
}
