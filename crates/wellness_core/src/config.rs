use std::time::Duration;

use crate::WellnessError;

pub const DEFAULT_COACH_DELAY_MS: u64 = 1000;
pub const DEFAULT_COACH_JITTER_MS: u64 = 2000;
pub const DEFAULT_WATER_GOAL: u32 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Minimum simulated thinking time before a coach reply.
    pub coach_delay: Duration,
    /// Upper bound of the random extra thinking time.
    pub coach_jitter: Duration,
    /// Daily water goal in glasses.
    pub water_goal: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coach_delay: Duration::from_millis(DEFAULT_COACH_DELAY_MS),
            coach_jitter: Duration::from_millis(DEFAULT_COACH_JITTER_MS),
            water_goal: DEFAULT_WATER_GOAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, WellnessError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration through `get` so tests never touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WellnessError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let delay_ms = parse_or(&mut get, "WELLNESS_COACH_DELAY_MS", DEFAULT_COACH_DELAY_MS)?;
        let jitter_ms = parse_or(&mut get, "WELLNESS_COACH_JITTER_MS", DEFAULT_COACH_JITTER_MS)?;
        let water_goal = parse_or(&mut get, "WELLNESS_WATER_GOAL", DEFAULT_WATER_GOAL)?;
        if water_goal == 0 {
            return Err(WellnessError::Config(
                "WELLNESS_WATER_GOAL must be positive".into(),
            ));
        }
        Ok(Self {
            coach_delay: Duration::from_millis(delay_ms),
            coach_jitter: Duration::from_millis(jitter_ms),
            water_goal,
        })
    }
}

fn parse_or<F, T>(get: &mut F, key: &str, default: T) -> Result<T, WellnessError>
where
    F: FnMut(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| WellnessError::Config(format!("{key} is not a valid number: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults_when_unset() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "WELLNESS_COACH_DELAY_MS" => Some("0".into()),
            "WELLNESS_COACH_JITTER_MS" => Some(" 250 ".into()),
            "WELLNESS_WATER_GOAL" => Some("10".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.coach_delay, Duration::ZERO);
        assert_eq!(cfg.coach_jitter, Duration::from_millis(250));
        assert_eq!(cfg.water_goal, 10);
    }

    #[test]
    fn from_env_rejects_garbage() {
        let get = |k: &str| match k {
            "WELLNESS_COACH_DELAY_MS" => Some("soon".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(matches!(res, Err(WellnessError::Config(_))));
    }

    #[test]
    fn from_env_rejects_zero_water_goal() {
        let get = |k: &str| (k == "WELLNESS_WATER_GOAL").then(|| "0".to_string());
        assert!(Config::from_env_with(get).is_err());
    }
}
