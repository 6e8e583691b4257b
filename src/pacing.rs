//! Human-like posting cadence.
//!
//! A run may be skipped entirely ("off day"), and each post may be preceded
//! by a randomized delay. Both are disabled by default.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Probability in [0, 1] that a whole run is skipped (default: 0.0)
    pub off_day_chance: f64,

    /// Lower bound of the delay before each post, e.g. "4h" (default: "0s")
    pub post_delay_min: String,

    /// Upper bound of the delay before each post, e.g. "8h" (default: "0s")
    pub post_delay_max: String,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            off_day_chance: 0.0,
            post_delay_min: "0s".to_string(),
            post_delay_max: "0s".to_string(),
        }
    }
}

/// Parse interval string like "4h", "30m", "1d", "90s" or raw seconds.
pub fn parse_interval(s: &str) -> Result<u64, String> {
    let s = s.trim().to_lowercase();

    let (value, unit, scale) = if let Some(hours) = s.strip_suffix('h') {
        (hours, "hours", 3600)
    } else if let Some(minutes) = s.strip_suffix('m') {
        (minutes, "minutes", 60)
    } else if let Some(days) = s.strip_suffix('d') {
        (days, "days", 86400)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, "seconds", 1)
    } else {
        return s
            .parse::<u64>()
            .map_err(|_| format!("Invalid interval: {}. Use format like '4h', '30m', '1d'", s));
    };

    value
        .parse::<u64>()
        .map_err(|_| format!("Invalid {}: {}", unit, value))?
        .checked_mul(scale)
        .ok_or_else(|| format!("Interval too large: {}", s))
}

/// Format a delay for log output.
pub fn format_interval(secs: u64) -> String {
    if secs >= 86400 && secs % 86400 == 0 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 && secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Resolved pacing policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacer {
    off_day_chance: f64,
    delay_min_secs: u64,
    delay_max_secs: u64,
}

impl Pacer {
    pub fn from_config(config: &PacingConfig) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&config.off_day_chance) {
            return Err(ConfigError::Invalid(format!(
                "pacing.off_day_chance must be between 0 and 1, got {}",
                config.off_day_chance
            )));
        }

        let delay_min_secs = parse_interval(&config.post_delay_min)
            .map_err(|e| ConfigError::Invalid(format!("pacing.post_delay_min: {}", e)))?;
        let delay_max_secs = parse_interval(&config.post_delay_max)
            .map_err(|e| ConfigError::Invalid(format!("pacing.post_delay_max: {}", e)))?;

        if delay_min_secs > delay_max_secs {
            return Err(ConfigError::Invalid(format!(
                "pacing.post_delay_min ({}) exceeds pacing.post_delay_max ({})",
                config.post_delay_min, config.post_delay_max
            )));
        }

        Ok(Self {
            off_day_chance: config.off_day_chance,
            delay_min_secs,
            delay_max_secs,
        })
    }

    /// No off days, no delays.
    pub fn disabled() -> Self {
        Self {
            off_day_chance: 0.0,
            delay_min_secs: 0,
            delay_max_secs: 0,
        }
    }

    pub fn is_off_day<R: Rng>(&self, rng: &mut R) -> bool {
        self.off_day_chance > 0.0 && rng.gen::<f64>() < self.off_day_chance
    }

    pub fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.delay_max_secs == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs(rng.gen_range(self.delay_min_secs..=self.delay_max_secs))
    }

    /// Sleep for a randomized delay before posting. The wait is not
    /// interruptible.
    pub async fn wait_before_post(&self, url: &str) {
        let delay = self.next_delay(&mut rand::thread_rng());
        if delay.is_zero() {
            return;
        }

        tracing::info!(
            url = %url,
            delay = %format_interval(delay.as_secs()),
            "Waiting before posting"
        );
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("4h").unwrap(), 14400);
        assert_eq!(parse_interval("30m").unwrap(), 1800);
        assert_eq!(parse_interval("1d").unwrap(), 86400);
        assert_eq!(parse_interval("60s").unwrap(), 60);
        assert_eq!(parse_interval("3600").unwrap(), 3600);
        assert_eq!(parse_interval(" 8H ").unwrap(), 28800);
        assert!(parse_interval("soon").is_err());
    }

    #[test]
    fn test_parse_interval_overflow_is_an_error() {
        assert_eq!(
            parse_interval("9999999999999999h"),
            Err("Interval too large: 9999999999999999h".to_string())
        );
        assert!(parse_interval("999999999999999999d").is_err());
        assert_eq!(parse_interval("18446744073709551615s").unwrap(), u64::MAX);
    }

    #[test]
    fn test_huge_delay_rejected_by_config() {
        let config = PacingConfig {
            post_delay_max: "9999999999999999h".into(),
            ..Default::default()
        };
        assert!(matches!(
            Pacer::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(14400), "4h");
        assert_eq!(format_interval(1800), "30m");
        assert_eq!(format_interval(86400), "1d");
        assert_eq!(format_interval(90), "90s");
    }

    #[test]
    fn test_default_config_is_disabled() {
        let pacer = Pacer::from_config(&PacingConfig::default()).unwrap();
        assert_eq!(pacer, Pacer::disabled());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = PacingConfig {
            post_delay_min: "8h".into(),
            post_delay_max: "4h".into(),
            ..Default::default()
        };
        assert!(matches!(
            Pacer::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_chance() {
        let config = PacingConfig {
            off_day_chance: 1.5,
            ..Default::default()
        };
        assert!(Pacer::from_config(&config).is_err());
    }

    #[test]
    fn test_delay_within_bounds() {
        let config = PacingConfig {
            post_delay_min: "4h".into(),
            post_delay_max: "8h".into(),
            ..Default::default()
        };
        let pacer = Pacer::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let delay = pacer.next_delay(&mut rng).as_secs();
            assert!((14400..=28800).contains(&delay));
        }
    }

    #[test]
    fn test_off_day_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!Pacer::disabled().is_off_day(&mut rng));

        let always = Pacer::from_config(&PacingConfig {
            off_day_chance: 1.0,
            ..Default::default()
        })
        .unwrap();
        assert!(always.is_off_day(&mut rng));
    }
}
