use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_RATE_WINDOW_MINUTES: u64 = 15;
const DEFAULT_RATE_MAX_REQUESTS: u32 = 100;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Signing secret for session tokens. `None` leaves the server running
    /// but every login and guarded route answers 500.
    pub jwt_secret: Option<String>,
    pub port: u16,
    pub rate_window_minutes: u64,
    pub rate_max_requests: u32,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

/// Request quota for one client over a fixed window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub window: Duration,
    pub max_requests: u32,
}

impl RateLimitSettings {
    /// Time needed to earn back a single request slot.
    pub fn replenish_interval(&self) -> Duration {
        let per_request = self.window.as_millis() / u128::from(self.max_requests.max(1));
        Duration::from_millis(per_request.max(1) as u64)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            port: DEFAULT_PORT,
            rate_window_minutes: DEFAULT_RATE_WINDOW_MINUTES,
            rate_max_requests: DEFAULT_RATE_MAX_REQUESTS,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            rate_window_minutes: positive_or(
                env::var("RATE_TIME_LIMIT").ok(),
                DEFAULT_RATE_WINDOW_MINUTES,
            ),
            rate_max_requests: positive_or(
                env::var("RATE_REQUEST_LIMIT").ok(),
                DEFAULT_RATE_MAX_REQUESTS,
            ),
            allowed_origins: parse_origins(env::var("ALLOWED_ORIGINS").ok()),
        })
    }

    pub fn rate_limit(&self) -> RateLimitSettings {
        RateLimitSettings {
            window: Duration::from_secs(self.rate_window_minutes * 60),
            max_requests: self.rate_max_requests,
        }
    }
}

/// Parse a positive number, falling back to `default` for missing, malformed or zero values.
fn positive_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + PartialEq + Default,
{
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v != T::default())
        .unwrap_or(default)
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    raw.map(|v| {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_or_falls_back() {
        assert_eq!(positive_or::<u64>(None, 15), 15);
        assert_eq!(positive_or::<u64>(Some("abc".into()), 15), 15);
        assert_eq!(positive_or::<u64>(Some("0".into()), 15), 15);
        assert_eq!(positive_or::<u64>(Some(" 30 ".into()), 15), 30);
    }

    #[test]
    fn test_parse_origins() {
        assert!(parse_origins(None).is_empty());
        assert_eq!(
            parse_origins(Some("http://a.test, http://b.test,".into())),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_default_rate_limit() {
        let limit = Config::default().rate_limit();
        assert_eq!(limit.window, Duration::from_secs(15 * 60));
        assert_eq!(limit.max_requests, 100);
        // 900_000ms / 100 requests
        assert_eq!(limit.replenish_interval(), Duration::from_millis(9_000));
    }
}
