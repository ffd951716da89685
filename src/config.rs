//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export TIMEZONE="EST5EDT"
//! export ZODIAC_TABLE="data/zodiac.csv"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TIMEZONE` - IANA zone used to decide "today" (default: `EST5EDT`)
//! - `ZODIAC_TABLE` - Path to the zodiac CSV (default: `data/zodiac.csv`)
//! - `LEAP_DAY_POLICY` - `skip` or `feb28` (default: `skip`)
//! - `MOON_PHASE_BASE_URL` - Moon phase site (default: `https://www.moongiant.com/phase`)
//! - `NOTABLE_PEOPLE_BASE_URL` - Notable people site (default: `https://www.famousbirthdays.com`)
//! - `NOTABLE_PEOPLE_LIMIT` - People listed per birthday (default: 10)
//! - `FETCH_TIMEOUT_SECS` - Per-request timeout for scraped facts (default: 10)
//! - `FETCH_RETRIES` - Extra attempts on transient fetch errors (default: 2)
//! - `BEHIND_PROXY` - Rate limit on `X-Forwarded-For` / `X-Real-IP` (default: `false`)

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::env;
use std::time::Duration;

use crate::domain::calendar::LeapDayPolicy;

pub const DEFAULT_TIMEZONE: &str = "EST5EDT";
pub const DEFAULT_MOON_PHASE_BASE_URL: &str = "https://www.moongiant.com/phase";
pub const DEFAULT_NOTABLE_PEOPLE_BASE_URL: &str = "https://www.famousbirthdays.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// IANA time zone name; "today" is taken in this zone.
    pub timezone: String,
    pub zodiac_table_path: String,
    pub leap_day_policy: LeapDayPolicy,
    pub moon_phase_base_url: String,
    pub notable_people_base_url: String,
    pub notable_people_limit: usize,
    pub fetch_timeout_secs: u64,
    pub fetch_retries: usize,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            zodiac_table_path: "data/zodiac.csv".to_string(),
            leap_day_policy: LeapDayPolicy::default(),
            moon_phase_base_url: DEFAULT_MOON_PHASE_BASE_URL.to_string(),
            notable_people_base_url: DEFAULT_NOTABLE_PEOPLE_BASE_URL.to_string(),
            notable_people_limit: 10,
            fetch_timeout_secs: 10,
            fetch_retries: 2,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `LEAP_DAY_POLICY` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let leap_day_policy = match env::var("LEAP_DAY_POLICY") {
            Ok(v) => v
                .parse::<LeapDayPolicy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid LEAP_DAY_POLICY")?,
            Err(_) => defaults.leap_day_policy,
        };

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            timezone: env::var("TIMEZONE").unwrap_or(defaults.timezone),
            zodiac_table_path: env::var("ZODIAC_TABLE").unwrap_or(defaults.zodiac_table_path),
            leap_day_policy,
            moon_phase_base_url: env::var("MOON_PHASE_BASE_URL")
                .unwrap_or(defaults.moon_phase_base_url),
            notable_people_base_url: env::var("NOTABLE_PEOPLE_BASE_URL")
                .unwrap_or(defaults.notable_people_base_url),
            notable_people_limit: parse_var("NOTABLE_PEOPLE_LIMIT")
                .unwrap_or(defaults.notable_people_limit),
            fetch_timeout_secs: parse_var("FETCH_TIMEOUT_SECS")
                .unwrap_or(defaults.fetch_timeout_secs),
            fetch_retries: parse_var("FETCH_RETRIES").unwrap_or(defaults.fetch_retries),
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `timezone` is not a known IANA zone
    /// - a base URL is not an absolute http(s) URL
    /// - `notable_people_limit` or `fetch_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.time_zone()?;

        for (name, value) in [
            ("MOON_PHASE_BASE_URL", &self.moon_phase_base_url),
            ("NOTABLE_PEOPLE_BASE_URL", &self.notable_people_base_url),
        ] {
            let parsed = url::Url::parse(value)
                .with_context(|| format!("{name} is not a valid URL: '{value}'"))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!("{name} must use http or https, got '{value}'");
            }
        }

        if self.notable_people_limit == 0 {
            anyhow::bail!("NOTABLE_PEOPLE_LIMIT must be at least 1");
        }

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }

        if self.fetch_retries > 10 {
            anyhow::bail!(
                "FETCH_RETRIES is too large (max: 10), got {}",
                self.fetch_retries
            );
        }

        Ok(())
    }

    /// Parsed reference time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if `timezone` is not a known IANA zone.
    pub fn time_zone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("TIMEZONE '{}' is not valid: {}", self.timezone, e))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Time zone: {}", self.timezone);
        tracing::info!("  Zodiac table: {}", self.zodiac_table_path);
        tracing::info!("  Leap day policy: {}", self.leap_day_policy);
        tracing::info!("  Moon phase source: {}", self.moon_phase_base_url);
        tracing::info!(
            "  Notable people source: {} (limit {})",
            self.notable_people_base_url,
            self.notable_people_limit
        );
        tracing::info!(
            "  Fetch timeout: {}s, retries: {}",
            self.fetch_timeout_secs,
            self.fetch_retries
        );
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
