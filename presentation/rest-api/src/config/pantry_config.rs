use std::env;

use business::domain::policy::PantryPolicy;

/// Pantry behaviour the host may tune.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryConfig {
    pub policy: PantryPolicy,
    /// Default for new sessions when the request does not say.
    pub seed_sample_data: bool,
}

impl PantryConfig {
    /// Environment variables:
    /// - PANTRY_DEFAULT_EXPIRY_DAYS: expiry offset for proposed restocks (default: 7)
    /// - PANTRY_EXPIRING_SOON_DAYS: alert window in days (default: 3)
    /// - PANTRY_SEED_SAMPLE_DATA: pre-fill new sessions (default: true)
    ///
    /// Unparseable or negative values keep the default.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut policy = PantryPolicy::default();
        if let Some(days) = var("PANTRY_DEFAULT_EXPIRY_DAYS").and_then(|v| parse_days(&v)) {
            policy.default_expiry_days = days;
        }
        if let Some(days) = var("PANTRY_EXPIRING_SOON_DAYS").and_then(|v| parse_days(&v)) {
            policy.expiring_soon_days = days;
        }
        let seed_sample_data = var("PANTRY_SEED_SAMPLE_DATA")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            policy,
            seed_sample_data,
        }
    }
}

fn parse_days(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|days| *days >= 0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
