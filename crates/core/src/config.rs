use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub api: ApiConfig,
    pub registration: RegistrationConfig,
    pub submit: SubmitConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `FOLLOWGRAPH_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("FOLLOWGRAPH_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            api: ApiConfig::from_env_profiled(p),
            registration: RegistrationConfig::from_env_profiled(p),
            submit: SubmitConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  api:          base_url={}, timeout={}s", self.api.base_url, self.api.timeout_secs);
        tracing::info!("  registration: reg_no={}, name={}", self.registration.reg_no, self.registration.name);
        tracing::info!(
            "  submit:       max_attempts={}, retry_delay={}ms",
            self.submit.max_attempts,
            self.submit.retry_delay_ms
        );
    }
}

// ── Task API ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            base_url: profiled_env_or(p, "API_BASE_URL", "https://bfhldevapigw.healthrx.co.in/hiring"),
            timeout_secs: profiled_env_u64(p, "HTTP_TIMEOUT_SECS", 30),
        }
    }

    /// Endpoint that hands out task descriptors.
    pub fn generate_url(&self) -> String {
        format!("{}/generateWebhook", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── Registration identity ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

impl RegistrationConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            name: profiled_env_or(p, "REGISTRATION_NAME", "John Doe"),
            reg_no: profiled_env_or(p, "REGISTRATION_REG_NO", "REG12347"),
            email: profiled_env_or(p, "REGISTRATION_EMAIL", "john@example.com"),
        }
    }
}

// ── Result submission ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

impl SubmitConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            max_attempts: profiled_env_u32(p, "SUBMIT_MAX_ATTEMPTS", 4),
            retry_delay_ms: profiled_env_u64(p, "SUBMIT_RETRY_DELAY_MS", 1000),
        }
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}
