use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable overriding `coach.base_url`
pub const API_URL_ENV: &str = "FORM_COACH_API_URL";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coach: CoachConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub trainer: TrainerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CoachConfig {
    /// Coaching backend base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzerConfig {
    /// Minimum confidence for the landmarks an exercise reads.
    /// 0.0 lets zero-confidence (absent) landmarks through as y = 0.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
    /// EMA weight of the newest frame, 1.0 = no smoothing
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrainerConfig {
    /// Exercise id selected at startup (e.g. "push-ups")
    #[serde(default = "default_exercise")]
    pub exercise: String,
    #[serde(default = "default_target_reps")]
    pub target_reps: u32,
    #[serde(default = "default_camera_width")]
    pub camera_width: u32,
    #[serde(default = "default_camera_height")]
    pub camera_height: u32,
}

fn default_base_url() -> String { "http://localhost:8000".to_string() }
fn default_request_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 5 }
fn default_min_confidence() -> f32 { 0.3 }
fn default_smoothing() -> f32 { 1.0 }
fn default_exercise() -> String { "push-ups".to_string() }
fn default_target_reps() -> u32 { 10 }
fn default_camera_width() -> u32 { 640 }
fn default_camera_height() -> u32 { 480 }

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            smoothing: default_smoothing(),
        }
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            exercise: default_exercise(),
            target_reps: default_target_reps(),
            camera_width: default_camera_width(),
            camera_height: default_camera_height(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).context("Invalid config")?;
        config.coach.base_url = config.coach.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid,
    /// then applies environment overrides
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let mut config = if path.exists() {
            match Self::load(path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!(error = %e, "config unreadable, using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        config.apply_env(std::env::var(API_URL_ENV).ok().as_deref());
        config
    }

    fn apply_env(&mut self, api_url: Option<&str>) {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.coach.base_url = url.trim_end_matches('/').to_string();
        }
    }
}
