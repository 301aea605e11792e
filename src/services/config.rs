use crate::domain::constants::{
    APP_DIR, DEFAULT_ENDPOINT, DEFAULT_FRAME_MS, DEFAULT_LANGUAGE, DEFAULT_MESSAGE_TIMEOUT_MS,
    DEFAULT_MODEL,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub message: MessageConfig,
    #[serde(default)]
    pub wheel: WheelConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            language: default_language(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WheelConfig {
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_MESSAGE_TIMEOUT_MS
}

fn default_frame_ms() -> u64 {
    DEFAULT_FRAME_MS
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join(APP_DIR)
        .join("config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_path()?;
    let mut cfg = if path.exists() {
        let raw = std::fs::read_to_string(&path)?;
        parse_config(&raw)?
    } else {
        ConfigFile::default()
    };
    apply_env(&mut cfg, |k| std::env::var(k).ok());
    Ok(cfg)
}

pub fn parse_config(raw: &str) -> anyhow::Result<ConfigFile> {
    Ok(toml::from_str(raw)?)
}

/// Environment wins over the file for the API key; blank values are ignored.
pub fn apply_env(cfg: &mut ConfigFile, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(key) = API_KEY_VARS
        .iter()
        .filter_map(|k| lookup(*k))
        .find(|v| !v.trim().is_empty())
    {
        cfg.message.api_key = Some(key);
    }
    if cfg
        .message
        .api_key
        .as_deref()
        .map(|k| k.trim().is_empty())
        .unwrap_or(false)
    {
        cfg.message.api_key = None;
    }
}

/// Copy safe to print: the API key is reduced to a marker.
pub fn redacted(cfg: &ConfigFile) -> ConfigFile {
    let mut out = cfg.clone();
    if out.message.api_key.is_some() {
        out.message.api_key = Some("<set>".to_string());
    }
    out
}
