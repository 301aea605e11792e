//! Congratulatory message generation.
//!
//! Every generator is total: failures collapse to [`fallback_message`] so
//! the announcement flow never blocks on the remote service.

use crate::services::config::MessageConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait MessageGenerator {
    fn generate(&self, name: &str) -> String;
}

pub fn fallback_message(name: &str) -> String {
    format!("Congratulations, {}, on your win!", name)
}

pub fn build_prompt(name: &str, language: &str) -> String {
    format!(
        "Generate a short, professional yet energetic and fun congratulatory message for a person named \"{}\" who just won a company lucky draw. Keep it under 20 words. Use {}.",
        name, language
    )
}

/// Used when no API key is configured or `--offline` is set.
pub struct OfflineGenerator;

impl MessageGenerator for OfflineGenerator {
    fn generate(&self, name: &str) -> String {
        fallback_message(name)
    }
}

pub struct GeminiGenerator {
    api_key: String,
    model: String,
    endpoint: String,
    language: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Deserialize, Default)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Joined text of the first candidate, trimmed; `None` when empty.
    pub(crate) fn text(&self) -> Option<String> {
        let first = self.candidates.first()?;
        let joined: String = first
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl GeminiGenerator {
    pub fn new(api_key: String, cfg: &MessageConfig) -> Self {
        Self {
            api_key,
            model: cfg.model.clone(),
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            language: cfg.language.clone(),
            timeout: Duration::from_millis(cfg.timeout_ms),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    fn try_generate(&self, name: &str) -> anyhow::Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(name, &self.language)),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                top_p: 0.95,
            },
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let resp = client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?
            .error_for_status()?;
        let parsed: GenerateResponse = resp.json()?;
        parsed
            .text()
            .ok_or_else(|| anyhow::anyhow!("empty response from {}", self.model))
    }
}

impl MessageGenerator for GeminiGenerator {
    fn generate(&self, name: &str) -> String {
        match self.try_generate(name) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("message generation failed, using fallback: {:#}", e);
                fallback_message(name)
            }
        }
    }
}

pub fn generator_for(cfg: &MessageConfig, offline: bool) -> Box<dyn MessageGenerator> {
    match (&cfg.api_key, offline) {
        (Some(key), false) => Box::new(GeminiGenerator::new(key.clone(), cfg)),
        _ => {
            log::info!("no message service configured; using fallback messages");
            Box::new(OfflineGenerator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_stable_for_same_name() {
        assert_eq!(fallback_message("Ann"), fallback_message("Ann"));
        assert_eq!(fallback_message("Ann"), "Congratulations, Ann, on your win!");
    }

    #[test]
    fn offline_generator_returns_fallback() {
        assert_eq!(OfflineGenerator.generate("李華"), fallback_message("李華"));
    }

    #[test]
    fn prompt_names_winner_and_language() {
        let p = build_prompt("Bo", "English");
        assert!(p.contains("\"Bo\""));
        assert!(p.contains("Use English."));
        assert!(p.contains("under 20 words"));
    }

    #[test]
    fn response_text_joins_parts_and_trims() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  Well "},{"text":"done!\n"}]}}]}"#,
        )
        .expect("parse");
        assert_eq!(resp.text().as_deref(), Some("Well done!"));
    }

    #[test]
    fn empty_or_missing_text_is_none() {
        let empty: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .expect("parse");
        assert!(empty.text().is_none());
        let none: GenerateResponse = serde_json::from_str("{}").expect("parse");
        assert!(none.text().is_none());
    }

    #[test]
    fn unreachable_service_falls_back() {
        let cfg = MessageConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_ms: 500,
            ..MessageConfig::default()
        };
        let generator = GeminiGenerator::new("test-key".to_string(), &cfg);
        assert_eq!(generator.generate("Ann"), fallback_message("Ann"));
        assert_eq!(generator.generate("Ann"), fallback_message("Ann"));
    }

    #[test]
    fn url_strips_trailing_slash() {
        let cfg = MessageConfig {
            endpoint: "https://example.test/".to_string(),
            model: "m1".to_string(),
            ..MessageConfig::default()
        };
        let generator = GeminiGenerator::new("k".to_string(), &cfg);
        assert_eq!(
            generator.url(),
            "https://example.test/v1beta/models/m1:generateContent"
        );
    }

    #[test]
    fn generator_without_key_is_offline() {
        let cfg = MessageConfig::default();
        assert_eq!(generator_for(&cfg, false).generate("X"), fallback_message("X"));
        let keyed = MessageConfig {
            api_key: Some("k".to_string()),
            ..MessageConfig::default()
        };
        assert_eq!(generator_for(&keyed, true).generate("X"), fallback_message("X"));
    }
}
