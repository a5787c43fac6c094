//! Runtime configuration.
//!
//! Tempo and the rhythm pattern are fixed and deliberately not configurable;
//! see `sequencing::pattern`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attenuation applied to the sum of all voices.
pub const DEFAULT_MASTER_GAIN: f32 = 0.8;

/// Voices that can be in flight between the control side and the renderer.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Model used for encouragement text unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
const MODEL_VAR: &str = "TABLA_GEMINI_MODEL";

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub master_gain: f32,
    pub queue_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            master_gain: DEFAULT_MASTER_GAIN,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl GeminiConfig {
    /// Read `GEMINI_API_KEY` (or `API_KEY`) and `TABLA_GEMINI_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            api_key: API_KEY_VARS.into_iter().find_map(|name| non_empty(name)),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn engine_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.master_gain, 0.8);
        assert_eq!(config.queue_capacity, 256);
    }

    #[test]
    fn prefers_gemini_key_over_generic_key() {
        let config = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "a"), ("API_KEY", "b")]));
        assert_eq!(config.api_key.as_deref(), Some("a"));

        let config = GeminiConfig::from_lookup(lookup(&[("API_KEY", "b")]));
        assert_eq!(config.api_key.as_deref(), Some("b"));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  "), (MODEL_VAR, "")]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn model_override() {
        let config = GeminiConfig::from_lookup(lookup(&[(MODEL_VAR, "gemini-pro")]));
        assert_eq!(config.model, "gemini-pro");
    }
}
