// Copyright 2026 Bagwise Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_TEMPLATE: &str = include_str!("../config-templates/default.toml");

/// Constants used by the impact calculator formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub weeks_per_year: f64,
    pub decomposition_years_per_bag: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            weeks_per_year: 52.0,
            decomposition_years_per_bag: 1000.0,
        }
    }
}

/// Chatbot timing and feedback behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    pub reply_delay_ms: u64,
    pub nudge_delay_secs: u64,
    pub nudge_min_messages: usize,
    pub nudge_ratio_threshold: f64,
    pub feedback_suffix_after: u32,
    pub learning_hints: bool,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 600,
            nudge_delay_secs: 30,
            nudge_min_messages: 6,
            nudge_ratio_threshold: 0.4,
            feedback_suffix_after: 2,
            learning_hints: false,
        }
    }
}

/// Statistic counter animation timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub tick_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16,
        }
    }
}

/// Main configuration for bagwise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub chatbot: ChatbotConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

impl Config {
    /// Load configuration from config.toml file
    /// First tries to load from system config directory, falls back to embedded template
    pub fn load() -> Result<Self> {
        let config_path = crate::storage::get_system_config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
            Ok(config)
        } else {
            let config = Self::from_template()?;

            if let Some(parent) = config_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&config_path, DEFAULT_TEMPLATE)?;
            tracing::debug!(path = %config_path.display(), "Wrote default configuration");

            Ok(config)
        }
    }

    /// Parse the embedded default template
    pub fn from_template() -> Result<Self> {
        toml::from_str(DEFAULT_TEMPLATE).context("Embedded configuration template is invalid")
    }
}
