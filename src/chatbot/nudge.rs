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

use crate::chatbot::types::InteractionRecord;
use crate::config::ChatbotConfig;

pub const NUDGE_MESSAGE: &str = "I notice I haven't understood some of your questions. \
Would you share some feedback on how I could be more helpful?";

/// Thresholds for asking the user for feedback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NudgePolicy {
    pub min_messages: usize,
    pub ratio_threshold: f64,
}

impl From<&ChatbotConfig> for NudgePolicy {
    fn from(config: &ChatbotConfig) -> Self {
        Self {
            min_messages: config.nudge_min_messages,
            ratio_threshold: config.nudge_ratio_threshold,
        }
    }
}

/// Fraction of logged messages the bot did not understand. Zero for an empty log.
pub fn not_understood_ratio(log: &[InteractionRecord]) -> f64 {
    if log.is_empty() {
        return 0.0;
    }
    let missed = log.iter().filter(|record| !record.understood).count();
    missed as f64 / log.len() as f64
}

/// True once enough messages are logged and too many of them went unanswered
pub fn should_nudge_for_feedback(log: &[InteractionRecord], policy: &NudgePolicy) -> bool {
    log.len() >= policy.min_messages && not_understood_ratio(log) > policy.ratio_threshold
}
