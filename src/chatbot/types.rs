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

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response category chosen for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatCategory {
    /// Comments about the bot itself
    Feedback,
    Greetings,
    /// Numbers and facts about plastic use
    Statistics,
    /// Tips for using fewer bags
    Reduce,
    /// Recycling and disposal
    Recycling,
    /// Local policy and landfill questions
    Singapore,
    Thanks,
    /// Nothing matched
    Default,
    /// Reply generation failed
    Error,
}

impl ChatCategory {
    /// Whether a match on this category counts as the bot understanding the message
    pub fn is_understood(&self) -> bool {
        matches!(
            self,
            ChatCategory::Feedback
                | ChatCategory::Greetings
                | ChatCategory::Statistics
                | ChatCategory::Reduce
                | ChatCategory::Recycling
                | ChatCategory::Singapore
        )
    }
}

impl std::fmt::Display for ChatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatCategory::Feedback => write!(f, "feedback"),
            ChatCategory::Greetings => write!(f, "greetings"),
            ChatCategory::Statistics => write!(f, "statistics"),
            ChatCategory::Reduce => write!(f, "reduce"),
            ChatCategory::Recycling => write!(f, "recycling"),
            ChatCategory::Singapore => write!(f, "singapore"),
            ChatCategory::Thanks => write!(f, "thanks"),
            ChatCategory::Default => write!(f, "default"),
            ChatCategory::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One line of the visible transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sent_at: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            sent_at: Utc::now(),
        }
    }
}

/// Log entry kept for every message passed to `respond`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub understood: bool,
    /// Unset until the message has been classified
    pub category: Option<ChatCategory>,
    /// The reply came from the error pool
    #[serde(default)]
    pub fallback: bool,
}

impl InteractionRecord {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            timestamp: Utc::now(),
            understood: false,
            category: None,
            fallback: false,
        }
    }

    /// Category the reply was actually drawn from
    pub fn reply_category(&self) -> ChatCategory {
        match self.category {
            Some(category) if !self.fallback => category,
            _ => ChatCategory::Error,
        }
    }

    /// Timestamp rendered as ISO 8601
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Counters derived from a session's interaction log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_messages: usize,
    pub understood: usize,
    pub not_understood: usize,
    pub not_understood_ratio: f64,
    pub feedback_messages: u32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("no responses configured for category '{0}'")]
    MissingPool(ChatCategory),
    #[error("response pool for category '{0}' is empty")]
    EmptyPool(ChatCategory),
    #[error("interaction log is empty")]
    EmptyLog,
}
