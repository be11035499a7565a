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

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::chatbot::matcher::classify;
use crate::chatbot::nudge::{
    not_understood_ratio, should_nudge_for_feedback, NudgePolicy, NUDGE_MESSAGE,
};
use crate::chatbot::responses::{ResponseBook, FEEDBACK_SUFFIX, LEARNING_HINT};
use crate::chatbot::types::{
    ChatCategory, ChatError, ChatMessage, InteractionRecord, SessionStats,
};
use crate::config::ChatbotConfig;

/// Not-understood messages needed before fallback replies carry the learning hint
const LEARNING_HINT_AFTER: usize = 3;

/// State of one conversation with the scripted bot
pub struct ChatSession {
    id: String,
    started_at: DateTime<Utc>,
    settings: ChatbotConfig,
    responses: ResponseBook,
    rng: StdRng,
    log: Vec<InteractionRecord>,
    transcript: Vec<ChatMessage>,
    feedback_count: u32,
    nudge_checked: bool,
}

impl ChatSession {
    pub fn new(settings: ChatbotConfig) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Session whose reply picks are reproducible
    pub fn with_seed(settings: ChatbotConfig, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: ChatbotConfig, rng: StdRng) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            settings,
            responses: ResponseBook::default(),
            rng,
            log: Vec::new(),
            transcript: Vec::new(),
            feedback_count: 0,
            nudge_checked: false,
        }
    }

    #[cfg(test)]
    pub fn with_responses(mut self, responses: ResponseBook) -> Self {
        self.responses = responses;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn settings(&self) -> &ChatbotConfig {
        &self.settings
    }

    pub fn log(&self) -> &[InteractionRecord] {
        &self.log
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    #[cfg(test)]
    pub fn feedback_count(&self) -> u32 {
        self.feedback_count
    }

    /// Answer a message. Never fails: internal errors produce an apology instead.
    pub fn respond(&mut self, message: &str) -> String {
        self.log.push(InteractionRecord::new(message));

        match self.compose_reply(message) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "Falling back to error response");
                if let Some(record) = self.log.last_mut() {
                    record.fallback = true;
                }
                self.responses.error_reply(&mut self.rng)
            }
        }
    }

    fn compose_reply(&mut self, message: &str) -> Result<String, ChatError> {
        let category = classify(message);

        let record = self.log.last_mut().ok_or(ChatError::EmptyLog)?;
        record.category = Some(category);
        record.understood = category.is_understood();

        let mut reply = self.responses.pick(category, &mut self.rng)?;

        match category {
            ChatCategory::Feedback => {
                if self.feedback_count > self.settings.feedback_suffix_after {
                    reply.push_str(FEEDBACK_SUFFIX);
                }
                self.feedback_count += 1;
            }
            ChatCategory::Default => {
                if self.settings.learning_hints
                    && self.not_understood_count() >= LEARNING_HINT_AFTER
                {
                    reply.push_str(LEARNING_HINT);
                }
            }
            _ => {}
        }

        debug!(
            session_id = %self.id,
            category = %category,
            understood = category.is_understood(),
            "Classified message"
        );

        Ok(reply)
    }

    /// Record a user message, answer it and record the answer
    pub fn exchange(&mut self, message: &str) -> String {
        self.transcript.push(ChatMessage::user(message));
        let reply = self.respond(message);
        self.transcript.push(ChatMessage::bot(reply.clone()));
        reply
    }

    /// One-shot check for asking the user for feedback.
    ///
    /// Only the first call evaluates the log; later calls return `None`.
    /// When the nudge fires it is appended to the transcript as a bot message.
    pub fn check_feedback_nudge(&mut self) -> Option<String> {
        if self.nudge_checked {
            return None;
        }
        self.nudge_checked = true;

        let policy = NudgePolicy::from(&self.settings);
        if !should_nudge_for_feedback(&self.log, &policy) {
            debug!(session_id = %self.id, messages = self.log.len(), "Feedback nudge not needed");
            return None;
        }

        info!(
            session_id = %self.id,
            messages = self.log.len(),
            ratio = not_understood_ratio(&self.log),
            "Asking user for feedback"
        );
        self.transcript.push(ChatMessage::bot(NUDGE_MESSAGE));
        Some(NUDGE_MESSAGE.to_string())
    }

    pub fn not_understood_count(&self) -> usize {
        self.log.iter().filter(|record| !record.understood).count()
    }

    pub fn stats(&self) -> SessionStats {
        let not_understood = self.not_understood_count();
        SessionStats {
            total_messages: self.log.len(),
            understood: self.log.len() - not_understood,
            not_understood,
            not_understood_ratio: not_understood_ratio(&self.log),
            feedback_messages: self.feedback_count,
        }
    }
}
