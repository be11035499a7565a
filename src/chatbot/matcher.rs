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

use crate::chatbot::types::ChatCategory;

/// Keyword rules in dispatch order. The first rule with a matching keyword wins,
/// so reordering this table changes which category overlapping messages get.
pub const KEYWORD_RULES: &[(ChatCategory, &[&str])] = &[
    (
        ChatCategory::Feedback,
        &["feedback", "improve", "better", "learn"],
    ),
    (
        ChatCategory::Greetings,
        &["hello", "hi", "hey", "good morning", "good afternoon"],
    ),
    (
        ChatCategory::Statistics,
        &["statistic", "data", "number", "fact", "percent", "%"],
    ),
    (
        ChatCategory::Reduce,
        &["reduce", "less", "tip", "how", "ways", "help"],
    ),
    (
        ChatCategory::Recycling,
        &["recycle", "recycling", "bin", "waste", "disposal"],
    ),
    (
        ChatCategory::Singapore,
        &["singapore", "policy", "government", "semakau", "nea"],
    ),
    (ChatCategory::Thanks, &["thank", "thanks", "appreciate"]),
];

/// Classify a message by case-insensitive substring match against `KEYWORD_RULES`
pub fn classify(message: &str) -> ChatCategory {
    let lowered = message.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(*kw)))
        .map(|(category, _)| *category)
        .unwrap_or(ChatCategory::Default)
}
