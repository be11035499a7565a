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

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::chatbot::types::{ChatCategory, ChatError};

pub const FEEDBACK_RESPONSES: [&str; 3] = [
    "Thank you for the feedback! Every suggestion helps me give better answers about plastic waste.",
    "I appreciate you helping me improve. Tell me which topics you'd like me to explain better.",
    "Feedback noted! I'm always learning new ways to talk about cutting plastic use.",
];

pub const GREETING_RESPONSES: [&str; 3] = [
    "Hello! I'm here to help you learn about reducing plastic bag waste in Singapore. What would you like to know?",
    "Hi there! Ask me about plastic statistics, recycling, or simple ways to use fewer bags.",
    "Hey! Ready to make a difference? I can share tips, facts, and what Singapore is doing about plastic.",
];

pub const STATISTICS_RESPONSES: [&str; 3] = [
    "Singapore goes through more than 1.7 billion plastic bags every year, roughly 820 million of them from supermarkets.",
    "Only about 6% of plastic waste in Singapore is recycled. The rest is incinerated and the ash goes to Semakau Landfill.",
    "A single plastic bag is used for around 12 minutes on average but can take up to 1,000 years to break down.",
];

pub const REDUCE_RESPONSES: [&str; 3] = [
    "Keep a foldable reusable bag in your backpack or pocket so you always have one when you shop.",
    "Say 'no bag, thanks' at the counter and carry small items in your hands. It adds up quickly!",
    "Bring your own container for takeaway food and reuse the bags you already have at home.",
];

pub const RECYCLING_RESPONSES: [&str; 3] = [
    "Use the blue recycling bins and keep items clean and dry. Food-soiled plastic contaminates the whole bin.",
    "Plastic bags can tangle sorting machines, so bundle them together before putting them in the recycling bin.",
    "When in doubt, check the NEA recycling guide. Wrongly sorted waste usually ends up being incinerated.",
];

pub const SINGAPORE_RESPONSES: [&str; 3] = [
    "Since July 2023, large supermarkets in Singapore charge at least 5 cents per disposable carrier bag.",
    "Semakau Landfill is Singapore's only landfill and is projected to run out of space by 2035.",
    "The Zero Waste Masterplan aims to cut the waste each person sends to landfill every day by 30% by 2030.",
];

pub const DEFAULT_RESPONSES: [&str; 3] = [
    "I'm not sure I understood that. Try asking about plastic statistics, recycling, or ways to reduce waste.",
    "Hmm, I don't have an answer for that yet. Could you rephrase your question?",
    "That's outside what I know right now. Ask me about plastic bags, recycling, or Singapore's policies!",
];

pub const ERROR_RESPONSES: [&str; 3] = [
    "Oops, something went wrong on my side. Please try asking again.",
    "Sorry, I had trouble answering that. Could you try once more?",
    "I ran into a problem putting my answer together. Please ask again in a moment.",
];

pub const THANKS_RESPONSE: &str =
    "You're welcome! Every bag you refuse helps keep Singapore clean and green.";

/// Appended to feedback replies once enough feedback has been collected
pub const FEEDBACK_SUFFIX: &str =
    " I'm getting smarter thanks to feedback from people like you!";

/// Appended to fallback replies when learning hints are enabled
pub const LEARNING_HINT: &str =
    " I can help with plastic statistics, tips to reduce waste, recycling, and Singapore's policies.";

/// Canned replies for each category
#[derive(Debug, Clone)]
pub struct ResponseBook {
    pools: HashMap<ChatCategory, Vec<String>>,
    thanks: String,
}

impl Default for ResponseBook {
    fn default() -> Self {
        let pools: HashMap<ChatCategory, Vec<String>> = [
            (ChatCategory::Feedback, &FEEDBACK_RESPONSES),
            (ChatCategory::Greetings, &GREETING_RESPONSES),
            (ChatCategory::Statistics, &STATISTICS_RESPONSES),
            (ChatCategory::Reduce, &REDUCE_RESPONSES),
            (ChatCategory::Recycling, &RECYCLING_RESPONSES),
            (ChatCategory::Singapore, &SINGAPORE_RESPONSES),
            (ChatCategory::Default, &DEFAULT_RESPONSES),
        ]
        .into_iter()
        .map(|(category, pool)| {
            let replies = pool.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            (category, replies)
        })
        .collect();

        Self {
            pools,
            thanks: THANKS_RESPONSE.to_string(),
        }
    }
}

impl ResponseBook {
    /// Replace the pool for a category
    #[cfg(test)]
    pub fn with_pool(mut self, category: ChatCategory, responses: Vec<String>) -> Self {
        self.pools.insert(category, responses);
        self
    }

    /// Pick a reply for a category. Thanks always gets its fixed reply.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        category: ChatCategory,
        rng: &mut R,
    ) -> Result<String, ChatError> {
        if category == ChatCategory::Thanks {
            return Ok(self.thanks.clone());
        }
        let pool = self
            .pools
            .get(&category)
            .ok_or(ChatError::MissingPool(category))?;
        pool.choose(rng)
            .cloned()
            .ok_or(ChatError::EmptyPool(category))
    }

    /// Reply used when anything goes wrong while answering
    pub fn error_reply<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        ERROR_RESPONSES
            .choose(rng)
            .copied()
            .unwrap_or(ERROR_RESPONSES[0])
            .to_string()
    }
}

/// Fixed prompts offered as one-tap questions
pub const QUICK_QUESTIONS: [&str; 4] = [
    "How can I reduce plastic bag use?",
    "What are the plastic waste statistics in Singapore?",
    "Where do I recycle plastic bags?",
    "What is the Singapore government doing?",
];

pub fn quick_question(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| QUICK_QUESTIONS.get(index))
        .copied()
}
