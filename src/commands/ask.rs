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
use colored::Colorize;
use serde_json::json;

use crate::chatbot::responses::{quick_question, QUICK_QUESTIONS};
use crate::chatbot::ChatSession;
use crate::config::Config;
use crate::output::OutputFormat;

pub fn run(
    config: &Config,
    message: Option<String>,
    quick: Option<usize>,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let message = match (message, quick) {
        (_, Some(number)) => quick_question(number)
            .with_context(|| {
                format!(
                    "Quick question must be between 1 and {}",
                    QUICK_QUESTIONS.len()
                )
            })?
            .to_string(),
        (Some(message), None) => message,
        (None, None) => anyhow::bail!("Provide a message or --quick <n>"),
    };

    let mut session = match seed {
        Some(seed) => ChatSession::with_seed(config.chatbot.clone(), seed),
        None => ChatSession::new(config.chatbot.clone()),
    };
    let reply = session.exchange(&message);

    let record = session
        .log()
        .last()
        .context("Interaction was not recorded")?;
    let category = record.reply_category();

    match format {
        OutputFormat::Text => {
            println!("{} {}", "You:".cyan().bold(), message);
            println!("{} {}", "Bot:".green().bold(), reply);
        }
        OutputFormat::Json => {
            let value = json!({
                "session_id": session.id(),
                "message": message,
                "reply": reply,
                "category": category.to_string(),
                "understood": record.understood,
                "fallback": record.fallback,
                "timestamp": record.timestamp_iso(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Compact => println!("[{}] {}", category, reply),
    }

    Ok(())
}
