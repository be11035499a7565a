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

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, fmt::Layer, prelude::*, registry::Registry, EnvFilter};

static CHAT_LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

fn default_filter(debug_mode: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug_mode {
            EnvFilter::new("info,bagwise=debug")
        } else {
            EnvFilter::new("bagwise=info")
        }
    })
}

/// Logging for one-shot commands: human-readable lines on stderr
pub fn init_console_logging(debug_mode: bool) {
    fmt()
        .with_env_filter(default_filter(debug_mode))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize logging for interactive chat with file rotation
/// The terminal carries the transcript, so logs go to files only
pub fn init_chat_logging(debug_mode: bool) -> Result<(), anyhow::Error> {
    let log_dir = crate::storage::get_log_dir()?;

    CHAT_LOG_DIR
        .set(log_dir.clone())
        .map_err(|_| anyhow::anyhow!("Failed to set log directory"))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "chat.log");

    // File layer with JSON formatting for structured logs
    let file_layer = Layer::new()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json();

    let registry = Registry::default()
        .with(file_layer)
        .with(default_filter(debug_mode));
    registry.init();

    info!(
        log_directory = %log_dir.display(),
        debug_mode = debug_mode,
        "Chat logging initialized"
    );

    Ok(())
}

/// Get the chat log directory, once chat logging is running
pub fn get_log_directory() -> Option<PathBuf> {
    CHAT_LOG_DIR.get().cloned()
}
