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

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "bagwise";

/// Base directory that holds per-application data
fn data_home() -> Result<PathBuf> {
    if cfg!(target_os = "windows") {
        return dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine data directory"));
    }
    if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg_data_home));
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?;
    Ok(home.join(".local").join("share"))
}

/// Directory holding the bagwise config and logs, created on first use
pub fn get_system_storage_dir() -> Result<PathBuf> {
    let base_dir = data_home()?.join(APP_DIR_NAME);
    if !base_dir.exists() {
        fs::create_dir_all(&base_dir)?;
    }
    Ok(base_dir)
}

/// `config.toml` inside the storage directory
pub fn get_system_config_path() -> Result<PathBuf> {
    let system_dir = get_system_storage_dir()?;
    Ok(system_dir.join("config.toml"))
}

/// Directory holding rotated chat session logs
pub fn get_log_dir() -> Result<PathBuf> {
    let log_dir = get_system_storage_dir()?.join("logs");
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }
    Ok(log_dir)
}
