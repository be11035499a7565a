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

use crate::cli::Commands;
use crate::config::Config;

mod ask;
mod calc;
mod chat;
mod counter;

pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Calc {
            bags,
            cost,
            years,
            no_clamp,
            format,
        } => calc::run(config, bags, cost, years, no_clamp, &format),
        Commands::Ask {
            message,
            quick,
            seed,
            format,
        } => ask::run(config, message, quick, seed, &format),
        Commands::Chat { seed } => chat::run(config, seed).await,
        Commands::Counter { target, instant } => counter::run(config, target, instant).await,
    }
}
