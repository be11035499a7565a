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
use tracing::info;

use crate::calculator::formatting::{
    format_report_compact, format_report_json, format_report_text,
};
use crate::calculator::{CalculatorInput, ImpactReport};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn run(
    config: &Config,
    bags: f64,
    cost: f64,
    years: f64,
    no_clamp: bool,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let raw = CalculatorInput::new(bags, cost, years);
    let input = if no_clamp { raw } else { raw.clamped() };
    if !no_clamp && input != raw {
        info!(
            bags = input.bags_per_week,
            cost = input.cost_per_bag,
            years = input.usage_years,
            "Input clamped to slider ranges"
        );
    }

    let report = ImpactReport::from_input(&input, &config.calculator);

    let rendered = match format {
        OutputFormat::Text => format_report_text(&input, &report),
        OutputFormat::Json => format_report_json(&input, &report),
        OutputFormat::Compact => format_report_compact(&report),
    };
    println!("{}", rendered.trim_end());

    Ok(())
}
