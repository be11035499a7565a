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

use tracing::debug;

use crate::calculator::formatting::{format_currency, format_decomposition, format_thousands};
use crate::calculator::types::{CalculatorError, CalculatorInput, CalculatorOutput, ImpactReport};
use crate::config::CalculatorConfig;

/// Compute plastic bag usage, cost and decomposition time for an input.
///
/// Cost and decomposition derive from the unrounded total so that fractional
/// weekly usage is not lost twice.
pub fn calculate(
    input: &CalculatorInput,
    constants: &CalculatorConfig,
) -> Result<CalculatorOutput, CalculatorError> {
    input.validate()?;

    let annual = input.bags_per_week * constants.weeks_per_year;
    let total = annual * input.usage_years;

    Ok(CalculatorOutput {
        weekly_usage: input.bags_per_week.round() as u64,
        annual_usage: annual.round() as u64,
        total_usage: total.round() as u64,
        total_cost: total * input.cost_per_bag,
        decomposition_years: total * constants.decomposition_years_per_bag,
    })
}

impl ImpactReport {
    pub fn from_output(output: &CalculatorOutput) -> Self {
        Self {
            weekly_usage: format_thousands(output.weekly_usage),
            annual_usage: format_thousands(output.annual_usage),
            total_usage: format_thousands(output.total_usage),
            total_cost: format_currency(output.total_cost),
            decomposition: format_decomposition(output.decomposition_years),
        }
    }

    /// Calculate and format in one step. Invalid input yields the sentinel report.
    pub fn from_input(input: &CalculatorInput, constants: &CalculatorConfig) -> Self {
        match calculate(input, constants) {
            Ok(output) => Self::from_output(&output),
            Err(e) => {
                debug!(error = %e, "Calculator input rejected");
                Self::unavailable()
            }
        }
    }
}
