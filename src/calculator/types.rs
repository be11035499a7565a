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

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker shown in every report field when the input cannot be evaluated
pub const UNAVAILABLE: &str = "unavailable";

/// Inclusive bounds enforced by the input layer before calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a raw value into the range. NaN collapses to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const BAGS_PER_WEEK_RANGE: InputRange = InputRange::new(0.0, 100.0);
pub const COST_PER_BAG_RANGE: InputRange = InputRange::new(0.0, 1.0);
pub const USAGE_YEARS_RANGE: InputRange = InputRange::new(1.0, 50.0);

/// Raw calculator input as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub bags_per_week: f64,
    pub cost_per_bag: f64,
    pub usage_years: f64,
}

impl CalculatorInput {
    pub fn new(bags_per_week: f64, cost_per_bag: f64, usage_years: f64) -> Self {
        Self {
            bags_per_week,
            cost_per_bag,
            usage_years,
        }
    }

    /// Copy of this input with every field pulled into its slider range
    pub fn clamped(&self) -> Self {
        Self {
            bags_per_week: BAGS_PER_WEEK_RANGE.clamp(self.bags_per_week),
            cost_per_bag: COST_PER_BAG_RANGE.clamp(self.cost_per_bag),
            usage_years: USAGE_YEARS_RANGE.clamp(self.usage_years),
        }
    }

    pub fn validate(&self) -> Result<(), CalculatorError> {
        if !self.bags_per_week.is_finite() || self.bags_per_week < 0.0 {
            return Err(CalculatorError::InvalidInput {
                field: "bags_per_week",
                value: self.bags_per_week,
            });
        }
        if !self.cost_per_bag.is_finite() || self.cost_per_bag < 0.0 {
            return Err(CalculatorError::InvalidInput {
                field: "cost_per_bag",
                value: self.cost_per_bag,
            });
        }
        if !self.usage_years.is_finite() || self.usage_years <= 0.0 {
            return Err(CalculatorError::InvalidInput {
                field: "usage_years",
                value: self.usage_years,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("invalid value {value} for {field}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Numeric result of a calculation, before display formatting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorOutput {
    /// Bags per week, rounded
    pub weekly_usage: u64,
    /// Bags per year, rounded
    pub annual_usage: u64,
    /// Bags over the whole period, rounded
    pub total_usage: u64,
    /// Unrounded total usage times cost per bag
    pub total_cost: f64,
    /// Unrounded total usage times the decomposition constant
    pub decomposition_years: f64,
}

/// Display strings for the five calculator fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    pub weekly_usage: String,
    pub annual_usage: String,
    pub total_usage: String,
    pub total_cost: String,
    pub decomposition: String,
}

impl ImpactReport {
    pub fn unavailable() -> Self {
        Self {
            weekly_usage: UNAVAILABLE.to_string(),
            annual_usage: UNAVAILABLE.to_string(),
            total_usage: UNAVAILABLE.to_string(),
            total_cost: UNAVAILABLE.to_string(),
            decomposition: UNAVAILABLE.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.weekly_usage != UNAVAILABLE
    }
}
