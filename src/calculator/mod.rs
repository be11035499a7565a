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

//! Plastic bag impact calculator

pub mod formatting;
pub mod impact;
pub mod types;

#[cfg(test)]
mod calculator_tests;

pub use types::{CalculatorInput, ImpactReport};
