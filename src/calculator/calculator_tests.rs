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

#[cfg(test)]
mod tests {
    use super::super::formatting::{
        format_currency, format_decomposition, format_report_compact, format_thousands,
    };
    use super::super::impact::calculate;
    use super::super::types::{
        CalculatorError, CalculatorInput, ImpactReport, BAGS_PER_WEEK_RANGE, UNAVAILABLE,
    };
    use crate::config::CalculatorConfig;

    fn defaults() -> CalculatorConfig {
        CalculatorConfig::default()
    }

    #[test]
    fn test_annual_usage_is_rounded_weekly_times_52() {
        for bags in [0.0, 0.4, 1.0, 2.5, 7.3, 10.0, 33.33, 100.0] {
            let output = calculate(&CalculatorInput::new(bags, 0.05, 1.0), &defaults()).unwrap();
            assert_eq!(
                output.annual_usage,
                (bags * 52.0_f64).round() as u64,
                "annual usage for {} bags/week",
                bags
            );
        }
    }

    #[test]
    fn test_reference_scenario() {
        let input = CalculatorInput::new(10.0, 0.05, 2.0);
        let output = calculate(&input, &defaults()).unwrap();

        assert_eq!(output.weekly_usage, 10);
        assert_eq!(output.annual_usage, 520);
        assert_eq!(output.total_usage, 1040);

        let report = ImpactReport::from_output(&output);
        assert_eq!(report.total_usage, "1,040");
        assert_eq!(report.total_cost, "52.00");
        assert_eq!(report.decomposition, "1.0M years");
    }

    #[test]
    fn test_cost_uses_unrounded_total() {
        // 1.01 bags/week for one year is 52.52 bags
        let output = calculate(&CalculatorInput::new(1.01, 1.0, 1.0), &defaults()).unwrap();
        assert_eq!(output.total_usage, 53);
        assert_eq!(format_currency(output.total_cost), "52.52");
    }

    #[test]
    fn test_invalid_input_yields_sentinel_everywhere() {
        let cases = [
            CalculatorInput::new(10.0, 0.05, 0.0),
            CalculatorInput::new(-1.0, 0.05, 2.0),
            CalculatorInput::new(10.0, -0.01, 2.0),
            CalculatorInput::new(f64::NAN, 0.05, 2.0),
            CalculatorInput::new(10.0, 0.05, f64::INFINITY),
        ];

        for input in cases {
            let report = ImpactReport::from_input(&input, &defaults());
            assert_eq!(report, ImpactReport::unavailable(), "input {:?}", input);
            assert_eq!(report.weekly_usage, UNAVAILABLE);
            assert_eq!(report.annual_usage, UNAVAILABLE);
            assert_eq!(report.total_usage, UNAVAILABLE);
            assert_eq!(report.total_cost, UNAVAILABLE);
            assert_eq!(report.decomposition, UNAVAILABLE);
            assert!(!report.is_available());
        }
    }

    #[test]
    fn test_invalid_input_names_field() {
        let err = calculate(&CalculatorInput::new(1.0, 0.1, 0.0), &defaults()).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidInput {
                field: "usage_years",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_zero_bags_is_valid() {
        let report = ImpactReport::from_input(&CalculatorInput::new(0.0, 0.05, 5.0), &defaults());
        assert!(report.is_available());
        assert_eq!(report.total_usage, "0");
        assert_eq!(report.total_cost, "0.00");
        assert_eq!(report.decomposition, "0 years");
    }

    #[test]
    fn test_recalculation_is_idempotent() {
        let input = CalculatorInput::new(13.7, 0.08, 12.0);
        let first = ImpactReport::from_input(&input, &defaults());
        for _ in 0..5 {
            assert_eq!(ImpactReport::from_input(&input, &defaults()), first);
        }
    }

    #[test]
    fn test_configured_constants_are_used() {
        let constants = CalculatorConfig {
            weeks_per_year: 52.0,
            decomposition_years_per_bag: 500.0,
        };
        let output = calculate(&CalculatorInput::new(10.0, 0.05, 2.0), &constants).unwrap();
        assert_eq!(format_decomposition(output.decomposition_years), "520.0k years");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(260000), "260,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(52.0), "52.00");
        assert_eq!(format_currency(1234.5), "1,234.50");
        assert_eq!(format_currency(5200.0), "5,200.00");
    }

    #[test]
    fn test_decomposition_suffixes() {
        assert_eq!(format_decomposition(500.0), "500 years");
        assert_eq!(format_decomposition(1000.0), "1.0k years");
        assert_eq!(format_decomposition(52_000.0), "52.0k years");
        assert_eq!(format_decomposition(1_040_000.0), "1.0M years");
        assert_eq!(format_decomposition(260_000_000.0), "260.0M years");
        assert_eq!(format_decomposition(2_600_000_000.0), "2.6B years");
    }

    #[test]
    fn test_clamping_to_slider_ranges() {
        let clamped = CalculatorInput::new(250.0, 3.0, 0.0).clamped();
        assert_eq!(clamped, CalculatorInput::new(100.0, 1.0, 1.0));

        let clamped = CalculatorInput::new(-5.0, -1.0, 80.0).clamped();
        assert_eq!(clamped, CalculatorInput::new(0.0, 0.0, 50.0));

        assert_eq!(BAGS_PER_WEEK_RANGE.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_compact_report_line() {
        let report = ImpactReport::from_input(&CalculatorInput::new(10.0, 0.05, 2.0), &defaults());
        assert_eq!(
            format_report_compact(&report),
            "weekly=10 annual=520 total=1,040 cost=52.00 decomposition=1.0M years"
        );
    }
}
