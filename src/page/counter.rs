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

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::CounterConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CounterError {
    #[error("counter target must be a finite number, got {0}")]
    InvalidTarget(f64),
    #[error("counter tick must be shorter than its duration and non-zero")]
    InvalidTiming,
}

/// One redraw of the animated statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterFrame {
    pub value: f64,
    pub display: String,
    /// Last frame; the repeating timer stops after it
    pub is_final: bool,
}

/// Integral values print bare, anything else with two decimals
pub fn format_counter_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Counts from zero up to a target in equal steps, one step per tick
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    tick: Duration,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, timing: &CounterConfig) -> Result<Self, CounterError> {
        if !target.is_finite() {
            return Err(CounterError::InvalidTarget(target));
        }
        if timing.tick_ms == 0 || timing.duration_ms < timing.tick_ms {
            return Err(CounterError::InvalidTiming);
        }

        let steps = timing.duration_ms as f64 / timing.tick_ms as f64;
        Ok(Self {
            target,
            increment: target / steps,
            current: 0.0,
            tick: Duration::from_millis(timing.tick_ms),
            finished: false,
        })
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Frame shown once the animation has run to completion
    pub fn final_frame(&self) -> CounterFrame {
        CounterFrame {
            value: self.target,
            display: format_counter_value(self.target),
            is_final: true,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.current += self.increment;
        if self.current >= self.target {
            self.finished = true;
            return Some(self.final_frame());
        }

        Some(CounterFrame {
            value: self.current,
            display: format_counter_value(self.current),
            is_final: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> CounterConfig {
        CounterConfig::default()
    }

    #[test]
    fn test_integer_target_ends_exactly() {
        let frames: Vec<_> = CounterAnimation::new(100.0, &timing()).unwrap().collect();
        let last = frames.last().unwrap();

        assert!(last.is_final);
        assert_eq!(last.display, "100");
        assert_eq!(frames.iter().filter(|f| f.is_final).count(), 1);
        // 2000ms / 16ms = 125 steps, give or take float accumulation
        assert!((124..=126).contains(&frames.len()), "{} frames", frames.len());
    }

    #[test]
    fn test_frames_increase_monotonically() {
        let frames: Vec<_> = CounterAnimation::new(1760.0, &timing()).unwrap().collect();
        for pair in frames.windows(2) {
            assert!(pair[1].value >= pair[0].value);
        }
        assert!(frames.iter().all(|f| f.value <= 1760.0));
    }

    #[test]
    fn test_fractional_target_keeps_two_decimals() {
        let frames: Vec<_> = CounterAnimation::new(1.76, &timing()).unwrap().collect();
        assert_eq!(frames.last().unwrap().display, "1.76");
        assert!(frames[0].display.contains('.'));
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let frames: Vec<_> = CounterAnimation::new(0.0, &timing()).unwrap().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].display, "0");
        assert!(frames[0].is_final);
    }

    #[test]
    fn test_negative_target_finishes_on_first_tick() {
        let frames: Vec<_> = CounterAnimation::new(-5.0, &timing()).unwrap().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].display, "-5");
    }

    #[test]
    fn test_non_finite_target_rejected() {
        assert!(matches!(
            CounterAnimation::new(f64::NAN, &timing()),
            Err(CounterError::InvalidTarget(_))
        ));
        assert!(CounterAnimation::new(f64::INFINITY, &timing()).is_err());
    }

    #[test]
    fn test_bad_timing_rejected() {
        let zero_tick = CounterConfig {
            duration_ms: 2000,
            tick_ms: 0,
        };
        assert_eq!(
            CounterAnimation::new(10.0, &zero_tick).unwrap_err(),
            CounterError::InvalidTiming
        );
    }

    #[test]
    fn test_single_step_timing() {
        let timing = CounterConfig {
            duration_ms: 16,
            tick_ms: 16,
        };
        let frames: Vec<_> = CounterAnimation::new(42.0, &timing).unwrap().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].display, "42");
    }

    #[test]
    fn test_value_formatting() {
        assert_eq!(format_counter_value(0.0), "0");
        assert_eq!(format_counter_value(820.0), "820");
        assert_eq!(format_counter_value(0.5), "0.50");
        assert_eq!(format_counter_value(12.346), "12.35");
    }
}
