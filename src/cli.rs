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

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bagwise")]
#[command(version, author = "Bagwise Contributors")]
#[command(about = "Plastic bag impact calculator and recycling chatbot for Singapore", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate how many bags you use, what they cost and how long they last
    Calc {
        /// Plastic bags used per week (0-100)
        #[arg(short, long, allow_negative_numbers = true)]
        bags: f64,

        /// Cost per bag in S$ (0-1)
        #[arg(short, long, default_value = "0.05", allow_negative_numbers = true)]
        cost: f64,

        /// Years of usage (1-50)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        years: f64,

        /// Pass values to the formulas without clamping them to the slider ranges
        #[arg(long)]
        no_clamp: bool,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Ask the chatbot a single question
    Ask {
        /// Message to send
        #[arg(required_unless_present = "quick")]
        message: Option<String>,

        /// Send one of the quick questions instead (1-4)
        #[arg(short, long, conflicts_with = "message")]
        quick: Option<usize>,

        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Start an interactive chat session
    Chat {
        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Animate a statistic counting up to a target
    Counter {
        /// Value to count up to
        #[arg(allow_negative_numbers = true)]
        target: f64,

        /// Print the final value without animating
        #[arg(long)]
        instant: bool,
    },
}
