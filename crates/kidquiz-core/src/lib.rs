// Copyright 2026 The kidquiz Authors
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

//! kidquiz-core: the game logic behind kidquiz, with no I/O.
//!
//! - Picture and arithmetic question banks
//! - The quiz session state machine (attempts, score, completion)
//! - Letter-tracing practice progress
//! - A seedable RNG so every round can be reproduced

pub mod bank;
pub mod error;
pub mod mode;
pub mod practice;
pub mod rng;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use bank::arithmetic::{ArithmeticBank, ArithmeticConfig};
pub use bank::catalog::{CatalogBank, CatalogError, parse_catalog};
pub use bank::{AnyBank, DEFAULT_ROUND_SIZE, OPTION_COUNT, QuestionBank};
pub use error::{ErrorReport, Fallible, fail};
pub use mode::GameMode;
pub use practice::LetterPractice;
pub use rng::TinyRng;
pub use session::{
    DEFAULT_ATTEMPTS_PER_QUESTION, Outcome, PerformanceTier, QuizSession, RoundState,
    RoundSummary, Scoreboard, SessionConfig, SessionError,
};
pub use types::expression::{Expression, Operator};
pub use types::question::{Prompt, Question, RoundQuestion};
