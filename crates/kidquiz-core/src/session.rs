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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::bank::DEFAULT_ROUND_SIZE;
use crate::bank::QuestionBank;
use crate::error::Fallible;
use crate::error::fail;
use crate::rng::TinyRng;
use crate::types::question::RoundQuestion;

/// A miss on the first try allows a retry; a miss on the second try counts
/// the question as wrong.
pub const DEFAULT_ATTEMPTS_PER_QUESTION: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub round_size: usize,
    pub attempts_per_question: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_size: DEFAULT_ROUND_SIZE,
            attempts_per_question: DEFAULT_ATTEMPTS_PER_QUESTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Complete,
}

/// The result of submitting an answer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The answer was right. The session has moved on.
    Correct {
        question: RoundQuestion,
        round_complete: bool,
    },
    /// The answer was wrong, but the player may try the same question again.
    RetryAllowed {
        question: RoundQuestion,
        attempts_left: usize,
    },
    /// The answer was wrong and the attempt budget is spent. The session has
    /// moved on.
    Exhausted {
        question: RoundQuestion,
        correct_answer: String,
        round_complete: bool,
    },
}

impl Outcome {
    pub fn question(&self) -> &RoundQuestion {
        match self {
            Outcome::Correct { question, .. } => question,
            Outcome::RetryAllowed { question, .. } => question,
            Outcome::Exhausted { question, .. } => question,
        }
    }

    pub fn round_complete(&self) -> bool {
        match self {
            Outcome::Correct { round_complete, .. } => *round_complete,
            Outcome::RetryAllowed { .. } => false,
            Outcome::Exhausted { round_complete, .. } => *round_complete,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// An answer was submitted after the last question.
    InvalidState,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidState => write!(f, "the round is already complete."),
        }
    }
}

impl Error for SessionError {}

/// Running tally, as shown on the in-game scoreboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub correct: usize,
    pub wrong: usize,
    pub answered: usize,
    pub total: usize,
}

/// How the end-of-round screen should praise the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Amazing,
    VeryGood,
    GoodEffort,
    KeepPracticing,
}

impl PerformanceTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => PerformanceTier::Amazing,
            70..=89 => PerformanceTier::VeryGood,
            50..=69 => PerformanceTier::GoodEffort,
            _ => PerformanceTier::KeepPracticing,
        }
    }

    /// Resource key for the message shown with this tier.
    pub fn message_key(&self) -> &'static str {
        match self {
            PerformanceTier::Amazing => "tier.amazing",
            PerformanceTier::VeryGood => "tier.very_good",
            PerformanceTier::GoodEffort => "tier.good_effort",
            PerformanceTier::KeepPracticing => "tier.keep_practicing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub score: usize,
    pub total: usize,
    /// Whole percent, truncated.
    pub percentage: u32,
    pub tier: PerformanceTier,
}

/// One player's progress through rounds drawn from a bank.
pub struct QuizSession<B: QuestionBank> {
    bank: B,
    config: SessionConfig,
    rng: TinyRng,
    round: Vec<RoundQuestion>,
    current_index: usize,
    score: usize,
    wrong_tally: usize,
    attempts_on_current: usize,
}

impl<B: QuestionBank> QuizSession<B> {
    /// Create a session and draw its first round.
    pub fn new(bank: B, config: SessionConfig, rng: TinyRng) -> Fallible<Self> {
        if config.attempts_per_question == 0 {
            return fail("attempts per question must be at least 1.");
        }
        let mut session = Self {
            bank,
            config,
            rng,
            round: Vec::new(),
            current_index: 0,
            score: 0,
            wrong_tally: 0,
            attempts_on_current: 0,
        };
        session.start_new_round();
        Ok(session)
    }

    /// Draw a fresh round and reset all counters.
    pub fn start_new_round(&mut self) {
        self.round = self.bank.draw_round(self.config.round_size, &mut self.rng);
        self.current_index = 0;
        self.score = 0;
        self.wrong_tally = 0;
        self.attempts_on_current = 0;
    }

    pub fn state(&self) -> RoundState {
        if self.current_index < self.round.len() {
            RoundState::InProgress
        } else {
            RoundState::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == RoundState::Complete
    }

    /// The question awaiting an answer, or `None` once the round is over.
    pub fn current_question(&self) -> Option<&RoundQuestion> {
        self.round.get(self.current_index)
    }

    pub fn submit_answer(&mut self, value: &str) -> Result<Outcome, SessionError> {
        let index = self.current_index;
        let question = self
            .current_question()
            .cloned()
            .ok_or(SessionError::InvalidState)?;
        let outcome = if question.accepts(value) {
            self.score += 1;
            self.advance();
            Outcome::Correct {
                question,
                round_complete: self.is_complete(),
            }
        } else if self.attempts_on_current + 1 < self.config.attempts_per_question {
            self.attempts_on_current += 1;
            Outcome::RetryAllowed {
                question,
                attempts_left: self.config.attempts_per_question - self.attempts_on_current,
            }
        } else {
            self.wrong_tally += 1;
            self.advance();
            let correct_answer = question.correct_answer();
            Outcome::Exhausted {
                question,
                correct_answer,
                round_complete: self.is_complete(),
            }
        };
        log::debug!(
            "Answer '{value}' to question {index}: {}.",
            outcome_kind(&outcome)
        );
        Ok(outcome)
    }

    fn advance(&mut self) {
        self.current_index += 1;
        self.attempts_on_current = 0;
    }

    /// Percentage of the round answered correctly, 0 for an empty round.
    pub fn success_percentage(&self) -> f64 {
        if self.round.is_empty() {
            0.0
        } else {
            self.score as f64 / self.round.len() as f64 * 100.0
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            correct: self.score,
            wrong: self.wrong_tally,
            answered: self.current_index,
            total: self.round.len(),
        }
    }

    pub fn summary(&self) -> RoundSummary {
        // Integer math, so 7 of 10 is exactly 70.
        let percentage = match self.round.len() {
            0 => 0,
            total => (self.score * 100 / total) as u32,
        };
        RoundSummary {
            score: self.score,
            total: self.round.len(),
            percentage,
            tier: PerformanceTier::from_percentage(percentage),
        }
    }

    pub fn round(&self) -> &[RoundQuestion] {
        &self.round
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn wrong_tally(&self) -> usize {
        self.wrong_tally
    }

    pub fn attempts_on_current(&self) -> usize {
        self.attempts_on_current
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }
}

fn outcome_kind(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Correct { .. } => "correct",
        Outcome::RetryAllowed { .. } => "retry",
        Outcome::Exhausted { .. } => "exhausted",
    }
}
