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

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use kidquiz_core::GameMode;
use kidquiz_core::Outcome;
use kidquiz_core::Prompt;
use kidquiz_core::QuestionBank;
use kidquiz_core::QuizSession;
use kidquiz_core::RoundQuestion;
use kidquiz_core::RoundSummary;
use kidquiz_core::SessionConfig;
use kidquiz_core::TinyRng;
use kidquiz_core::error::Fallible;
use kidquiz_core::error::fail;

use crate::cmd::build_bank;

pub struct PlayConfig {
    pub mode: GameMode,
    pub catalog: Option<PathBuf>,
    pub seed: u64,
    pub session: SessionConfig,
}

pub fn play(config: PlayConfig) -> Fallible<()> {
    let mut rng = TinyRng::from_seed(config.seed);
    let bank = build_bank(config.mode, config.catalog.as_deref(), &mut rng)?;
    log::debug!("Playing {} with seed {}", config.mode, config.seed);
    let mut session = QuizSession::new(bank, config.session, rng)?;
    play_round(&mut session, stdin().lock(), stdout().lock())?;
    Ok(())
}

/// Drive one round over a line-based terminal: print the question, read an
/// answer, report the outcome, until the round is complete.
pub fn play_round<B: QuestionBank>(
    session: &mut QuizSession<B>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Fallible<RoundSummary> {
    let total = session.round().len();
    while let Some(question) = session.current_question().cloned() {
        writeln!(
            output,
            "Question {}/{}: {}",
            session.current_index() + 1,
            total,
            question.prompt().key()
        )?;
        for (idx, option) in question.options().iter().enumerate() {
            writeln!(output, "  {}. {}", idx + 1, option)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return fail("round interrupted before completion.");
        }
        let answer = resolve_choice(&question, line.trim());
        match session.submit_answer(&answer)? {
            Outcome::Correct { .. } => writeln!(output, "Correct!")?,
            Outcome::RetryAllowed { attempts_left, .. } => {
                writeln!(output, "Not quite, try again ({attempts_left} left).")?
            }
            Outcome::Exhausted { correct_answer, .. } => {
                writeln!(output, "The answer was {correct_answer}.")?
            }
        }
        let board = session.scoreboard();
        writeln!(output, "Score: {} right, {} wrong", board.correct, board.wrong)?;
    }
    let summary = session.summary();
    writeln!(
        output,
        "Round complete: {}/{} ({}%) [{}]",
        summary.score,
        summary.total,
        summary.percentage,
        summary.tier.message_key()
    )?;
    Ok(summary)
}

/// In picture games the player may type the option's number instead of the
/// letter. In arithmetic games numbers are always taken as the answer itself.
fn resolve_choice(question: &RoundQuestion, typed: &str) -> String {
    if let Prompt::Picture(_) = question.prompt() {
        if let Ok(n) = typed.parse::<usize>() {
            if let Some(option) = n.checked_sub(1).and_then(|i| question.options().get(i)) {
                return option.clone();
            }
        }
    }
    typed.to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use kidquiz_core::CatalogBank;
    use kidquiz_core::PerformanceTier;

    use super::*;

    fn session(seed: u64) -> Fallible<QuizSession<CatalogBank>> {
        QuizSession::new(
            CatalogBank::transportation()?,
            SessionConfig {
                round_size: 3,
                attempts_per_question: 2,
            },
            TinyRng::from_seed(seed),
        )
    }

    /// Answers for every question, computed from a twin session with the
    /// same seed.
    fn answers(seed: u64, pick: impl Fn(&RoundQuestion) -> String) -> Fallible<String> {
        let twin = session(seed)?;
        let mut script = String::new();
        for question in twin.round() {
            script.push_str(&pick(question));
            script.push('\n');
        }
        Ok(script)
    }

    fn wrong_letter(question: &RoundQuestion) -> String {
        question
            .options()
            .iter()
            .find(|o| !question.accepts(o))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_perfect_round_by_letter() -> Fallible<()> {
        let script = answers(1, |q| q.correct_answer())?;
        let mut session = session(1)?;
        let mut output = Vec::new();
        let summary = play_round(&mut session, Cursor::new(script), &mut output)?;
        assert_eq!(summary.score, 3);
        assert_eq!(summary.tier, PerformanceTier::Amazing);
        let text = String::from_utf8(output)?;
        assert_eq!(text.matches("Correct!").count(), 3);
        assert!(text.contains("Question 1/3: "));
        assert!(text.ends_with("Round complete: 3/3 (100%) [tier.amazing]\n"));
        Ok(())
    }

    #[test]
    fn test_answer_by_number() -> Fallible<()> {
        let script = answers(2, |q| {
            let idx = q
                .options()
                .iter()
                .position(|o| q.accepts(o))
                .unwrap();
            (idx + 1).to_string()
        })?;
        let mut session = session(2)?;
        let summary = play_round(&mut session, Cursor::new(script), Vec::new())?;
        assert_eq!(summary.score, 3);
        Ok(())
    }

    #[test]
    fn test_retry_then_reveal() -> Fallible<()> {
        let twin = session(3)?;
        let mut script = String::new();
        for question in twin.round() {
            let miss = wrong_letter(question);
            script.push_str(&format!("{miss}\n{miss}\n"));
        }
        let mut session = session(3)?;
        let mut output = Vec::new();
        let summary = play_round(&mut session, Cursor::new(script), &mut output)?;
        assert_eq!(summary.score, 0);
        assert_eq!(session.wrong_tally(), 3);
        let text = String::from_utf8(output)?;
        assert_eq!(text.matches("Not quite, try again (1 left).").count(), 3);
        assert_eq!(text.matches("The answer was ").count(), 3);
        assert!(text.contains("[tier.keep_practicing]"));
        Ok(())
    }

    #[test]
    fn test_input_ends_early() -> Fallible<()> {
        let mut session = session(4)?;
        let result = play_round(&mut session, Cursor::new("\n"), Vec::new());
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: round interrupted before completion."
        );
        Ok(())
    }

    #[test]
    fn test_arithmetic_numbers_are_values() -> Fallible<()> {
        let mut rng = TinyRng::from_seed(5);
        let bank = GameMode::NumbersStage1.bank(&mut rng)?;
        let mut session = QuizSession::new(
            bank,
            SessionConfig {
                round_size: 1,
                attempts_per_question: 2,
            },
            rng,
        )?;
        let question = session.current_question().cloned().unwrap();
        assert_eq!(resolve_choice(&question, "1"), "1");
        let script = format!("{}\n", question.correct_answer());
        let summary = play_round(&mut session, Cursor::new(script), Vec::new())?;
        assert_eq!(summary.score, 1);
        Ok(())
    }
}
