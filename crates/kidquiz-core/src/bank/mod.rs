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

//! Question banks: where the questions for a game mode come from, and how a
//! round is drawn out of them.

pub mod arithmetic;
pub mod builtin;
pub mod catalog;

use crate::bank::arithmetic::ArithmeticBank;
use crate::bank::catalog::CatalogBank;
use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::question::Question;
use crate::types::question::RoundQuestion;

/// Number of questions in a round unless configured otherwise.
pub const DEFAULT_ROUND_SIZE: usize = 10;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 3;

/// A populated, immutable pool of questions.
pub trait QuestionBank {
    /// The full catalog, in canonical order.
    fn questions(&self) -> &[Question];

    /// Draw a round of `size` questions without replacement, each with its
    /// options shuffled.
    fn draw_round(&self, size: usize, rng: &mut TinyRng) -> Vec<RoundQuestion> {
        draw_round(self.questions(), size, rng)
    }
}

/// Sample up to `size` distinct questions. Asking for more questions than
/// the catalog holds is not an error: the round is clamped to the catalog.
pub fn draw_round(questions: &[Question], size: usize, rng: &mut TinyRng) -> Vec<RoundQuestion> {
    if size > questions.len() {
        log::warn!(
            "Requested a round of {size} questions but the catalog only has {}; clamping.",
            questions.len()
        );
    }
    let indices: Vec<usize> = shuffle((0..questions.len()).collect(), rng);
    let round: Vec<RoundQuestion> = indices
        .into_iter()
        .take(size)
        .map(|idx| {
            let question = &questions[idx];
            let options = shuffle(question.options().to_vec(), rng);
            RoundQuestion::new(idx, question.prompt().clone(), options)
        })
        .collect();
    log::debug!("Drew a round of {} questions.", round.len());
    round
}

/// A bank chosen at runtime, e.g. from a game mode name.
#[derive(Clone, Debug)]
pub enum AnyBank {
    Catalog(CatalogBank),
    Arithmetic(ArithmeticBank),
}

impl QuestionBank for AnyBank {
    fn questions(&self) -> &[Question] {
        match self {
            AnyBank::Catalog(bank) => bank.questions(),
            AnyBank::Arithmetic(bank) => bank.questions(),
        }
    }
}

impl From<CatalogBank> for AnyBank {
    fn from(bank: CatalogBank) -> Self {
        AnyBank::Catalog(bank)
    }
}

impl From<ArithmeticBank> for AnyBank {
    fn from(bank: ArithmeticBank) -> Self {
        AnyBank::Arithmetic(bank)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::Fallible;

    fn animals() -> Fallible<CatalogBank> {
        Ok(CatalogBank::animals()?)
    }

    #[test]
    fn test_round_has_requested_size() -> Fallible<()> {
        let bank = animals()?;
        let mut rng = TinyRng::from_seed(1);
        let round = bank.draw_round(DEFAULT_ROUND_SIZE, &mut rng);
        assert_eq!(round.len(), DEFAULT_ROUND_SIZE);
        Ok(())
    }

    #[test]
    fn test_round_questions_are_distinct() -> Fallible<()> {
        let bank = animals()?;
        for seed in 0..50 {
            let mut rng = TinyRng::from_seed(seed);
            let round = bank.draw_round(DEFAULT_ROUND_SIZE, &mut rng);
            let indices: HashSet<usize> = round.iter().map(|q| q.catalog_index()).collect();
            assert_eq!(indices.len(), round.len());
            for question in &round {
                let source = &bank.questions()[question.catalog_index()];
                assert_eq!(question.prompt(), source.prompt());
            }
        }
        Ok(())
    }

    #[test]
    fn test_round_is_clamped_to_catalog() -> Fallible<()> {
        let bank = animals()?;
        let mut rng = TinyRng::from_seed(9);
        let round = bank.draw_round(1000, &mut rng);
        assert_eq!(round.len(), bank.questions().len());
        Ok(())
    }

    #[test]
    fn test_round_of_zero() -> Fallible<()> {
        let bank = animals()?;
        let mut rng = TinyRng::from_seed(9);
        assert!(bank.draw_round(0, &mut rng).is_empty());
        Ok(())
    }

    #[test]
    fn test_options_are_a_permutation() -> Fallible<()> {
        let bank = animals()?;
        let mut rng = TinyRng::from_seed(5);
        for question in bank.draw_round(DEFAULT_ROUND_SIZE, &mut rng) {
            let mut drawn = question.options().to_vec();
            let mut canonical = bank.questions()[question.catalog_index()].options().to_vec();
            drawn.sort();
            canonical.sort();
            assert_eq!(drawn, canonical);
            let hits = question
                .options()
                .iter()
                .filter(|o| question.accepts(o))
                .count();
            assert_eq!(hits, 1);
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_same_round() -> Fallible<()> {
        let bank = animals()?;
        let a = bank.draw_round(DEFAULT_ROUND_SIZE, &mut TinyRng::from_seed(77));
        let b = bank.draw_round(DEFAULT_ROUND_SIZE, &mut TinyRng::from_seed(77));
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_drawing_does_not_mutate_catalog() -> Fallible<()> {
        let bank = animals()?;
        let before = bank.questions().to_vec();
        let mut rng = TinyRng::from_seed(3);
        for _ in 0..5 {
            bank.draw_round(DEFAULT_ROUND_SIZE, &mut rng);
        }
        assert_eq!(bank.questions(), before.as_slice());
        Ok(())
    }
}
