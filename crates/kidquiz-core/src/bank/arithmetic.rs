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

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::bank::OPTION_COUNT;
use crate::bank::QuestionBank;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::rng::TinyRng;
use crate::types::expression::Expression;
use crate::types::expression::Operator;
use crate::types::question::Prompt;
use crate::types::question::Question;

/// Distractors sit at most this far from the answer.
const MAX_OFFSET: i64 = 3;

/// Operand ranges and the result ceiling for a generated arithmetic catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArithmeticConfig {
    pub addition_left: RangeInclusive<i64>,
    pub addition_right: RangeInclusive<i64>,
    pub subtraction_left: RangeInclusive<i64>,
    pub subtraction_right: RangeInclusive<i64>,
    /// Results (and distractors) lie in `[0, result_ceiling]`.
    pub result_ceiling: i64,
}

impl ArithmeticConfig {
    /// Sums and differences up to 10.
    pub fn stage1() -> Self {
        Self {
            addition_left: 1..=5,
            addition_right: 1..=5,
            subtraction_left: 2..=10,
            subtraction_right: 1..=5,
            result_ceiling: 10,
        }
    }

    /// Sums and differences up to 20.
    pub fn stage2() -> Self {
        Self {
            addition_left: 1..=15,
            addition_right: 1..=5,
            subtraction_left: 5..=20,
            subtraction_right: 1..=5,
            result_ceiling: 20,
        }
    }

    /// Every expression whose result lies in `[0, result_ceiling]`, additions
    /// first.
    pub fn expressions(&self) -> Vec<Expression> {
        let mut result = Vec::new();
        let ops = [
            (Operator::Add, &self.addition_left, &self.addition_right),
            (Operator::Sub, &self.subtraction_left, &self.subtraction_right),
        ];
        for (operator, lefts, rights) in ops {
            for left in lefts.clone() {
                for right in rights.clone() {
                    let expr = Expression::new(left, operator, right);
                    let in_range = expr
                        .evaluate()
                        .is_some_and(|n| (0..=self.result_ceiling).contains(&n));
                    if in_range {
                        result.push(expr);
                    }
                }
            }
        }
        result
    }
}

/// A catalog generated from an [`ArithmeticConfig`].
#[derive(Clone, Debug)]
pub struct ArithmeticBank {
    config: ArithmeticConfig,
    questions: Vec<Question>,
}

impl ArithmeticBank {
    /// Enumerate the expressions and give each one its own distractors.
    pub fn generate(config: ArithmeticConfig, rng: &mut TinyRng) -> Fallible<Self> {
        let expressions = config.expressions();
        if expressions.is_empty() {
            return fail("arithmetic configuration produces no questions.");
        }
        let mut questions = Vec::with_capacity(expressions.len());
        for expr in expressions {
            let answer = expr
                .evaluate()
                .ok_or_else(|| ErrorReport::new(format!("expression '{expr}' overflows.")))?;
            let mut options = vec![answer];
            options.extend(distractors(
                answer,
                config.result_ceiling,
                OPTION_COUNT - 1,
                rng,
            )?);
            let options = options.into_iter().map(|n| n.to_string()).collect();
            questions.push(Question::new(Prompt::Arithmetic(expr), options));
        }
        log::debug!(
            "Generated {} arithmetic questions up to {}.",
            questions.len(),
            config.result_ceiling
        );
        Ok(Self { config, questions })
    }

    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }
}

impl QuestionBank for ArithmeticBank {
    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Pick `count` distinct wrong answers near `answer`, each within
/// `[0, ceiling]`, by nudging the answer up or down by 1 to 3 and rejecting
/// anything out of range or already taken.
pub fn distractors(
    answer: i64,
    ceiling: i64,
    count: usize,
    rng: &mut TinyRng,
) -> Fallible<Vec<i64>> {
    let candidates: BTreeSet<i64> = (1..=MAX_OFFSET)
        .flat_map(|offset| [answer.checked_sub(offset), answer.checked_add(offset)])
        .flatten()
        .filter(|n| (0..=ceiling).contains(n))
        .collect();
    if candidates.len() < count {
        return fail(format!(
            "cannot find {count} distractors for {answer} within [0, {ceiling}]."
        ));
    }
    let mut picked: Vec<i64> = Vec::with_capacity(count);
    while picked.len() < count {
        let offset = rng.range_inclusive(1, MAX_OFFSET);
        let candidate = if rng.coin() {
            answer.checked_add(offset)
        } else {
            answer.checked_sub(offset)
        };
        let candidate = candidate.filter(|n| (0..=ceiling).contains(n) && !picked.contains(n));
        if let Some(candidate) = candidate {
            picked.push(candidate);
        }
    }
    Ok(picked)
}
