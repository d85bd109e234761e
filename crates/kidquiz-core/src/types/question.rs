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

use serde::Deserialize;
use serde::Serialize;

use crate::types::expression::Expression;

/// What the player is shown. Picture keys are opaque: the presentation layer
/// resolves them to an image, and the core only ever looks at their first
/// character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Prompt {
    Picture(String),
    Arithmetic(Expression),
}

impl Prompt {
    /// The resource key for this prompt.
    pub fn key(&self) -> String {
        match self {
            Prompt::Picture(key) => key.clone(),
            Prompt::Arithmetic(expr) => expr.to_string(),
        }
    }

    pub fn correct_answer(&self) -> String {
        match self {
            Prompt::Picture(key) => key.chars().next().map(String::from).unwrap_or_default(),
            Prompt::Arithmetic(expr) => expr
                .evaluate()
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }

    /// Whether `value` is the right answer. Numeric prompts compare as
    /// integers, and anything that doesn't parse is simply wrong. An
    /// expression that overflows accepts nothing.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Prompt::Picture(_) => value == self.correct_answer(),
            Prompt::Arithmetic(expr) => expr
                .evaluate()
                .is_some_and(|answer| value.parse::<i64>().is_ok_and(|n| n == answer)),
        }
    }
}

/// A catalog question. Options are stored in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    prompt: Prompt,
    options: Vec<String>,
}

impl Question {
    /// Callers are responsible for the option invariants; the banks validate
    /// before constructing.
    pub(crate) fn new(prompt: Prompt, options: Vec<String>) -> Self {
        Self { prompt, options }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> String {
        self.prompt.correct_answer()
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.prompt.accepts(value)
    }
}

/// A question as it appears in one round, with its own option order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundQuestion {
    catalog_index: usize,
    prompt: Prompt,
    options: Vec<String>,
}

impl RoundQuestion {
    pub(crate) fn new(catalog_index: usize, prompt: Prompt, options: Vec<String>) -> Self {
        Self {
            catalog_index,
            prompt,
            options,
        }
    }

    /// Position of the source question in the bank's catalog.
    pub fn catalog_index(&self) -> usize {
        self.catalog_index
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> String {
        self.prompt.correct_answer()
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.prompt.accepts(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;
    use crate::types::expression::Operator;

    #[test]
    fn test_picture_answer_is_first_letter() {
        let prompt = Prompt::Picture("אריה".to_string());
        assert_eq!(prompt.correct_answer(), "א");
        assert!(prompt.accepts("א"));
        assert!(!prompt.accepts("ל"));
        assert!(!prompt.accepts("א "));
    }

    #[test]
    fn test_picture_answer_with_geresh() {
        let prompt = Prompt::Picture("ג׳ירפה".to_string());
        assert_eq!(prompt.correct_answer(), "ג");
    }

    #[test]
    fn test_arithmetic_answer() {
        let prompt = Prompt::Arithmetic(Expression::new(3, Operator::Add, 4));
        assert_eq!(prompt.correct_answer(), "7");
        assert_eq!(prompt.key(), "3 + 4");
        assert!(prompt.accepts("7"));
        assert!(!prompt.accepts("8"));
        assert!(!prompt.accepts("seven"));
        assert!(!prompt.accepts(""));
    }

    #[test]
    fn test_overflowing_arithmetic_accepts_nothing() {
        let prompt = Prompt::Arithmetic(Expression::new(i64::MAX, Operator::Add, 1));
        assert_eq!(prompt.correct_answer(), "");
        assert!(!prompt.accepts(&i64::MIN.to_string()));
        assert!(!prompt.accepts("0"));
    }

    #[test]
    fn test_serialize_round_question() -> Fallible<()> {
        let question = RoundQuestion::new(
            4,
            Prompt::Picture("דג".to_string()),
            vec!["ת".to_string(), "ד".to_string(), "ר".to_string()],
        );
        let json = serde_json::to_string(&question)?;
        assert_eq!(
            json,
            r#"{"catalog_index":4,"prompt":{"kind":"picture","value":"דג"},"options":["ת","ד","ר"]}"#
        );
        Ok(())
    }
}
