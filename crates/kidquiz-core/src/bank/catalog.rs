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

use std::collections::HashSet;
use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;

use crate::bank::OPTION_COUNT;
use crate::bank::QuestionBank;
use crate::bank::builtin::ANIMALS;
use crate::bank::builtin::CatalogLiteral;
use crate::bank::builtin::TRANSPORTATION;
use crate::types::expression::Expression;
use crate::types::question::Prompt;
use crate::types::question::Question;

/// A fixed, validated list of questions.
#[derive(Clone, Debug)]
pub struct CatalogBank {
    name: String,
    questions: Vec<Question>,
}

#[derive(Debug, PartialEq)]
pub struct CatalogError {
    pub message: String,
    pub source_name: String,
    /// Zero-based position of the offending entry, if the error is about one.
    pub index: Option<usize>,
}

impl CatalogError {
    fn new(message: impl Into<String>, source_name: &str, index: Option<usize>) -> Self {
        CatalogError {
            message: message.into(),
            source_name: source_name.to_string(),
            index,
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "{} Location: {}, entry {}",
                self.message,
                self.source_name,
                index + 1
            ),
            None => write!(f, "{} Location: {}", self.message, self.source_name),
        }
    }
}

impl Error for CatalogError {}

impl CatalogBank {
    /// Validate `entries` and build a bank from them. Options are trimmed.
    /// An entry whose prompt was already seen is dropped with a warning.
    pub fn new(
        name: impl Into<String>,
        entries: Vec<(Prompt, Vec<String>)>,
    ) -> Result<Self, CatalogError> {
        let name: String = name.into();
        let mut seen: HashSet<Prompt> = HashSet::new();
        let mut questions = Vec::with_capacity(entries.len());
        for (idx, (prompt, options)) in entries.into_iter().enumerate() {
            let question = validate_entry(&name, idx, prompt, options)?;
            if !seen.insert(question.prompt().clone()) {
                log::warn!(
                    "Duplicate prompt '{}' in catalog '{name}' (entry {}); skipping.",
                    question.prompt().key(),
                    idx + 1
                );
                continue;
            }
            questions.push(question);
        }
        if questions.is_empty() {
            return Err(CatalogError::new("catalog has no questions.", &name, None));
        }
        Ok(Self { name, questions })
    }

    pub fn animals() -> Result<Self, CatalogError> {
        Self::from_literals("animals", ANIMALS)
    }

    pub fn transportation() -> Result<Self, CatalogError> {
        Self::from_literals("transportation", TRANSPORTATION)
    }

    fn from_literals(name: &str, literals: &[CatalogLiteral]) -> Result<Self, CatalogError> {
        let entries = literals
            .iter()
            .map(|(key, options)| {
                (
                    Prompt::Picture(key.to_string()),
                    options.iter().map(|o| o.to_string()).collect(),
                )
            })
            .collect();
        Self::new(name, entries)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl QuestionBank for CatalogBank {
    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

fn validate_entry(
    name: &str,
    idx: usize,
    prompt: Prompt,
    options: Vec<String>,
) -> Result<Question, CatalogError> {
    let err = |message: String| CatalogError::new(message, name, Some(idx));
    let prompt = match prompt {
        Prompt::Picture(key) => {
            let key = key.trim().to_string();
            if key.is_empty() {
                return Err(err("empty prompt.".to_string()));
            }
            Prompt::Picture(key)
        }
        Prompt::Arithmetic(expr) => {
            if expr.evaluate().is_none() {
                return Err(err(format!("expression '{expr}' overflows.")));
            }
            Prompt::Arithmetic(expr)
        }
    };
    let mut options: Vec<String> = options.into_iter().map(|o| o.trim().to_string()).collect();
    if options.len() != OPTION_COUNT {
        return Err(err(format!(
            "expected {OPTION_COUNT} options, found {}.",
            options.len()
        )));
    }
    let mut unique: HashSet<String> = HashSet::new();
    for option in &mut options {
        if option.is_empty() {
            return Err(err("empty option.".to_string()));
        }
        // Numeric options are compared and stored by value: "05" becomes "5".
        if matches!(prompt, Prompt::Arithmetic(_)) {
            let value: i64 = option
                .parse()
                .map_err(|_| err(format!("option '{option}' is not a number.")))?;
            *option = value.to_string();
        }
        if !unique.insert(option.clone()) {
            return Err(err(format!("duplicate option '{option}'.")));
        }
    }
    let hits = options.iter().filter(|o| prompt.accepts(o)).count();
    match hits {
        1 => Ok(Question::new(prompt, options)),
        0 => Err(err(format!(
            "correct answer '{}' is not among the options.",
            prompt.correct_answer()
        ))),
        _ => Err(err(format!(
            "correct answer '{}' appears more than once among the options.",
            prompt.correct_answer()
        ))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    name: Option<String>,
    #[serde(default, rename = "question")]
    questions: Vec<CatalogFileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFileEntry {
    prompt: Option<String>,
    expression: Option<String>,
    options: Vec<String>,
}

/// Parse a TOML catalog:
///
/// ```toml
/// name = "farm"
///
/// [[question]]
/// prompt = "פרה"
/// options = ["פ", "ע", "י"]
///
/// [[question]]
/// expression = "3 + 4"
/// options = ["7", "5", "9"]
/// ```
///
/// `source_name` is used in error messages and as the fallback catalog name.
pub fn parse_catalog(source_name: &str, text: &str) -> Result<CatalogBank, CatalogError> {
    let file: CatalogFile = toml::from_str(text).map_err(|e| {
        CatalogError::new(
            format!("invalid catalog file: {}", e.to_string().trim()),
            source_name,
            None,
        )
    })?;
    let mut entries = Vec::with_capacity(file.questions.len());
    for (idx, entry) in file.questions.into_iter().enumerate() {
        let prompt = match (entry.prompt, entry.expression) {
            (Some(key), None) => Prompt::Picture(key),
            (None, Some(expr)) => {
                let expr: Expression = expr.parse().map_err(|_| {
                    CatalogError::new(
                        format!("malformed expression '{expr}'."),
                        source_name,
                        Some(idx),
                    )
                })?;
                Prompt::Arithmetic(expr)
            }
            _ => {
                return Err(CatalogError::new(
                    "entry must have exactly one of 'prompt' or 'expression'.",
                    source_name,
                    Some(idx),
                ));
            }
        };
        entries.push((prompt, entry.options));
    }
    let name = file.name.unwrap_or_else(|| {
        source_name
            .strip_suffix(".toml")
            .unwrap_or(source_name)
            .to_string()
    });
    CatalogBank::new(name, entries).map_err(|mut e| {
        e.source_name = source_name.to_string();
        e
    })
}
