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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::PathBuf;

use clap::ValueEnum;
use kidquiz_core::GameMode;
use kidquiz_core::Prompt;
use kidquiz_core::QuestionBank;
use kidquiz_core::TinyRng;
use kidquiz_core::error::Fallible;
use serde::Serialize;

use crate::cmd::build_bank;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum CatalogFormat {
    /// One question per line: prompt, options, answer.
    Text,
    /// A JSON array of questions.
    Json,
}

impl Display for CatalogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFormat::Text => write!(f, "text"),
            CatalogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct CatalogRow<'a> {
    prompt: &'a Prompt,
    options: &'a [String],
    correct_answer: String,
}

pub fn print_catalog(
    mode: GameMode,
    catalog: Option<PathBuf>,
    seed: u64,
    format: CatalogFormat,
) -> Fallible<()> {
    let mut rng = TinyRng::from_seed(seed);
    let bank = build_bank(mode, catalog.as_deref(), &mut rng)?;
    println!("{}", render_catalog(&bank, format)?);
    Ok(())
}

pub fn render_catalog(bank: &impl QuestionBank, format: CatalogFormat) -> Fallible<String> {
    match format {
        CatalogFormat::Text => {
            let lines: Vec<String> = bank
                .questions()
                .iter()
                .map(|q| {
                    format!(
                        "{}\t{}\t{}",
                        q.prompt().key(),
                        q.options().join(" "),
                        q.correct_answer()
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        CatalogFormat::Json => {
            let rows: Vec<CatalogRow> = bank
                .questions()
                .iter()
                .map(|q| CatalogRow {
                    prompt: q.prompt(),
                    options: q.options(),
                    correct_answer: q.correct_answer(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use kidquiz_core::ArithmeticBank;
    use kidquiz_core::ArithmeticConfig;
    use kidquiz_core::CatalogBank;

    use super::*;

    #[test]
    fn test_text() -> Fallible<()> {
        let bank = CatalogBank::animals()?;
        let text = render_catalog(&bank, CatalogFormat::Text)?;
        let first = text.lines().next().unwrap();
        assert_eq!(first, "אריה\tא ל ק\tא");
        assert_eq!(text.lines().count(), 38);
        Ok(())
    }

    #[test]
    fn test_json() -> Fallible<()> {
        let mut rng = TinyRng::from_seed(0);
        let bank = ArithmeticBank::generate(ArithmeticConfig::stage1(), &mut rng)?;
        let json = render_catalog(&bank, CatalogFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 64);
        assert_eq!(rows[0]["prompt"]["kind"], "arithmetic");
        assert_eq!(rows[0]["prompt"]["value"]["left"], 1);
        assert_eq!(rows[0]["correct_answer"], "2");
        Ok(())
    }
}
