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

//! WASM bindings for kidquiz - lets a browser or webview presentation layer
//! drive quiz sessions. Structured values cross the boundary as JSON.

use std::fmt::Display;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use kidquiz_core::bank::AnyBank;
use kidquiz_core::error::Fallible;
use kidquiz_core::mode::GameMode;
use kidquiz_core::parse_catalog;
use kidquiz_core::practice::LetterPractice;
use kidquiz_core::rng::TinyRng;
use kidquiz_core::session::QuizSession;
use kidquiz_core::session::SessionConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"kidquiz WASM initialized".into());
}

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// A seed from the platform's entropy source, falling back to the clock.
fn random_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => js_sys::Date::now() as u64,
    }
}

fn session_config(round_size: Option<usize>, attempts: Option<usize>) -> SessionConfig {
    let defaults = SessionConfig::default();
    SessionConfig {
        round_size: round_size.unwrap_or(defaults.round_size),
        attempts_per_question: attempts.unwrap_or(defaults.attempts_per_question),
    }
}

fn mode_session(mode: &str, seed: u64, config: SessionConfig) -> Fallible<QuizSession<AnyBank>> {
    let mode: GameMode = mode.parse()?;
    let mut rng = TinyRng::from_seed(seed);
    let bank = mode.bank(&mut rng)?;
    QuizSession::new(bank, config, rng)
}

fn catalog_session(
    catalog_toml: &str,
    seed: u64,
    config: SessionConfig,
) -> Fallible<QuizSession<AnyBank>> {
    let bank = parse_catalog("catalog.toml", catalog_toml)?;
    QuizSession::new(bank.into(), config, TinyRng::from_seed(seed))
}

/// A quiz session managed from JavaScript.
#[wasm_bindgen]
pub struct QuizApp {
    session: QuizSession<AnyBank>,
}

#[wasm_bindgen]
impl QuizApp {
    /// Start a session for a built-in game mode, e.g. `"animals"`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        mode: &str,
        seed: Option<u64>,
        round_size: Option<usize>,
        attempts: Option<usize>,
    ) -> Result<QuizApp, JsValue> {
        let seed = seed.unwrap_or_else(random_seed);
        let session = mode_session(mode, seed, session_config(round_size, attempts))
            .map_err(js_error)?;
        Ok(Self { session })
    }

    /// Start a session over a TOML catalog.
    #[wasm_bindgen]
    pub fn from_catalog(
        catalog_toml: &str,
        seed: Option<u64>,
        round_size: Option<usize>,
        attempts: Option<usize>,
    ) -> Result<QuizApp, JsValue> {
        let seed = seed.unwrap_or_else(random_seed);
        let session = catalog_session(catalog_toml, seed, session_config(round_size, attempts))
            .map_err(js_error)?;
        Ok(Self { session })
    }

    /// Draw a new round and reset the score.
    #[wasm_bindgen]
    pub fn start_round(&mut self) {
        self.session.start_new_round();
    }

    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[wasm_bindgen]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[wasm_bindgen]
    pub fn round_length(&self) -> usize {
        self.session.round().len()
    }

    /// The current question as JSON, or `undefined` once the round is over.
    #[wasm_bindgen]
    pub fn current_question_json(&self) -> Option<String> {
        self.session.current_question().map(|q| to_json(q))
    }

    /// Submit an answer. Returns the outcome as JSON; throws if the round is
    /// already complete.
    #[wasm_bindgen]
    pub fn submit_answer(&mut self, value: &str) -> Result<String, JsValue> {
        let outcome = self.session.submit_answer(value).map_err(js_error)?;
        Ok(to_json(&outcome))
    }

    #[wasm_bindgen]
    pub fn scoreboard_json(&self) -> String {
        to_json(&self.session.scoreboard())
    }

    #[wasm_bindgen]
    pub fn summary_json(&self) -> String {
        to_json(&self.session.summary())
    }

    #[wasm_bindgen]
    pub fn success_percentage(&self) -> f64 {
        self.session.success_percentage()
    }
}

/// Letter-tracing practice progress.
#[wasm_bindgen]
pub struct PracticeApp {
    practice: LetterPractice,
}

#[wasm_bindgen]
impl PracticeApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            practice: LetterPractice::new(),
        }
    }

    #[wasm_bindgen]
    pub fn current_letter(&self) -> Option<String> {
        self.practice.current_letter().map(String::from)
    }

    #[wasm_bindgen]
    pub fn current_index(&self) -> usize {
        self.practice.current_index()
    }

    /// Call when the child finishes tracing. Returns whether to move on.
    #[wasm_bindgen]
    pub fn mark_completed(&mut self) -> bool {
        self.practice.mark_completed()
    }

    #[wasm_bindgen]
    pub fn next(&mut self) -> bool {
        self.practice.next()
    }

    #[wasm_bindgen]
    pub fn previous(&mut self) -> bool {
        self.practice.previous()
    }

    #[wasm_bindgen]
    pub fn can_go_next(&self) -> bool {
        self.practice.can_go_next()
    }

    #[wasm_bindgen]
    pub fn can_go_back(&self) -> bool {
        self.practice.can_go_back()
    }

    #[wasm_bindgen]
    pub fn progress(&self) -> f64 {
        self.practice.progress()
    }
}

impl Default for PracticeApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_session() -> Fallible<()> {
        let session = mode_session("numbers-stage2", 7, session_config(Some(4), None))?;
        assert_eq!(session.round().len(), 4);
        assert_eq!(session.config().attempts_per_question, 2);
        Ok(())
    }

    #[test]
    fn test_unknown_mode() {
        let result = mode_session("colours", 7, SessionConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_session() -> Fallible<()> {
        let text = r#"
[[question]]
prompt = "דב"
options = ["ד", "ב", "ש"]
"#;
        let mut session = catalog_session(text, 1, SessionConfig::default())?;
        assert_eq!(session.round().len(), 1);
        let outcome = session.submit_answer("ד")?;
        let json = to_json(&outcome);
        assert!(json.starts_with(r#"{"kind":"correct""#));
        assert!(json.ends_with(r#""round_complete":true}"#));
        Ok(())
    }

    #[test]
    fn test_json_snapshots() -> Fallible<()> {
        let session = mode_session("animals", 3, SessionConfig::default())?;
        assert_eq!(
            to_json(&session.scoreboard()),
            r#"{"correct":0,"wrong":0,"answered":0,"total":10}"#
        );
        assert_eq!(
            to_json(&session.summary()),
            r#"{"score":0,"total":10,"percentage":0,"tier":"keep_practicing"}"#
        );
        Ok(())
    }
}
