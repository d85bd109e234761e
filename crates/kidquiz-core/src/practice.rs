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

//! Letter-tracing practice. The presentation layer decides when a letter
//! has been traced; this only tracks where the child is and what is done.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::bank::builtin::HEBREW_LETTERS;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LetterPractice {
    letters: Vec<String>,
    current: usize,
    completed: BTreeSet<usize>,
}

impl LetterPractice {
    pub fn new() -> Self {
        Self::with_letters(HEBREW_LETTERS.iter().map(|l| l.to_string()).collect())
    }

    pub fn with_letters(letters: Vec<String>) -> Self {
        Self {
            letters,
            current: 0,
            completed: BTreeSet::new(),
        }
    }

    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_letter(&self) -> Option<&str> {
        self.letters.get(self.current).map(String::as_str)
    }

    fn is_last(&self) -> bool {
        self.current + 1 >= self.letters.len()
    }

    /// Record the current letter as traced. Returns whether the caller should
    /// move on to the next letter.
    pub fn mark_completed(&mut self) -> bool {
        if self.letters.is_empty() {
            return false;
        }
        self.completed.insert(self.current);
        !self.is_last()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Move forward one letter. Does nothing on the last letter.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move back one letter. Does nothing on the first letter.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// The next button only lights up once the current letter is traced.
    pub fn can_go_next(&self) -> bool {
        self.is_completed(self.current) && !self.is_last()
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Fraction of letters traced so far.
    pub fn progress(&self) -> f64 {
        if self.letters.is_empty() {
            0.0
        } else {
            self.completed.len() as f64 / self.letters.len() as f64
        }
    }
}

impl Default for LetterPractice {
    fn default() -> Self {
        Self::new()
    }
}
