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
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::bank::AnyBank;
use crate::bank::arithmetic::ArithmeticBank;
use crate::bank::arithmetic::ArithmeticConfig;
use crate::bank::catalog::CatalogBank;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::rng::TinyRng;

/// The quiz games on the welcome screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameMode {
    /// Match an animal picture to its first letter.
    Animals,
    /// Match a vehicle picture to its first letter.
    Transportation,
    /// Sums and differences up to 10.
    NumbersStage1,
    /// Sums and differences up to 20.
    NumbersStage2,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Animals,
        GameMode::Transportation,
        GameMode::NumbersStage1,
        GameMode::NumbersStage2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Animals => "animals",
            GameMode::Transportation => "transportation",
            GameMode::NumbersStage1 => "numbers",
            GameMode::NumbersStage2 => "numbers-stage2",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, GameMode::NumbersStage1 | GameMode::NumbersStage2)
    }

    /// Build this mode's question bank. Arithmetic modes draw their
    /// distractors from `rng`.
    pub fn bank(&self, rng: &mut TinyRng) -> Fallible<AnyBank> {
        let bank: AnyBank = match self {
            GameMode::Animals => CatalogBank::animals()?.into(),
            GameMode::Transportation => CatalogBank::transportation()?.into(),
            GameMode::NumbersStage1 => {
                ArithmeticBank::generate(ArithmeticConfig::stage1(), rng)?.into()
            }
            GameMode::NumbersStage2 => {
                ArithmeticBank::generate(ArithmeticConfig::stage2(), rng)?.into()
            }
        };
        Ok(bank)
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ErrorReport::new(format!("unknown game mode: {s}")))
    }
}

impl TryFrom<String> for GameMode {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> String {
        mode.to_string()
    }
}
