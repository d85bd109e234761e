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

pub mod catalog;
pub mod check;
pub mod play;

use std::path::Path;

use kidquiz_core::AnyBank;
use kidquiz_core::GameMode;
use kidquiz_core::TinyRng;
use kidquiz_core::error::Fallible;

use crate::settings::load_catalog_file;

/// A catalog file, if given, takes precedence over the game mode.
pub fn build_bank(
    mode: GameMode,
    catalog: Option<&Path>,
    rng: &mut TinyRng,
) -> Fallible<AnyBank> {
    match catalog {
        Some(path) => Ok(load_catalog_file(path)?.into()),
        None => mode.bank(rng),
    }
}
