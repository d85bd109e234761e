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

use std::path::PathBuf;

use kidquiz_core::GameMode;
use kidquiz_core::QuestionBank;
use kidquiz_core::TinyRng;
use kidquiz_core::error::Fallible;

use crate::settings::load_catalog_file;

/// Validate every built-in game and, if given, a catalog file. Prints one
/// line per catalog.
pub fn check_catalogs(catalog: Option<PathBuf>) -> Fallible<()> {
    for (name, count) in check_report(catalog)? {
        println!("{name}: {count} questions");
    }
    println!("All catalogs are valid.");
    Ok(())
}

pub fn check_report(catalog: Option<PathBuf>) -> Fallible<Vec<(String, usize)>> {
    let mut rng = TinyRng::from_seed(0);
    let mut report = Vec::new();
    for mode in GameMode::ALL {
        let bank = mode.bank(&mut rng)?;
        report.push((mode.to_string(), bank.questions().len()));
    }
    if let Some(path) = catalog {
        let bank = load_catalog_file(&path)?;
        report.push((bank.name().to_string(), bank.questions().len()));
    }
    Ok(report)
}
