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

use clap::Parser;
use kidquiz_core::GameMode;
use kidquiz_core::SessionConfig;
use kidquiz_core::error::Fallible;

use crate::cmd::catalog::CatalogFormat;
use crate::cmd::catalog::print_catalog;
use crate::cmd::check::check_catalogs;
use crate::cmd::play::PlayConfig;
use crate::cmd::play::play;
use crate::settings::load_settings;
use crate::utils::clock_seed;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Play a round in the terminal.
    Play {
        /// Which game to play: animals, transportation, numbers, or numbers-stage2.
        #[arg(long)]
        mode: Option<GameMode>,
        /// Play questions from this TOML catalog file instead of a built-in game.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Seed for shuffling. By default, the system clock is used.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of questions in the round. Default is 10.
        #[arg(long)]
        round_size: Option<usize>,
        /// Tries per question before it counts as wrong. Default is 2.
        #[arg(long)]
        attempts: Option<usize>,
        /// Path to the settings file. By default, `kidquiz.toml` in the current directory is used if present.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Check that the built-in catalogs, and optionally a catalog file, are valid.
    Check {
        /// A TOML catalog file to validate as well.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print every question in a catalog.
    Catalog {
        /// Which game's catalog to print. Default is animals.
        #[arg(long)]
        mode: Option<GameMode>,
        /// Print this TOML catalog file instead of a built-in one.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Seed for generating arithmetic distractors. Default is 0.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Which output format to use.
        #[arg(long, default_value_t = CatalogFormat::Text)]
        format: CatalogFormat,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Play {
            mode,
            catalog,
            seed,
            round_size,
            attempts,
            config,
        } => {
            let settings = load_settings(config.as_deref())?;
            let seed = match seed {
                Some(seed) => seed,
                None => clock_seed()?,
            };
            let defaults = settings.session_config();
            let (mode, catalog) = settings.game_source(mode, catalog);
            let config = PlayConfig {
                mode,
                catalog,
                seed,
                session: SessionConfig {
                    round_size: round_size.unwrap_or(defaults.round_size),
                    attempts_per_question: attempts.unwrap_or(defaults.attempts_per_question),
                },
            };
            play(config)
        }
        Command::Check { catalog } => check_catalogs(catalog),
        Command::Catalog {
            mode,
            catalog,
            seed,
            format,
        } => print_catalog(mode.unwrap_or(GameMode::Animals), catalog, seed, format),
    }
}
