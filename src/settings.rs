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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use kidquiz_core::CatalogBank;
use kidquiz_core::DEFAULT_ATTEMPTS_PER_QUESTION;
use kidquiz_core::DEFAULT_ROUND_SIZE;
use kidquiz_core::GameMode;
use kidquiz_core::SessionConfig;
use kidquiz_core::error::Fallible;
use kidquiz_core::error::fail;
use kidquiz_core::parse_catalog;
use serde::Deserialize;

/// Looked up in the working directory when `--config` isn't given.
pub const SETTINGS_FILE: &str = "kidquiz.toml";

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mode: GameMode,
    pub round_size: usize,
    pub attempts_per_question: usize,
    /// A custom catalog file. Relative paths are resolved against the
    /// directory of the settings file.
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Animals,
            round_size: DEFAULT_ROUND_SIZE,
            attempts_per_question: DEFAULT_ATTEMPTS_PER_QUESTION,
            catalog: None,
        }
    }
}

impl Settings {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            round_size: self.round_size,
            attempts_per_question: self.attempts_per_question,
        }
    }

    /// Merge the command-line game selection over the file's. A `--mode`
    /// without `--catalog` replaces the file's catalog as well as its mode.
    pub fn game_source(
        &self,
        mode: Option<GameMode>,
        catalog: Option<PathBuf>,
    ) -> (GameMode, Option<PathBuf>) {
        match (mode, catalog) {
            (mode, Some(catalog)) => (mode.unwrap_or(self.mode), Some(catalog)),
            (Some(mode), None) => (mode, None),
            (None, None) => (self.mode, self.catalog.clone()),
        }
    }
}

pub fn parse_settings(text: &str) -> Fallible<Settings> {
    Ok(toml::from_str(text)?)
}

/// Load settings from `path`, or from `kidquiz.toml` in the working
/// directory if it exists, or fall back to the defaults.
pub fn load_settings(path: Option<&Path>) -> Fallible<Settings> {
    let path: PathBuf = match path {
        Some(path) => {
            if !path.exists() {
                return fail(format!(
                    "settings file does not exist: {}",
                    path.display()
                ));
            }
            path.to_path_buf()
        }
        None => {
            let default = PathBuf::from(SETTINGS_FILE);
            if !default.exists() {
                log::debug!("No {SETTINGS_FILE} found; using default settings.");
                return Ok(Settings::default());
            }
            default
        }
    };
    log::debug!("Loading settings from {}", path.display());
    let mut settings = parse_settings(&read_to_string(&path)?)?;
    if let Some(catalog) = &settings.catalog {
        if catalog.is_relative() {
            if let Some(parent) = path.parent() {
                settings.catalog = Some(parent.join(catalog));
            }
        }
    }
    Ok(settings)
}

/// Read and validate a TOML catalog file.
pub fn load_catalog_file(path: &Path) -> Fallible<CatalogBank> {
    if !path.exists() {
        return fail(format!("catalog file does not exist: {}", path.display()));
    }
    let text = read_to_string(path)?;
    let source_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("catalog")
        .to_string();
    Ok(parse_catalog(&source_name, &text)?)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use kidquiz_core::QuestionBank;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults() -> Fallible<()> {
        let settings = parse_settings("")?;
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.session_config(), SessionConfig::default());
        Ok(())
    }

    #[test]
    fn test_parse() -> Fallible<()> {
        let settings = parse_settings(
            r#"
mode = "numbers-stage2"
round_size = 5
attempts_per_question = 3
"#,
        )?;
        assert_eq!(settings.mode, GameMode::NumbersStage2);
        assert_eq!(settings.round_size, 5);
        assert_eq!(settings.attempts_per_question, 3);
        assert_eq!(settings.catalog, None);
        Ok(())
    }

    #[test]
    fn test_mode_flag_replaces_file_catalog() -> Fallible<()> {
        let settings = parse_settings(
            r#"
mode = "transportation"
catalog = "farm.toml"
"#,
        )?;
        let farm = Some(PathBuf::from("farm.toml"));
        let sea = Some(PathBuf::from("sea.toml"));
        assert_eq!(
            settings.game_source(None, None),
            (GameMode::Transportation, farm.clone())
        );
        assert_eq!(
            settings.game_source(Some(GameMode::NumbersStage1), None),
            (GameMode::NumbersStage1, None)
        );
        assert_eq!(
            settings.game_source(None, sea.clone()),
            (GameMode::Transportation, sea.clone())
        );
        assert_eq!(
            settings.game_source(Some(GameMode::Animals), sea.clone()),
            (GameMode::Animals, sea)
        );
        Ok(())
    }

    #[test]
    fn test_unknown_key() {
        assert!(parse_settings("volume = 11").is_err());
    }

    #[test]
    fn test_unknown_mode() {
        assert!(parse_settings("mode = \"colours\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = load_settings(Some(Path::new("./derpherp.toml")));
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: settings file does not exist: ./derpherp.toml"
        );
    }

    #[test]
    fn test_relative_catalog_path() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("kidquiz.toml");
        write(&path, "catalog = \"farm.toml\"\n")?;
        let settings = load_settings(Some(&path))?;
        assert_eq!(settings.catalog, Some(dir.path().join("farm.toml")));
        Ok(())
    }

    #[test]
    fn test_load_catalog_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("farm.toml");
        write(
            &path,
            r#"
[[question]]
prompt = "פרה"
options = ["פ", "ע", "י"]

[[question]]
prompt = "סוס"
options = ["ס", "ו", "ש"]
"#,
        )?;
        let bank = load_catalog_file(&path)?;
        assert_eq!(bank.name(), "farm");
        assert_eq!(bank.questions().len(), 2);
        Ok(())
    }

    #[test]
    fn test_load_invalid_catalog_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.toml");
        write(
            &path,
            r#"
[[question]]
prompt = "פרה"
options = ["ע", "י", "ש"]
"#,
        )?;
        let err = load_catalog_file(&path).err().unwrap();
        assert_eq!(
            err.to_string(),
            "error: Catalog error: correct answer 'פ' is not among the options. Location: broken.toml, entry 1"
        );
        Ok(())
    }
}
