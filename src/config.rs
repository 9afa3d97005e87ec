// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Binaries used for delegated formatting and analysis. Overridable when a
/// tool lives under a different name or path (e.g. a venv).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCommands {
    #[serde(default = "default_autopep8")]
    pub autopep8: String,

    #[serde(default = "default_black")]
    pub black: String,

    #[serde(default = "default_isort")]
    pub isort: String,

    #[serde(default = "default_radon")]
    pub radon: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            autopep8: default_autopep8(),
            black: default_black(),
            isort: default_isort(),
            radon: default_radon(),
        }
    }
}

fn default_autopep8() -> String {
    "autopep8".into()
}
fn default_black() -> String {
    "black".into()
}
fn default_isort() -> String {
    "isort".into()
}
fn default_radon() -> String {
    "radon".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound on submitted source size.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    #[serde(default)]
    pub tools: ToolCommands,
}

fn default_max_input_bytes() -> usize {
    1_048_576
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            tools: ToolCommands::default(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > project config > defaults.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.codegroom.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".codegroom.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables; __ separates nested keys
        // (e.g. CODEGROOM_TOOLS__BLACK)
        figment = figment.merge(Env::prefixed("CODEGROOM_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "codegroom").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if !(1_024..=67_108_864).contains(&self.max_input_bytes) {
            return Err(Error::Config(format!(
                "max_input_bytes must be 1024–67108864, got {}",
                self.max_input_bytes
            )));
        }

        for (name, bin) in [
            ("tools.autopep8", &self.tools.autopep8),
            ("tools.black", &self.tools.black),
            ("tools.isort", &self.tools.isort),
            ("tools.radon", &self.tools.radon),
        ] {
            if bin.trim().is_empty() {
                return Err(Error::Config(format!("{name} cannot be empty")));
            }
        }

        Ok(())
    }

    /// Create a commented default config file.
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# codegroom configuration

# Maximum size of submitted source, in bytes
max_input_bytes = 1048576

# Binaries for delegated formatting and analysis.
# Point these at a venv or absolute path if needed.
[tools]
autopep8 = "autopep8"
black = "black"
isort = "isort"
radon = "radon"
"#;

        fs::write(&path, content)?;
        Ok(path)
    }
}
