// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "orange.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub project: ConfigSectionProject,
}

impl ConfigRoot {
    /// Reads `orange.toml` from `directory`, falling back to the defaults when
    /// the project has none.
    pub fn load(directory: &Path) -> anyhow::Result<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Directories to scan for source files, relative to `directory`.
    #[must_use]
    pub fn source_directories(&self, directory: &Path) -> Vec<PathBuf> {
        if self.project.sources.is_empty() {
            return vec![directory.to_path_buf()];
        }

        self.project.sources.iter()
            .map(|source| directory.join(source))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionProject {
    pub name: String,
    pub sources: Vec<PathBuf>,
}
