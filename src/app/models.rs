use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NAME: &str = "local/packagist";
pub const DEFAULT_HOMEPAGE: &str = "http://localhost:9000";
pub const DEFAULT_ARCHIVE_DIR: &str = "dist";
pub const DEFAULT_MARKER: &str = ".git";

/// Represents the final configuration after merging the settings file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub scan_root: PathBuf,
    pub output: PathBuf,
    pub to_stdout: bool,
    pub markers: Vec<String>,
    pub exclude: Vec<String>,
    pub skip_hidden: bool,
    /// Every field of the generated document except `repositories`.
    pub template: MirrorConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepositoryKind {
    #[serde(rename = "vcs")]
    Vcs,
}

/// One discovered package source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    #[serde(rename = "type")]
    pub kind: RepositoryKind,
    pub url: PathBuf,
}

impl RepositoryDescriptor {
    pub fn vcs(url: PathBuf) -> Self {
        Self {
            kind: RepositoryKind::Vcs,
            url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    #[default]
    Zip,
    Tar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArchiveSettings {
    pub directory: String,
    pub format: ArchiveFormat,
    pub prefix_url: String,
    pub skip_dev: bool,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            directory: DEFAULT_ARCHIVE_DIR.to_string(),
            format: ArchiveFormat::Zip,
            prefix_url: DEFAULT_HOMEPAGE.to_string(),
            skip_dev: false,
        }
    }
}

/// The document consumed by the mirror tool. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MirrorConfig {
    pub name: String,
    pub homepage: String,
    pub repositories: Vec<RepositoryDescriptor>,
    pub require_all: bool,
    pub archive: ArchiveSettings,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            repositories: Vec::new(),
            require_all: true,
            archive: ArchiveSettings::default(),
        }
    }
}

impl MirrorConfig {
    pub fn with_repositories(&self, repositories: Vec<RepositoryDescriptor>) -> Self {
        Self {
            repositories,
            ..self.clone()
        }
    }
}
