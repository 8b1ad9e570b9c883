use crate::app::cli::Cli;
use crate::app::models::{
    ArchiveFormat, ArchiveSettings, MirrorConfig, RuntimeConfig, DEFAULT_ARCHIVE_DIR,
    DEFAULT_HOMEPAGE, DEFAULT_MARKER, DEFAULT_NAME,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCAN_ROOT: &str = "/repos";
pub const DEFAULT_OUTPUT: &str = "/satis.json";

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct SettingsFile {
    scan_root: Option<PathBuf>,
    output: Option<PathBuf>,
    name: Option<String>,
    homepage: Option<String>,
    require_all: Option<bool>,
    markers: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    skip_hidden: Option<bool>,
    #[serde(default)]
    archive: ArchiveOverrides,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct ArchiveOverrides {
    directory: Option<String>,
    format: Option<ArchiveFormat>,
    prefix_url: Option<String>,
    skip_dev: Option<bool>,
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("satis-gen").join("config.toml"))
}

/// An explicit path must exist; the default location is optional.
fn load_settings_file(explicit: Option<&Path>) -> Result<SettingsFile> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(SettingsFile::default()),
        },
    };

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: SettingsFile = toml::from_str(&content)
        .context(format!("Failed to parse {:?}", config_path))?;

    log::debug!("Loaded settings from {}", config_path.display());
    Ok(parsed)
}

fn merge_vecs(file_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = file_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// CLI (and env) > settings file > built-in defaults.
fn merge(cli: Cli, file: SettingsFile) -> RuntimeConfig {
    let homepage = cli
        .homepage
        .or(file.homepage)
        .unwrap_or_else(|| DEFAULT_HOMEPAGE.to_string());

    let archive = ArchiveSettings {
        directory: file
            .archive
            .directory
            .unwrap_or_else(|| DEFAULT_ARCHIVE_DIR.to_string()),
        format: cli
            .archive_format
            .or(file.archive.format)
            .unwrap_or_default(),
        prefix_url: file.archive.prefix_url.unwrap_or_else(|| homepage.clone()),
        skip_dev: file.archive.skip_dev.unwrap_or(false),
    };

    let mut markers = merge_vecs(file.markers, cli.marker);
    if markers.is_empty() {
        markers.push(DEFAULT_MARKER.to_string());
    }

    RuntimeConfig {
        scan_root: cli
            .scan_root
            .or(file.scan_root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCAN_ROOT)),
        output: cli
            .output
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        to_stdout: cli.stdout,
        markers,
        exclude: merge_vecs(file.exclude, cli.exclude),
        skip_hidden: cli.skip_hidden || file.skip_hidden.unwrap_or(false),
        template: MirrorConfig {
            name: cli
                .name
                .or(file.name)
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            homepage,
            repositories: Vec::new(),
            require_all: file.require_all.unwrap_or(true),
            archive,
        },
    }
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let file = load_settings_file(cli.config.as_deref())?;
    Ok(merge(cli, file))
}
