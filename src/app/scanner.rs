use crate::app::error::SynthError;
use crate::app::models::{RepositoryDescriptor, RuntimeConfig, DEFAULT_MARKER};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Decides whether a directory under the scan root is a package source.
pub trait RepositoryDetector {
    fn is_repository(&self, path: &Path) -> bool;
}

/// Matches working trees by the name of their metadata directory (`.git`, `.hg`, ...).
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    markers: Vec<String>,
}

impl MarkerDetector {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }
}

impl Default for MarkerDetector {
    fn default() -> Self {
        Self::new(vec![DEFAULT_MARKER.to_string()])
    }
}

impl RepositoryDetector for MarkerDetector {
    fn is_repository(&self, path: &Path) -> bool {
        // A `.git` *file* (linked worktree) does not count.
        self.markers.iter().any(|m| path.join(m).is_dir())
    }
}

pub struct Scanner {
    root: PathBuf,
    detector: Box<dyn RepositoryDetector>,
    exclude_set: GlobSet,
    skip_hidden: bool,
}

impl Scanner {
    pub fn new(root: PathBuf, config: &RuntimeConfig) -> Result<Self, SynthError> {
        let detector = if config.markers.is_empty() {
            MarkerDetector::default()
        } else {
            MarkerDetector::new(config.markers.clone())
        };

        Ok(Self {
            root: absolutize(&root)?,
            detector: Box::new(detector),
            exclude_set: build_globset(&config.exclude)?,
            skip_hidden: config.skip_hidden,
        })
    }

    /// Swap the repository predicate without touching the scan loop.
    pub fn with_detector(mut self, detector: impl RepositoryDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the immediate children of the root and keeps the ones the detector accepts.
    /// Results come back sorted by file name.
    pub fn scan(&self) -> Result<Vec<RepositoryDescriptor>, SynthError> {
        // The walker reports an unreadable root as a per-entry error, so check it up front.
        fs::read_dir(&self.root).map_err(|source| SynthError::Scan {
            path: self.root.clone(),
            source,
        })?;

        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(1))
            .standard_filters(false)
            .hidden(self.skip_hidden)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut repositories = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    if entry.depth() == 0 {
                        continue;
                    }
                    if let Some(descriptor) = self.process_entry(entry.path()) {
                        repositories.push(descriptor);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        Ok(repositories)
    }

    fn process_entry(&self, path: &Path) -> Option<RepositoryDescriptor> {
        // Follows symlinks, so a linked checkout still counts.
        if !path.is_dir() {
            return None;
        }

        let relative = diff_paths(path, &self.root)?;
        if self.exclude_set.is_match(&relative) {
            log::debug!("Excluded {}", relative.display());
            return None;
        }

        if !self.detector.is_repository(path) {
            log::debug!("Not a repository: {}", path.display());
            return None;
        }

        Some(RepositoryDescriptor::vcs(path.to_path_buf()))
    }
}

/// Anchors a relative root at the current directory. Symlinks are left alone so
/// emitted urls match the paths the user passed in.
fn absolutize(root: &Path) -> Result<PathBuf, SynthError> {
    let joined = if root.is_absolute() {
        root.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|source| SynthError::Scan {
                path: root.to_path_buf(),
                source,
            })?
            .join(root)
    };

    Ok(joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, SynthError> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).map_err(|source| SynthError::Pattern {
            pattern: pat.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| SynthError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}
