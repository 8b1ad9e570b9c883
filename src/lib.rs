//! Generates a Satis mirror configuration from the version-control checkouts
//! found directly under a scan root.

pub mod app;

pub use app::error::SynthError;
pub use app::models::{ArchiveFormat, ArchiveSettings, MirrorConfig, RepositoryDescriptor, RuntimeConfig};
pub use app::{generate, synthesize};
