use crate::app::error::SynthError;
use crate::app::models::MirrorConfig;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Four-space indented JSON. Slashes are never escaped by serde_json.
    pub fn render(config: &MirrorConfig) -> Result<String, SynthError> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        config.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Renders before touching the target, so an encoding failure leaves any existing file intact.
    pub fn write(config: &MirrorConfig, path: &Path) -> Result<(), SynthError> {
        let document = Self::render(config)?;
        fs::write(path, document).map_err(|source| SynthError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
