use crate::app::models::ArchiveFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a Satis configuration from the git checkouts in a directory"
)]
pub struct Cli {
    /// Directory whose immediate subdirectories are scanned (default: /repos)
    #[arg(long, env = "SATIS_GEN_SCAN_ROOT")]
    pub scan_root: Option<PathBuf>,

    /// File the configuration is written to (default: /satis.json)
    #[arg(long, short, env = "SATIS_GEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the configuration instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Settings file to use instead of ~/.config/satis-gen/config.toml
    #[arg(long, env = "SATIS_GEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mirror name
    #[arg(long)]
    pub name: Option<String>,

    /// Mirror homepage, also used as the archive prefix url
    #[arg(long)]
    pub homepage: Option<String>,

    #[arg(long, value_enum)]
    pub archive_format: Option<ArchiveFormat>,

    /// Metadata directory names that mark a repository (e.g., '.git' '.hg')
    #[arg(long, num_args = 1..)]
    pub marker: Option<Vec<String>>,

    /// Patterns for subdirectories to skip (e.g., 'archived-*')
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Skip dot-prefixed subdirectories
    #[arg(long)]
    pub skip_hidden: bool,
}
