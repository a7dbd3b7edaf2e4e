use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `RESUME_BATCH_RESUME_DIR`
pub const ENV_PREFIX: &str = "RESUME_BATCH";

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "Parse recruiting-platform resumes into a report", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the resumes to process
    #[arg(long)]
    pub resume_dir: Option<PathBuf>,

    /// Directory parsed resumes are moved to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Directory the report is written to
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Print every parsed resume
    #[arg(long)]
    pub detail: bool,

    /// Leave parsed resumes where they are
    #[arg(long)]
    pub no_transfer: bool,

    #[arg(long)]
    pub log_file_path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub resume_dir: PathBuf,
    pub output_dir: PathBuf,
    pub report_dir: PathBuf,
    pub detail: bool,
    pub transfer: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            resume_dir: PathBuf::from("未处理简历"),
            output_dir: PathBuf::from("已处理简历"),
            report_dir: PathBuf::from("处理结果"),
            detail: false,
            transfer: true,
        }
    }
}

impl BatchConfig {
    /// Layer defaults, the config file, `RESUME_BATCH_*` variables and `cli`.
    ///
    /// An explicit `--config` file must exist; the per-user file is optional.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        match &cli.config {
            Some(path) => Self::from_sources(path, true, cli),
            None => Self::from_sources(&get_config_path(), false, cli),
        }
    }

    fn from_sources(config_path: &Path, required: bool, cli: &Cli) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("resume_dir", path_value(&defaults.resume_dir))?
            .set_default("output_dir", path_value(&defaults.output_dir))?
            .set_default("report_dir", path_value(&defaults.report_dir))?
            .set_default("detail", defaults.detail)?
            .set_default("transfer", defaults.transfer)?
            .add_source(
                File::from(config_path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("resume_dir", cli.resume_dir.as_deref().map(path_value))?
            .set_override_option("output_dir", cli.output_dir.as_deref().map(path_value))?
            .set_override_option("report_dir", cli.report_dir.as_deref().map(path_value))?
            .set_override_option("detail", cli.detail.then_some(true))?
            .set_override_option("transfer", cli.no_transfer.then_some(false))?
            .build()?;

        Ok(builder.try_deserialize()?)
    }

    /// Check the directories before any file is touched. The output
    /// directory only matters when parsed files are transferred.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_directory(DirectoryRole::Resume, &self.resume_dir)?;
        if self.transfer {
            require_directory(DirectoryRole::Output, &self.output_dir)?;
        }
        require_directory(DirectoryRole::Report, &self.report_dir)?;
        Ok(())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("resume-batch").join("config.toml")
    } else {
        PathBuf::from("resume-batch.toml")
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn require_directory(role: DirectoryRole, path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingDirectory {
            role,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory {
            role,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    Resume,
    Output,
    Report,
}

impl fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryRole::Resume => write!(f, "resume"),
            DirectoryRole::Output => write!(f, "output"),
            DirectoryRole::Report => write!(f, "report"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{role} directory {} does not exist", .path.display())]
    MissingDirectory { role: DirectoryRole, path: PathBuf },

    #[error("{role} directory {} is a file", .path.display())]
    NotADirectory { role: DirectoryRole, path: PathBuf },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
