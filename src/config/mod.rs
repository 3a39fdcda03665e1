pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{parse_operand, Validate};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// `compare(2, 1)` 是原本 demo 的呼叫
pub const DEFAULT_LEFT: &str = "2";
pub const DEFAULT_RIGHT: &str = "1";

/// Resolved settings after merging the TOML file and the command line.
/// Operands stay as text until the runner asks for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub left: String,
    pub right: String,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT.to_string(),
            right: DEFAULT_RIGHT.to_string(),
            format: OutputFormat::Text,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn with_operands(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for Settings {
    fn left_operand(&self) -> Result<i32> {
        parse_operand("left", &self.left)
    }

    fn right_operand(&self) -> Result<i32> {
        parse_operand("right", &self.right)
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.left_operand()?;
        self.right_operand()?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "int-compare")]
#[command(about = "Compare two 32-bit signed integers")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// First operand (defaults to 2, or the value from --config)
    pub left: Option<String>,

    /// Second operand (defaults to 1, or the value from --config)
    pub right: Option<String>,

    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 設定與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_base_settings()?,
            None => Settings::default(),
        };

        if let Some(left) = &self.left {
            settings.left = left.clone();
        }
        if let Some(right) = &self.right {
            settings.right = right.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings.verbose |= self.verbose;

        settings.validate()?;
        Ok(settings)
    }
}
