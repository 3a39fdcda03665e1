use crate::config::{Settings, DEFAULT_LEFT, DEFAULT_RIGHT};
use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{parse_operand, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub operands: Option<OperandsConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperandsConfig {
    pub left: Option<OperandValue>,
    pub right: Option<OperandValue>,
}

/// TOML 裡可以寫數字，也可以寫字串 (例如 "${LEFT}")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperandValue {
    Number(i64),
    Text(String),
}

impl OperandValue {
    fn as_text(&self) -> String {
        match self {
            OperandValue::Number(n) => n.to_string(),
            OperandValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// 替換環境變數 (例如 ${LEFT_OPERAND})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn left_text(&self) -> String {
        self.operands
            .as_ref()
            .and_then(|o| o.left.as_ref())
            .map(OperandValue::as_text)
            .unwrap_or_else(|| DEFAULT_LEFT.to_string())
    }

    pub fn right_text(&self) -> String {
        self.operands
            .as_ref()
            .and_then(|o| o.right.as_ref())
            .map(OperandValue::as_text)
            .unwrap_or_else(|| DEFAULT_RIGHT.to_string())
    }

    pub fn format_name(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// 轉成執行用的設定
    pub fn into_settings(self) -> Result<Settings> {
        self.validate()?;
        self.into_base_settings()
    }

    /// Settings to be overridden by the command line. Only `output.format`
    /// is checked here; operands are validated after the merge.
    pub fn into_base_settings(self) -> Result<Settings> {
        let format = match self.format_name() {
            Some(name) => {
                validate_one_of("output.format", name, &OutputFormat::NAMES)?;
                OutputFormat::parse(name).unwrap_or_default()
            }
            None => OutputFormat::default(),
        };
        Ok(Settings {
            left: self.left_text(),
            right: self.right_text(),
            format,
            verbose: self.verbose(),
            json_logs: self.json_logs(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        parse_operand("operands.left", &self.left_text())?;
        parse_operand("operands.right", &self.right_text())?;

        if let Some(format) = self.format_name() {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CompareError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[operands]
left = -3
right = "3"

[output]
format = "json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.left_text(), "-3");
        assert_eq!(config.right_text(), "3");
        assert_eq!(config.format_name(), Some("json"));
        assert!(config.verbose());
        assert!(!config.json_logs());

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_toml_uses_demo_operands() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.left_text(), "2");
        assert_eq!(config.right_text(), "1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INT_COMPARE_TEST_LEFT", "42");

        let toml_content = r#"
[operands]
left = "${INT_COMPARE_TEST_LEFT}"
right = "${INT_COMPARE_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.left_text(), "42");
        assert_eq!(config.right_text(), "${INT_COMPARE_TEST_UNSET_VAR}");
        assert!(matches!(
            config.validate(),
            Err(CompareError::InvalidOperandError { .. })
        ));
    }

    #[test]
    fn test_base_settings_defer_operand_validation() {
        let config = TomlConfig::from_toml_str("[operands]\nleft = \"${INT_COMPARE_TEST_BASE_UNSET}\"\n").unwrap();
        let settings = config.clone().into_base_settings().unwrap();
        assert_eq!(settings.left, "${INT_COMPARE_TEST_BASE_UNSET}");
        assert!(config.into_settings().is_err());

        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            bad_format.into_base_settings(),
            Err(CompareError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CompareError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[operands\nleft = 1"),
            Err(CompareError::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[operands]\nleft = 5\nright = 5").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.left_text(), "5");
        assert_eq!(config.right_text(), "5");
    }
}
