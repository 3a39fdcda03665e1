pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, Settings};
pub use self::core::{
    comparator::{compare, IntComparator},
    runner::{render, ComparisonRunner},
    Comparator, Comparison, ConfigProvider, OutputFormat, Relation,
};
pub use utils::error::{CompareError, Result};
