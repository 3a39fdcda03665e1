pub mod comparator;
pub mod runner;

pub use crate::domain::model::{Comparison, OutputFormat, Relation};
pub use crate::domain::ports::{Comparator, ConfigProvider};
pub use crate::utils::error::Result;
