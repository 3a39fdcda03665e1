use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Named form of a comparison result's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Before,
    Equal,
    After,
}

impl Relation {
    /// Only the sign of `result` is looked at.
    pub fn from_sign(result: i32) -> Self {
        match result.signum() {
            -1 => Relation::Before,
            0 => Relation::Equal,
            _ => Relation::After,
        }
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Relation::Before,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::After,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: i32,
    pub right: i32,
    pub result: i32,
    pub relation: Relation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_from_sign_ignores_magnitude() {
        assert_eq!(Relation::from_sign(-42), Relation::Before);
        assert_eq!(Relation::from_sign(i32::MIN), Relation::Before);
        assert_eq!(Relation::from_sign(0), Relation::Equal);
        assert_eq!(Relation::from_sign(7), Relation::After);
    }

    #[test]
    fn test_relation_serializes_lowercase() {
        let json = serde_json::to_string(&Relation::After).unwrap();
        assert_eq!(json, "\"after\"");
    }
}
