use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use std::cmp::Ordering;

/// A total order over `i32`.
///
/// `compare` follows the sign convention: negative when `a` orders before
/// `b`, zero when they are equal, positive when `a` orders after `b`.
/// Callers must only rely on the sign.
pub trait Comparator: Send + Sync {
    fn order(&self, a: i32, b: i32) -> Ordering;

    fn compare(&self, a: i32, b: i32) -> i32 {
        self.order(a, b) as i32
    }
}

/// Source of operands for the runner. Operands arrive as text and are
/// narrowed to `i32` here, at the call boundary.
pub trait ConfigProvider: Send + Sync {
    fn left_operand(&self) -> Result<i32>;
    fn right_operand(&self) -> Result<i32>;
    fn output_format(&self) -> OutputFormat;
}
