//! Addition helpers.
//!
//! All arithmetic wraps on overflow instead of panicking, in debug and release
//! builds alike.

use crate::commands::CmdResult;
use crate::model::Value;

/// Sums any number of integers. An empty slice sums to `0`.
pub fn sum(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0, |acc, n| acc.wrapping_add(*n))
}

pub fn sum_two(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Delegates to [`sum_two`] rather than adding three terms inline.
pub fn sum_three(a: i32, b: i32, c: i32) -> i32 {
    a.wrapping_add(sum_two(b, c))
}

pub fn run(numbers: &[i32]) -> CmdResult {
    CmdResult::default().with_value(Value::Number(sum(numbers)))
}

pub fn run_two(a: i32, b: i32) -> CmdResult {
    CmdResult::default().with_value(Value::Number(sum_two(a, b)))
}

pub fn run_three(a: i32, b: i32, c: i32) -> CmdResult {
    CmdResult::default().with_value(Value::Number(sum_three(a, b, c)))
}
