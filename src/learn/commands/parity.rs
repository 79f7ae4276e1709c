use crate::commands::CmdResult;
use crate::model::Value;

/// True when `n` has no remainder modulo 2. Holds for negatives and zero.
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

pub fn run(n: i32) -> CmdResult {
    CmdResult::default().with_value(Value::Flag(is_even(n)))
}
