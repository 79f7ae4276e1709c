use crate::commands::CmdResult;
use crate::model::Value;

const THRESHOLD: i32 = 10;

/// Strictly greater than ten; `10` itself is not.
pub fn is_upper_than_10(x: i32) -> bool {
    x > THRESHOLD
}

pub fn run(x: i32) -> CmdResult {
    CmdResult::default().with_value(Value::Flag(is_upper_than_10(x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_exclusive() {
        assert!(!is_upper_than_10(10));
        assert!(is_upper_than_10(11));
    }

    #[test]
    fn negatives_are_below() {
        assert!(!is_upper_than_10(-5));
        assert!(!is_upper_than_10(i32::MIN));
    }

    #[test]
    fn max_is_above() {
        assert!(is_upper_than_10(i32::MAX));
    }

    #[test]
    fn run_returns_flag() {
        assert_eq!(run(42).value, Some(Value::Flag(true)));
    }
}
