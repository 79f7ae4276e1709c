//! # API Facade
//!
//! A thin facade over the command layer. Every UI client goes through
//! [`LearnApi`]; it dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`] values. No printing and no process exits happen here.
//!
//! The arithmetic calls are pure and never fail. They still return
//! `Result<CmdResult>` so every method has the same shape as the ones that
//! touch the config directory.

use crate::commands;
use crate::error::Result;

pub struct LearnApi {
    paths: commands::LearnPaths,
}

impl LearnApi {
    pub fn new(paths: commands::LearnPaths) -> Self {
        Self { paths }
    }

    pub fn sum(&self, numbers: &[i32]) -> Result<CmdResult> {
        tracing::debug!(count = numbers.len(), "sum");
        Ok(commands::sum::run(numbers))
    }

    pub fn sum_two(&self, a: i32, b: i32) -> Result<CmdResult> {
        tracing::debug!(a, b, "sum_two");
        Ok(commands::sum::run_two(a, b))
    }

    pub fn sum_three(&self, a: i32, b: i32, c: i32) -> Result<CmdResult> {
        tracing::debug!(a, b, c, "sum_three");
        Ok(commands::sum::run_three(a, b, c))
    }

    pub fn is_even(&self, n: i32) -> Result<CmdResult> {
        tracing::debug!(n, "is_even");
        Ok(commands::parity::run(n))
    }

    pub fn is_upper_than_10(&self, x: i32) -> Result<CmdResult> {
        tracing::debug!(x, "is_upper_than_10");
        Ok(commands::threshold::run(x))
    }

    pub fn credentials(&self, username: String, password: String) -> Result<CmdResult> {
        tracing::debug!(username = %username, "credentials");
        Ok(commands::credentials::run(username, password))
    }

    pub fn demo(&self) -> Result<CmdResult> {
        Ok(commands::demo::run())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::LearnPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::demo::DemoOutcome;
pub use crate::model::Value;
pub use commands::{CmdMessage, CmdResult, LearnPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LearnConfig;

    fn api() -> (tempfile::TempDir, LearnApi) {
        let dir = tempfile::tempdir().unwrap();
        let api = LearnApi::new(LearnPaths {
            config_dir: dir.path().join("learn"),
        });
        (dir, api)
    }

    #[test]
    fn dispatches_sum() {
        let (_dir, api) = api();
        let result = api.sum(&[2, 4, 6, 8, 10]).unwrap();
        assert_eq!(result.value, Some(Value::Number(30)));
    }

    #[test]
    fn dispatches_sum_two_and_three() {
        let (_dir, api) = api();
        assert_eq!(api.sum_two(3, 4).unwrap().value, Some(Value::Number(7)));
        assert_eq!(
            api.sum_three(1, 2, 3).unwrap().value,
            Some(Value::Number(6))
        );
    }

    #[test]
    fn dispatches_predicates() {
        let (_dir, api) = api();
        assert_eq!(api.is_even(-4).unwrap().value, Some(Value::Flag(true)));
        assert_eq!(
            api.is_upper_than_10(10).unwrap().value,
            Some(Value::Flag(false))
        );
    }

    #[test]
    fn dispatches_credentials() {
        let (_dir, api) = api();
        let result = api.credentials("Toto".into(), "toto2000".into()).unwrap();
        assert!(matches!(result.value, Some(Value::Credentials(_))));
    }

    #[test]
    fn dispatches_demo() {
        let (_dir, api) = api();
        let demo = api.demo().unwrap().demo.unwrap();
        assert_eq!(demo.sum, 30);
    }

    #[test]
    fn init_then_config_uses_paths() {
        let (_dir, api) = api();
        api.init().unwrap();
        assert!(api.paths().config_dir.is_dir());

        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LearnConfig::default()));
    }
}
