use crate::commands::{CmdMessage, CmdResult, LearnPaths};
use crate::config::LearnConfig;
use crate::error::{LearnError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &LearnPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = LearnConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = LearnConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| LearnError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = LearnConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::OutputFormat;

    fn paths(dir: &tempfile::TempDir) -> LearnPaths {
        LearnPaths {
            config_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LearnConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(&dir);
        let result = run(&p, ConfigAction::Set("output".into(), "JSON".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "output set to json");

        let loaded = LearnConfig::load(&p.config_dir).unwrap();
        assert_eq!(loaded.output, OutputFormat::Json);
    }

    #[test]
    fn show_known_key_reports_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("color".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "true");
    }

    #[test]
    fn show_unknown_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap_err();
        match err {
            LearnError::Config(msg) => assert_eq!(msg, "Unknown config key: nope"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn set_unknown_key_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(&dir);
        let err = run(&p, ConfigAction::Set("nope".into(), "1".into())).unwrap_err();
        assert!(matches!(err, LearnError::Config(_)));
        assert!(!p.config_dir.join("config.json").exists());
    }
}
