use crate::commands::{CmdMessage, CmdResult, LearnPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &LearnPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.config_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized config directory at {}",
        paths.config_dir.display()
    )));
    Ok(result)
}
