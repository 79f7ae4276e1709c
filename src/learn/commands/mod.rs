use crate::config::LearnConfig;
use crate::model::Value;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod credentials;
pub mod demo;
pub mod init;
pub mod parity;
pub mod sum;
pub mod threshold;

use demo::DemoOutcome;

#[derive(Debug, Clone)]
pub struct LearnPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub value: Option<Value>,
    pub demo: Option<DemoOutcome>,
    pub config: Option<LearnConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_demo(mut self, demo: DemoOutcome) -> Self {
        self.demo = Some(demo);
        self
    }

    pub fn with_config(mut self, config: LearnConfig) -> Self {
        self.config = Some(config);
        self
    }
}
