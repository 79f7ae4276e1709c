use colored::Colorize;
use learn::api::{CmdMessage, CmdResult, DemoOutcome, MessageLevel, Value};
use learn::config::{LearnConfig, OutputFormat};
use learn::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    demo: Option<&'a DemoOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a LearnConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    messages: Vec<&'a CmdMessage>,
}

pub(crate) fn print_result(result: &CmdResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Text => {
            if let Some(value) = &result.value {
                print_value(value);
            }
            if let Some(demo) = &result.demo {
                print_demo(demo);
            }
            if let Some(config) = &result.config {
                print_config(config);
            }
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn print_json(result: &CmdResult) -> Result<()> {
    let out = JsonOutput {
        value: result.value.as_ref(),
        demo: result.demo.as_ref(),
        config: result.config.as_ref(),
        messages: result.messages.iter().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_value(value: &Value) {
    match value {
        Value::Number(n) => println!("{}", n.to_string().bold()),
        Value::Flag(true) => println!("{}", "true".green()),
        Value::Flag(false) => println!("{}", "false".red()),
        Value::Credentials(c) => {
            println!("{} {}", "username:".dimmed(), c.username().bold());
            match c.birth_date() {
                Some(date) => println!("{} {}", "birth date:".dimmed(), date),
                None => println!("{} {}", "birth date:".dimmed(), "none".dimmed()),
            }
        }
    }
}

fn print_demo(demo: &DemoOutcome) {
    println!("{} {}", "sum(2, 4, 6, 8, 10) =".dimmed(), demo.sum.to_string().bold());
    println!("{} {}", "greeting:".dimmed(), demo.greeting);
    println!("{} {}", "user:".dimmed(), demo.user.username().bold());
}

fn print_config(config: &LearnConfig) {
    for key in learn::config::KEYS {
        if let Some(val) = config.get(key) {
            println!("{} = {}", key, val);
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
