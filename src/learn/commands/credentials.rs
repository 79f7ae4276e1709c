use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Credentials, Value};

pub fn run(username: String, password: String) -> CmdResult {
    let credentials = Credentials::new(username, password);
    let mut result = CmdResult::default();
    if credentials.birth_date().is_none() {
        result.add_message(CmdMessage::info("No birth date recorded"));
    }
    result.with_value(Value::Credentials(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_credentials_value() {
        let result = run("Toto".into(), "toto2000".into());
        match result.value {
            Some(Value::Credentials(c)) => {
                assert_eq!(c.username(), "Toto");
                assert_eq!(c.password(), "toto2000");
                assert!(c.birth_date().is_none());
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn notes_missing_birth_date() {
        let result = run("Toto".into(), "toto2000".into());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("birth date"));
    }

    #[test]
    fn empty_fields_are_accepted() {
        let result = run(String::new(), String::new());
        assert!(matches!(result.value, Some(Value::Credentials(_))));
    }
}
