use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A username/password pair.
///
/// Built once and never mutated afterwards. The birth date is carried for
/// completeness but nothing sets it yet, so it is always `None` for values
/// built through [`Credentials::new`].
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    #[serde(skip_serializing)]
    password: String,
    birth_date: Option<NaiveDate>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            birth_date: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("birth_date", &self.birth_date)
            .finish()
    }
}

/// The typed outcome of a single utility call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Number(i32),
    Flag(bool),
    Credentials(Credentials),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Flag(b) => write!(f, "{}", b),
            Value::Credentials(c) => match c.birth_date() {
                Some(date) => write!(f, "{} (born {})", c.username(), date),
                None => write!(f, "{} (no birth date)", c.username()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_fields_unchanged() {
        let user = Credentials::new("Toto", "toto2000");
        assert_eq!(user.username(), "Toto");
        assert_eq!(user.password(), "toto2000");
        assert_eq!(user.birth_date(), None);
    }

    #[test]
    fn debug_redacts_password() {
        let user = Credentials::new("Toto", "toto2000");
        let dbg = format!("{:?}", user);
        assert!(dbg.contains("Toto"));
        assert!(!dbg.contains("toto2000"));
    }

    #[test]
    fn serialization_skips_password() {
        let user = Credentials::new("Toto", "toto2000");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"username\":\"Toto\""));
        assert!(!json.contains("toto2000"));
        assert!(json.contains("\"birth_date\":null"));
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Number(30).to_string(), "30");
        assert_eq!(Value::Flag(false).to_string(), "false");
        assert_eq!(
            Value::Credentials(Credentials::new("Toto", "x")).to_string(),
            "Toto (no birth date)"
        );
    }
}
