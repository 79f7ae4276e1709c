use crate::commands::sum::sum;
use crate::commands::CmdResult;
use crate::model::Credentials;
use serde::Serialize;

const DEMO_NUMBERS: [i32; 5] = [2, 4, 6, 8, 10];
const DEMO_GREETING: &str = "Hello";
const DEMO_USERNAME: &str = "Toto";
const DEMO_PASSWORD: &str = "toto2000";

/// Values produced by the fixed demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoOutcome {
    pub sum: i32,
    pub greeting: String,
    pub user: Credentials,
}

pub fn outcome() -> DemoOutcome {
    DemoOutcome {
        sum: sum(&DEMO_NUMBERS),
        greeting: DEMO_GREETING.to_string(),
        user: Credentials::new(DEMO_USERNAME, DEMO_PASSWORD),
    }
}

pub fn run() -> CmdResult {
    let demo = outcome();
    tracing::debug!(sum = demo.sum, user = demo.user.username(), "demo evaluated");
    CmdResult::default().with_demo(demo)
}
