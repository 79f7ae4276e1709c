use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version string, with git hash and commit date appended when available.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("LEARN_GIT_HASH");
    const COMMIT_DATE: &str = env!("LEARN_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "learn", version = get_version())]
#[command(about = "Clean-code exercises: sums, parity, thresholds, credentials", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum any number of integers
    #[command(alias = "s")]
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },

    /// Add two integers
    SumTwo {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Add three integers
    SumThree {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
        #[arg(allow_negative_numbers = true)]
        c: i32,
    },

    /// Check whether an integer is even
    #[command(alias = "e")]
    Even {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Check whether an integer is strictly greater than 10
    Upper {
        #[arg(allow_negative_numbers = true)]
        x: i32,
    },

    /// Build a credentials record (the password is never printed)
    User { username: String, password: String },

    /// Run the fixed demo and print its outcome
    Demo,

    /// Get or set configuration
    Config {
        /// Configuration key (output, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the config directory
    Init,
}
