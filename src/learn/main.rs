use clap::Parser;
use directories::ProjectDirs;
use learn::api::{ConfigAction, LearnApi, LearnPaths};
use learn::config::{LearnConfig, OutputFormat};
use learn::error::{LearnError, Result};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod print;
use args::{Cli, Commands};

const CONFIG_DIR_ENV: &str = "LEARN_CONFIG_DIR";
const FALLBACK_CONFIG_DIR: &str = ".learn";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

struct AppContext {
    api: LearnApi,
    format: OutputFormat,
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli);

    let result = match cli.command {
        // Bare invocation evaluates the demo and discards it.
        None => {
            ctx.api.demo()?;
            return Ok(());
        }
        Some(Commands::Sum { numbers }) => ctx.api.sum(&numbers)?,
        Some(Commands::SumTwo { a, b }) => ctx.api.sum_two(a, b)?,
        Some(Commands::SumThree { a, b, c }) => ctx.api.sum_three(a, b, c)?,
        Some(Commands::Even { n }) => ctx.api.is_even(n)?,
        Some(Commands::Upper { x }) => ctx.api.is_upper_than_10(x)?,
        Some(Commands::User { username, password }) => ctx.api.credentials(username, password)?,
        Some(Commands::Demo) => ctx.api.demo()?,
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (None, Some(_)) => {
                    return Err(LearnError::Api("A value needs a key".into()));
                }
                (None, None) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            ctx.api.config(action)?
        }
        Some(Commands::Init) => ctx.api.init()?,
    };

    print::print_result(&result, ctx.format)
}

fn init_context(cli: &Cli) -> AppContext {
    let config_dir = resolve_config_dir(cli);
    tracing::debug!(dir = %config_dir.display(), "using config dir");

    let config = LearnConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        LearnConfig::default()
    });
    if !config.color {
        colored::control::set_override(false);
    }
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let api = LearnApi::new(LearnPaths { config_dir });
    AppContext { api, format }
}

// Flag, then environment, then the platform config dir. Without a home
// directory we fall back to `.learn` under the working directory.
fn resolve_config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "learn", "learn")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG_DIR))
}
