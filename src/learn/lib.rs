//! # Learn
//!
//! A handful of clean-code exercises expressed as a small library: integer
//! sums, a parity check, a threshold comparison and a `Credentials` record.
//! The CLI binary is a thin client over the same library.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                    │
//! │  - Parses arguments, prints results, sets exit codes │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  API (api.rs)                                        │
//! │  - Thin facade, returns `Result<CmdResult>`          │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                            │
//! │  - Pure functions, no I/O                            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Only `config` and `init` touch the filesystem. Nothing below the CLI
//! writes to stdout or stderr.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client calls
//! - [`commands`]: sums, parity, threshold, credentials, demo, config
//! - [`model`]: `Credentials` and the `Value` result type
//! - [`config`]: output preferences persisted as JSON
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;

pub use commands::parity::is_even;
pub use commands::sum::{sum, sum_three, sum_two};
pub use commands::threshold::is_upper_than_10;
pub use model::Credentials;
