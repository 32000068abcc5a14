//! Meas Runner - command line front end
//!
//! Wires the calculator together for a single process run:
//!
//! - **Config**: defaults, JSON file and `MEAS_*` environment overrides
//! - **CLI**: argument parsing into a [`Command`]
//! - **App**: store, clock, price feed and session wiring; command execution
//! - **Render**: localized plain-text output
//!
//! ## Architecture
//!
//! ```text
//!            ┌──────────────┐     ┌──────────────┐
//!  argv ───▶ │     Cli      │     │  AppConfig   │ ◀── file + env
//!            └──────┬───────┘     └──────┬───────┘
//!                   │ command            │
//!                   ▼                    ▼
//!            ┌─────────────────────────────────────┐
//!            │                 App                 │
//!            │                                     │
//!            │  CalculatorSession   CachedPriceFeed │
//!            │         │                  │        │
//!            └─────────┼──────────────────┼────────┘
//!                      ▼                  ▼
//!               ┌───────────────┐ ┌──────────────────┐
//!               │ JsonFileStore │ │ GoldApiClient or │
//!               │               │ │ MockPriceSource  │
//!               └───────────────┘ └──────────────────┘
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod render;

pub use app::{App, AppError, AppResult};
pub use cli::{CalcArgs, Cli, CliError, Command, HELP, print_help};
pub use config::{AppConfig, ConfigError};
