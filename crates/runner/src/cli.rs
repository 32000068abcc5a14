//! Command line parsing

use meas_core::{GoldUnit, QuantityUnit, UnitError};
use meas_i18n::{Language, LanguageError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Language(#[from] LanguageError),
}

/// Inputs for a one-shot calculation; absent values come from the saved form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcArgs {
    pub buy: Option<String>,
    pub buy_unit: Option<GoldUnit>,
    pub current: Option<String>,
    pub current_unit: Option<GoldUnit>,
    pub quantity: Option<String>,
    pub quantity_unit: Option<QuantityUnit>,
    /// Fill the current price from the price feed
    pub market: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calc(CalcArgs),
    Price { refresh: bool },
    Wizard,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub config: Option<PathBuf>,
    pub language: Option<Language>,
    pub mock: bool,
    pub command: Command,
}

impl Cli {
    /// Parse arguments, program name excluded
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut config = None;
        let mut language: Option<Language> = None;
        let mut mock = false;
        let mut command_name: Option<String> = None;
        let mut calc = CalcArgs::default();
        let mut refresh = false;

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--help" | "-h" => command_name = Some("help".to_string()),
                "--config" | "-c" => config = Some(PathBuf::from(value(&args, &mut i)?)),
                "--lang" | "-l" => language = Some(value(&args, &mut i)?.parse()?),
                "--mock" => mock = true,
                "--refresh" => refresh = true,
                "--market" => calc.market = true,
                "--buy" => calc.buy = Some(value(&args, &mut i)?),
                "--current" => calc.current = Some(value(&args, &mut i)?),
                "--qty" => calc.quantity = Some(value(&args, &mut i)?),
                "--buy-unit" => calc.buy_unit = Some(value(&args, &mut i)?.parse()?),
                "--current-unit" => calc.current_unit = Some(value(&args, &mut i)?.parse()?),
                "--qty-unit" => calc.quantity_unit = Some(value(&args, &mut i)?.parse()?),
                _ if arg.starts_with('-') => {
                    return Err(CliError::UnknownArgument(arg.to_string()));
                }
                _ if command_name.is_none() => command_name = Some(arg.to_string()),
                _ => return Err(CliError::UnknownArgument(arg.to_string())),
            }
            i += 1;
        }

        let command = match command_name.as_deref() {
            None | Some("wizard") => Command::Wizard,
            Some("calc") => Command::Calc(calc),
            Some("price") => Command::Price { refresh },
            Some("help") => Command::Help,
            Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(Self {
            config,
            language,
            mock,
            command,
        })
    }
}

/// Value following the flag at `i`; advances `i` past it
fn value(args: &[String], i: &mut usize) -> Result<String, CliError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| CliError::MissingValue(flag.clone()))
}

pub const HELP: &str = r#"Meas - gold profit and ROI calculator

USAGE:
    meas [OPTIONS] [COMMAND]

COMMANDS:
    wizard              Step through buy price, quantity and current price (default)
    calc                Calculate once and print the result
    price               Show the latest gold price
    help                Print this help message

CALC OPTIONS:
    --buy <AMOUNT>          Buy price
    --buy-unit <UNIT>       xi, domlang or ounce (default: saved unit)
    --current <AMOUNT>      Current price
    --current-unit <UNIT>   xi, domlang or ounce
    --qty <AMOUNT>          Quantity held
    --qty-unit <UNIT>       xi or domlang
    --market                Fill the current price from the market

PRICE OPTIONS:
    --refresh               Ignore a fresh cached price while the market is open

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --lang <CODE>       Display language: en, km or zh
    --mock              Use the offline price source
    --help              Print this help message

ENVIRONMENT VARIABLES:
    MEAS_LANG           Display language
    MEAS_STORE          Data file (default: meas-data.json)
    MEAS_PRICE_URL      Gold price API base URL
    MEAS_MOCK_PRICE     Use the offline price source (true/false)
    MEAS_DOMLANG_TO_XI  Xi per domlang (default: 10)
    RUST_LOG            Log level filter

EXAMPLES:
    # Walk through the wizard
    meas

    # 2 domlang bought at 2000 per domlang, worth 2200 now
    meas calc --buy 2000 --buy-unit domlang --current 2200 --current-unit domlang --qty 2 --qty-unit domlang

    # Value saved inputs at today's market price
    meas calc --market
"#;

pub fn print_help() {
    eprint!("{}", HELP);
}
