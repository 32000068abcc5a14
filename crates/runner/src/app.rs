//! Application wiring and command execution

use crate::cli::{CalcArgs, Command};
use crate::config::{AppConfig, ConfigError};
use crate::render;
use meas_clock::SystemClock;
use meas_core::{GoldUnit, QuantityUnit};
use meas_i18n::{Language, TranslationKey, Translator, load_language, save_language};
use meas_ports::{Clock, FetchError, KeyValueStore, StoreError};
use meas_pricefeed::{CachedPriceFeed, GoldApiClient, MockPriceSource, PriceSource, RestError};
use meas_store::JsonFileStore;
use meas_wizard::{CalculatorSession, SessionError, Step};
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to fetch gold price: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to build price client: {0}")]
    Client(#[from] RestError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Localized description of the first missing input
    #[error("{0}")]
    Incomplete(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Everything a command needs, wired once per run
pub struct App {
    config: AppConfig,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    feed: Arc<CachedPriceFeed>,
    translator: Translator,
}

impl App {
    /// Production wiring: file store, wall clock, remote or offline price source
    pub fn build(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&config.store_path)?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

        let source: Arc<dyn PriceSource> = if config.mock_price {
            Arc::new(MockPriceSource::new(config.mock_config(), clock.clone()))
        } else {
            Arc::new(GoldApiClient::new(config.gold_api_config())?)
        };
        log::info!(
            "Store: {}, price source: {}",
            config.store_path.display(),
            source.name()
        );

        Self::with_parts(config, store, clock, source)
    }

    pub fn with_parts(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        source: Arc<dyn PriceSource>,
    ) -> AppResult<Self> {
        let feed = Arc::new(
            CachedPriceFeed::new(source, store.clone(), clock.clone())
                .with_policy(config.cache_policy()),
        );

        let language = match config.language {
            Some(language) => {
                save_language(store.as_ref(), language)?;
                language
            }
            None => load_language(store.as_ref())?,
        };

        Ok(Self {
            config,
            store,
            clock,
            feed,
            translator: Translator::new(language),
        })
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn feed(&self) -> &Arc<CachedPriceFeed> {
        &self.feed
    }

    fn open_session(&self) -> AppResult<CalculatorSession> {
        Ok(CalculatorSession::open(
            self.store.clone(),
            self.config.conversion_table(),
        )?)
    }

    fn set_language(&mut self, language: Language) -> AppResult<()> {
        save_language(self.store.as_ref(), language)?;
        self.translator.set_language(language);
        log::info!("Language set to {}", language);
        Ok(())
    }

    /// Run one command, writing user-facing text to `out`
    pub async fn run<R, W>(&mut self, command: Command, input: R, out: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        match command {
            Command::Calc(args) => {
                let text = self.calc(&args).await?;
                write!(out, "{}", text)?;
            }
            Command::Price { refresh } => {
                let text = self.price(refresh).await?;
                write!(out, "{}", text)?;
            }
            Command::Wizard => self.wizard(input, out).await?,
            Command::Help => write!(out, "{}", crate::cli::HELP)?,
        }
        Ok(())
    }

    /// One-shot calculation; given values overwrite the saved form
    pub async fn calc(&mut self, args: &CalcArgs) -> AppResult<String> {
        let mut session = self.open_session()?;

        if let Some(raw) = &args.buy {
            session.set_buy_price(raw)?;
        }
        if let Some(unit) = args.buy_unit {
            session.set_buy_unit(unit)?;
        }
        if let Some(raw) = &args.current {
            session.set_current_price(raw)?;
        }
        if let Some(unit) = args.current_unit {
            session.set_current_unit(unit)?;
        }
        if let Some(raw) = &args.quantity {
            session.set_quantity(raw)?;
        }
        if let Some(unit) = args.quantity_unit {
            session.set_quantity_unit(unit)?;
        }
        if args.market {
            let quote = self.feed.latest(false).await?;
            session.apply_quote(&quote, self.clock.now())?;
        }

        let t = &self.translator;
        match session.result() {
            Some(result) => Ok(render::result_card(t, &result)),
            None => Err(AppError::Incomplete(format!(
                "{}: {}",
                t.t(TranslationKey::FillAll),
                t.t(session.tip_step().tip_key())
            ))),
        }
    }

    pub async fn price(&self, refresh: bool) -> AppResult<String> {
        let quote = self.feed.latest(refresh).await?;
        Ok(render::quote_report(
            &self.translator,
            &quote,
            &self.config.conversion_table(),
            self.feed.market_open(),
        ))
    }

    /// Interactive wizard over line input
    pub async fn wizard<R, W>(&mut self, input: R, out: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut session = self.open_session()?;
        let mut lines = input.lines();

        writeln!(out, "{}", self.translator.t(TranslationKey::AppTitle))?;
        if !session.is_onboarding() {
            writeln!(out, "{}", self.translator.t(TranslationKey::WelcomeBack))?;
        }

        loop {
            write!(out, "\n{}", render::step_prompt(&self.translator, &session))?;
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            let (word, rest) = match line.split_once(char::is_whitespace) {
                Some((word, rest)) => (word, rest.trim()),
                None => (line, ""),
            };

            match word.to_ascii_lowercase().as_str() {
                "" => {}
                "quit" | "exit" | "q" => break,
                "next" | "n" => {
                    if !session.next() {
                        writeln!(out, "{}", self.translator.t(TranslationKey::FillAll))?;
                    } else if session.active_step() == Step::Result {
                        session.finish_onboarding();
                    }
                }
                "back" | "b" => {
                    session.back();
                }
                "market" | "refresh" => {
                    let force = word.eq_ignore_ascii_case("refresh");
                    writeln!(out, "{}", self.translator.t(TranslationKey::Loading))?;
                    match self.feed.latest(force).await {
                        Ok(quote) => {
                            if force {
                                session.refresh_quote(&quote, self.clock.now())?;
                            } else {
                                session.apply_quote(&quote, self.clock.now())?;
                            }
                            writeln!(
                                out,
                                "{} ({})",
                                self.translator.t(TranslationKey::PriceUpdated),
                                render::market_status(&self.translator, self.feed.market_open())
                            )?;
                            if session.active_step() == Step::Result {
                                session.finish_onboarding();
                            }
                        }
                        Err(e) => {
                            log::warn!("Market price unavailable: {}", e);
                            writeln!(out, "{}", e)?;
                        }
                    }
                }
                "new" => {
                    session.start_new_calculation()?;
                    writeln!(out, "{}", self.translator.t(TranslationKey::NewCalculation))?;
                }
                "lang" => match rest.parse::<Language>() {
                    Ok(language) => self.set_language(language)?,
                    Err(e) => writeln!(out, "{}", e)?,
                },
                "unit" => {
                    if let Err(message) = set_unit(&mut session, rest) {
                        writeln!(out, "{}", message)?;
                    }
                }
                _ => {
                    let step = session.active_step();
                    match session.set_step_value(step, line) {
                        Ok(()) => {}
                        Err(e @ SessionError::NoInputOnStep) => writeln!(out, "{}", e)?,
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }

        Ok(())
    }
}

/// `unit <u>` applies to the active step's field
fn set_unit(session: &mut CalculatorSession, raw: &str) -> Result<(), String> {
    let result = match session.active_step() {
        Step::BuyPrice => raw
            .parse::<GoldUnit>()
            .map_err(|e| e.to_string())
            .map(|unit| session.set_buy_unit(unit)),
        Step::CurrentPrice => raw
            .parse::<GoldUnit>()
            .map_err(|e| e.to_string())
            .map(|unit| session.set_current_unit(unit)),
        Step::Quantity => raw
            .parse::<QuantityUnit>()
            .map_err(|e| e.to_string())
            .map(|unit| session.set_quantity_unit(unit)),
        Step::Result => return Err(SessionError::NoInputOnStep.to_string()),
    };
    result?.map_err(|e| e.to_string())
}
