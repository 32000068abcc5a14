//! Command-level tests
//!
//! Runs the app against an in-memory store, a frozen clock and a fixed
//! offline price, feeding the wizard from a byte slice.

use chrono::{TimeZone, Utc};
use meas_clock::ManualClock;
use meas_core::GoldUnit;
use meas_i18n::{Language, load_language};
use meas_ports::{Clock, KeyValueStore};
use meas_pricefeed::{CACHE_KEY, MockPriceConfig, MockPriceSource, PriceSource};
use meas_runner::{App, AppConfig, AppError, CalcArgs, Cli, Command};
use meas_store::InMemoryStore;
use std::sync::Arc;

struct Fixture {
    store: Arc<InMemoryStore>,
    clock: Arc<ManualClock>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            // Wednesday, market open
            clock: Arc::new(ManualClock::new(
                Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap(),
            )),
        }
    }

    /// App quoting 823 per ounce, i.e. 100 per xi
    fn app(&self, config: AppConfig) -> App {
        let clock: Arc<dyn Clock> = self.clock.clone();
        let source: Arc<dyn PriceSource> = Arc::new(MockPriceSource::new(
            MockPriceConfig::fixed(823.0, GoldUnit::Ounce),
            clock.clone(),
        ));
        App::with_parts(config, self.store.clone(), clock, source).unwrap()
    }

    async fn wizard(&self, script: &str) -> String {
        let mut app = self.app(AppConfig::default());
        let mut out = Vec::new();
        app.run(Command::Wizard, script.as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }
}

fn calc_args(argv: &[&str]) -> CalcArgs {
    match Cli::parse(argv.iter().copied()).unwrap().command {
        Command::Calc(args) => args,
        other => panic!("expected calc, got {:?}", other),
    }
}

#[tokio::test]
async fn test_calc_one_shot() {
    let fixture = Fixture::new();
    let mut app = fixture.app(AppConfig::default());

    let text = app
        .calc(&calc_args(&[
            "calc", "--buy", "2000", "--buy-unit", "domlang", "--current", "2200",
            "--current-unit", "domlang", "--qty", "2", "--qty-unit", "domlang",
        ]))
        .await
        .unwrap();

    assert!(text.starts_with("You gain"));
    assert!(text.contains("$400.00"));
    assert!(text.contains("+10.00%"));
    assert!(text.contains("20.00 Xi"));
    assert!(text.contains("$220.00 / Xi"));
}

#[tokio::test]
async fn test_calc_reuses_saved_inputs() {
    let fixture = Fixture::new();
    let mut app = fixture.app(AppConfig::default());

    app.calc(&calc_args(&["calc", "--buy", "100", "--current", "110", "--qty", "5"]))
        .await
        .unwrap();

    // Only the current price changes on the second run
    let text = app
        .calc(&calc_args(&["calc", "--current", "90"]))
        .await
        .unwrap();
    assert!(text.starts_with("You lose"));
    assert!(text.contains("$-50.00"));
}

#[tokio::test]
async fn test_calc_incomplete_inputs() {
    let fixture = Fixture::new();
    let mut app = fixture.app(AppConfig::default());

    let err = app
        .calc(&calc_args(&["calc", "--buy", "100", "--qty", "0"]))
        .await
        .unwrap_err();

    match err {
        AppError::Incomplete(message) => {
            assert!(message.starts_with("Enter all fields"));
            assert!(message.contains("Enter the current price"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_calc_with_market_price() {
    let fixture = Fixture::new();
    let mut app = fixture.app(AppConfig::default());

    let text = app
        .calc(&calc_args(&["calc", "--buy", "90", "--qty", "1", "--market"]))
        .await
        .unwrap();

    assert!(text.contains("$100.00 / Xi"));
    assert!(text.contains("$10.00"));
    assert!(fixture.store.get(CACHE_KEY).unwrap().is_some());
}

#[tokio::test]
async fn test_price_report_and_cache() {
    let fixture = Fixture::new();
    let app = fixture.app(AppConfig::default());

    let text = app.price(false).await.unwrap();
    assert!(text.starts_with("Market open"));
    assert!(text.contains("$823.00 / Ounce"));
    assert!(text.contains("$100.00 / Xi"));
    assert!(text.contains("$1000.00 / Domlang"));

    let cached = app.feed().cached().unwrap();
    assert_eq!(cached.fetched_at, fixture.clock.now());
}

#[tokio::test]
async fn test_price_uses_configured_domlang_factor() {
    let fixture = Fixture::new();
    let app = fixture.app(AppConfig {
        domlang_to_xi: 4.0,
        ..Default::default()
    });

    let text = app.price(false).await.unwrap();
    assert!(text.contains("$400.00 / Domlang"));
}

#[tokio::test]
async fn test_wizard_walkthrough_then_welcome_back() {
    let fixture = Fixture::new();

    let out = fixture
        .wizard(
            "2000\nunit domlang\nnext\n2\nunit domlang\nnext\n2200\nunit domlang\nnext\nquit\n",
        )
        .await;
    assert!(out.contains("You gain"));
    assert!(out.contains("$400.00"));
    assert!(!out.contains("Welcome back"));

    let out = fixture.wizard("quit\n").await;
    assert!(out.contains("Welcome back"));
    assert!(out.contains("$400.00"));
}

#[tokio::test]
async fn test_wizard_blocks_empty_step() {
    let fixture = Fixture::new();
    let out = fixture.wizard("next\n0\nnext\n").await;

    assert_eq!(out.matches("Enter all fields").count(), 2);
    assert!(out.contains("[Buy Price]"));
    assert!(!out.contains("[Quantity]"));
}

#[tokio::test]
async fn test_wizard_market_fills_current_price() {
    let fixture = Fixture::new();
    let out = fixture.wizard("90\nnext\n1\nnext\nmarket\nquit\n").await;

    assert!(out.contains("Price updated (Market open)"));
    assert!(out.contains("You gain"));
    assert!(out.contains("$10.00"));
}

#[tokio::test]
async fn test_wizard_refresh_records_previous_price() {
    let fixture = Fixture::new();
    let out = fixture.wizard("90\nnext\n1\nnext\n100\nrefresh\nquit\n").await;

    assert!(out.contains("Price updated"));
    assert_eq!(
        fixture.store.get("gold_previous_price").unwrap().as_deref(),
        Some("100")
    );
    assert_eq!(
        fixture.store.get("gold_current_price").unwrap().as_deref(),
        Some("823")
    );
}

#[tokio::test]
async fn test_wizard_market_keeps_previous_price() {
    let fixture = Fixture::new();
    fixture.wizard("90\nnext\n1\nnext\n100\nmarket\nquit\n").await;

    assert_eq!(
        fixture.store.get("gold_current_price").unwrap().as_deref(),
        Some("823")
    );
    assert!(
        fixture
            .store
            .get("gold_previous_price")
            .unwrap()
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn test_help_goes_to_output() {
    let fixture = Fixture::new();
    let mut app = fixture.app(AppConfig::default());
    let mut out = Vec::new();
    app.run(Command::Help, &b""[..], &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Meas - gold profit and ROI calculator"));
    assert!(text.contains("ENVIRONMENT VARIABLES:"));
}

#[tokio::test]
async fn test_wizard_switches_language() {
    let fixture = Fixture::new();
    fixture.wizard("lang km\nlang fr\nquit\n").await;

    assert_eq!(load_language(fixture.store.as_ref()).unwrap(), Language::Km);
}

#[tokio::test]
async fn test_configured_language_is_saved() {
    let fixture = Fixture::new();
    fixture.app(AppConfig {
        language: Some(Language::Zh),
        ..Default::default()
    });

    assert_eq!(load_language(fixture.store.as_ref()).unwrap(), Language::Zh);
}

#[tokio::test]
async fn test_wizard_new_calculation() {
    let fixture = Fixture::new();
    fixture
        .wizard("100\nnext\n5\nnext\n110\nnext\nquit\n")
        .await;

    let out = fixture.wizard("new\nquit\n").await;
    assert!(out.contains("New calculation"));
    assert_eq!(
        fixture.store.get("gold_buy_price").unwrap().as_deref(),
        Some("")
    );
    assert_eq!(
        fixture.store.get("gold_current_price").unwrap().as_deref(),
        Some("110")
    );
}
