//! Plain-text rendering of results, quotes and wizard prompts

use meas_core::{ConversionResult, ConversionTable, GoldUnit, PnlState, PriceQuote, PriceTrend, format_number};
use meas_i18n::{TranslationKey, Translator};
use meas_wizard::{CalculatorSession, Step};
use std::fmt::Write;

/// Money is shown as `$` followed by the two-decimal number, sign included
pub fn money(value: f64) -> String {
    format!("${}", format_number(value))
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<24} {}", label, value);
}

pub fn result_card(t: &Translator, result: &ConversionResult) -> String {
    let xi = t.t(TranslationKey::UnitXiShort);
    let state = result.pnl_state();
    let status = match state {
        PnlState::Gain => TranslationKey::YouGain,
        PnlState::Loss => TranslationKey::YouLose,
        PnlState::Neutral => TranslationKey::BreakEven,
    };
    let sign = if state == PnlState::Gain { "+" } else { "" };

    let mut out = String::new();
    let _ = writeln!(out, "{}", t.t(status));
    let _ = writeln!(out, "  {}", money(result.total_profit));
    let _ = writeln!(out);
    row(&mut out, t.t(TranslationKey::CurrentValue), &money(result.total_current_value));
    row(&mut out, t.t(TranslationKey::YouPaid), &money(result.total_buy_value));
    let _ = writeln!(out);
    row(
        &mut out,
        t.t(TranslationKey::Roi),
        &format!("{}{}%", sign, format_number(result.roi_percentage)),
    );
    row(
        &mut out,
        t.t(TranslationKey::QuantityShort),
        &format!("{} {}", format_number(result.quantity_xi), xi),
    );
    row(
        &mut out,
        t.t(TranslationKey::PriceLabel),
        &format!("{} / {}", money(result.current_xi), xi),
    );
    row(&mut out, t.t(TranslationKey::ProfitPerXi), &money(result.profit_per_xi));
    row(
        &mut out,
        t.t(TranslationKey::BuyPriceLabel),
        &format!("{} / {}", money(result.buy_xi), xi),
    );
    out
}

pub fn market_status(t: &Translator, open: bool) -> String {
    if open {
        t.t(TranslationKey::MarketOpen).to_string()
    } else {
        format!(
            "{}. {}",
            t.t(TranslationKey::MarketClosed),
            t.t(TranslationKey::MarketClosedPrediction)
        )
    }
}

/// A market quote, restated per unit using `table`
pub fn quote_report(
    t: &Translator,
    quote: &PriceQuote,
    table: &ConversionTable,
    market_open: bool,
) -> String {
    let per_xi = table.price_to_xi(quote.price, quote.unit);

    let mut out = String::new();
    let _ = writeln!(out, "{}", market_status(t, market_open));
    row(
        &mut out,
        t.t(TranslationKey::PriceNow),
        &format!("{} / {}", money(quote.price), t.t(TranslationKey::unit_short(quote.unit))),
    );
    for unit in GoldUnit::ALL {
        if unit == quote.unit {
            continue;
        }
        row(
            &mut out,
            t.t(TranslationKey::EquivalentTo),
            &format!(
                "{} / {}",
                money(table.price_from_xi(per_xi, unit)),
                t.t(TranslationKey::unit_short(unit))
            ),
        );
    }
    row(
        &mut out,
        t.t(TranslationKey::LastUpdated),
        &quote.updated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    out
}

/// Prompt for the active wizard step
pub fn step_prompt(t: &Translator, session: &CalculatorSession) -> String {
    let step = session.active_step();
    let form = session.form();

    let mut out = String::new();
    let tabs: Vec<String> = Step::WIZARD_ORDER
        .iter()
        .map(|s| {
            let label = t.t(s.label_key());
            if *s == step {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" > "));

    if session.tip_step() == step {
        let _ = writeln!(out, "  {}", t.t(step.tip_key()));
    }

    let (raw, unit_label, placeholder) = match step {
        Step::BuyPrice => (
            &form.buy_price,
            t.t(TranslationKey::per_unit(form.buy_unit)),
            TranslationKey::AmountPlaceholder,
        ),
        Step::Quantity => (
            &form.quantity,
            t.t(TranslationKey::quantity_unit_short(form.quantity_unit)),
            TranslationKey::QuantityPlaceholder,
        ),
        Step::CurrentPrice => (
            &form.current_price,
            t.t(TranslationKey::per_unit(form.current_unit)),
            TranslationKey::AmountPlaceholder,
        ),
        Step::Result => {
            match session.result() {
                Some(result) => out.push_str(&result_card(t, &result)),
                None => {
                    let _ = writeln!(out, "  {}", t.t(TranslationKey::EmptyState));
                }
            }
            return out;
        }
    };

    let shown = if raw.is_empty() {
        t.t(placeholder).to_string()
    } else {
        raw.clone()
    };
    let _ = writeln!(out, "  {} ({})", shown, unit_label);

    if step == Step::Quantity {
        let _ = writeln!(out, "  {}", t.t(TranslationKey::QuantityHint));
    }
    if step == Step::CurrentPrice {
        if let Some(trend) = session.trend() {
            let arrow = match trend {
                PriceTrend::Up => "▲",
                PriceTrend::Down => "▼",
            };
            let _ = writeln!(out, "  {} {}", arrow, form.previous_price);
        }
        if let Some(at) = form.last_updated {
            let _ = writeln!(
                out,
                "  {}: {}",
                t.t(TranslationKey::LastUpdated),
                at.format("%H:%M UTC")
            );
        }
    }
    out
}
