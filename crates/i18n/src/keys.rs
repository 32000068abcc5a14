use meas_core::{GoldUnit, QuantityUnit};
use std::fmt;

/// Identifier of a translatable string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    /// Calculator title
    AppTitle,
    AppLabel,
    ShortDescription,
    Tagline,
    BuyPriceLabel,
    CurrentPriceLabel,
    QuantityLabel,
    PriceLabel,
    QuantityShort,
    Result,
    /// "Per xi" unit selector entry
    UnitXi,
    UnitDomlang,
    UnitOunce,
    /// Bare unit name
    UnitXiShort,
    UnitDomlangShort,
    UnitOunceShort,
    ProfitPerXi,
    Roi,
    Language,
    TotalBuyValue,
    TotalCurrentValue,
    TotalProfit,
    /// Shown until every input is valid
    EmptyState,
    FillAll,
    QuantityHint,
    YouGain,
    YouLose,
    BreakEven,
    YouPaid,
    CurrentValue,
    PriceNow,
    ComparisonNote,
    EquivalentTo,
    AmountPlaceholder,
    QuantityPlaceholder,
    UseMarketPrice,
    UseLatestMarket,
    Loading,
    WelcomeBack,
    NewCalculation,
    Next,
    Back,
    Finish,
    TipPrices,
    /// Wizard tips, one per step
    TipBuyPrice,
    TipCurrentPrice,
    TipQuantity,
    TipResult,
    /// Market status line
    MarketOpen,
    MarketClosed,
    MarketClosedPrediction,
    PriceUpdated,
    LastUpdated,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 53] = [
        TranslationKey::AppTitle,
        TranslationKey::AppLabel,
        TranslationKey::ShortDescription,
        TranslationKey::Tagline,
        TranslationKey::BuyPriceLabel,
        TranslationKey::CurrentPriceLabel,
        TranslationKey::QuantityLabel,
        TranslationKey::PriceLabel,
        TranslationKey::QuantityShort,
        TranslationKey::Result,
        TranslationKey::UnitXi,
        TranslationKey::UnitDomlang,
        TranslationKey::UnitOunce,
        TranslationKey::UnitXiShort,
        TranslationKey::UnitDomlangShort,
        TranslationKey::UnitOunceShort,
        TranslationKey::ProfitPerXi,
        TranslationKey::Roi,
        TranslationKey::Language,
        TranslationKey::TotalBuyValue,
        TranslationKey::TotalCurrentValue,
        TranslationKey::TotalProfit,
        TranslationKey::EmptyState,
        TranslationKey::FillAll,
        TranslationKey::QuantityHint,
        TranslationKey::YouGain,
        TranslationKey::YouLose,
        TranslationKey::BreakEven,
        TranslationKey::YouPaid,
        TranslationKey::CurrentValue,
        TranslationKey::PriceNow,
        TranslationKey::ComparisonNote,
        TranslationKey::EquivalentTo,
        TranslationKey::AmountPlaceholder,
        TranslationKey::QuantityPlaceholder,
        TranslationKey::UseMarketPrice,
        TranslationKey::UseLatestMarket,
        TranslationKey::Loading,
        TranslationKey::WelcomeBack,
        TranslationKey::NewCalculation,
        TranslationKey::Next,
        TranslationKey::Back,
        TranslationKey::Finish,
        TranslationKey::TipPrices,
        TranslationKey::TipBuyPrice,
        TranslationKey::TipCurrentPrice,
        TranslationKey::TipQuantity,
        TranslationKey::TipResult,
        TranslationKey::MarketOpen,
        TranslationKey::MarketClosed,
        TranslationKey::MarketClosedPrediction,
        TranslationKey::PriceUpdated,
        TranslationKey::LastUpdated,
    ];

    /// "Per <unit>" selector label
    pub fn per_unit(unit: GoldUnit) -> Self {
        match unit {
            GoldUnit::Xi => TranslationKey::UnitXi,
            GoldUnit::Domlang => TranslationKey::UnitDomlang,
            GoldUnit::Ounce => TranslationKey::UnitOunce,
        }
    }

    /// Bare unit name
    pub fn unit_short(unit: GoldUnit) -> Self {
        match unit {
            GoldUnit::Xi => TranslationKey::UnitXiShort,
            GoldUnit::Domlang => TranslationKey::UnitDomlangShort,
            GoldUnit::Ounce => TranslationKey::UnitOunceShort,
        }
    }

    pub fn quantity_unit_short(unit: QuantityUnit) -> Self {
        Self::unit_short(unit.into())
    }

    /// Dotted catalog id, e.g. `common.app_title`
    pub fn id(&self) -> &'static str {
        match self {
            TranslationKey::AppTitle => "common.app_title",
            TranslationKey::AppLabel => "common.app_label",
            TranslationKey::ShortDescription => "common.short_description",
            TranslationKey::Tagline => "common.tagline",
            TranslationKey::BuyPriceLabel => "common.buy_price_label",
            TranslationKey::CurrentPriceLabel => "common.current_price_label",
            TranslationKey::QuantityLabel => "common.quantity_label",
            TranslationKey::PriceLabel => "common.price_label",
            TranslationKey::QuantityShort => "common.quantity_short",
            TranslationKey::Result => "common.result",
            TranslationKey::UnitXi => "common.unit_xi",
            TranslationKey::UnitDomlang => "common.unit_domlang",
            TranslationKey::UnitOunce => "common.unit_ounce",
            TranslationKey::UnitXiShort => "common.unit_xi_short",
            TranslationKey::UnitDomlangShort => "common.unit_domlang_short",
            TranslationKey::UnitOunceShort => "common.unit_ounce_short",
            TranslationKey::ProfitPerXi => "common.profit_per_xi",
            TranslationKey::Roi => "common.roi",
            TranslationKey::Language => "common.language",
            TranslationKey::TotalBuyValue => "common.total_buy_value",
            TranslationKey::TotalCurrentValue => "common.total_current_value",
            TranslationKey::TotalProfit => "common.total_profit",
            TranslationKey::EmptyState => "common.empty_state",
            TranslationKey::FillAll => "common.fill_all",
            TranslationKey::QuantityHint => "common.quantity_hint",
            TranslationKey::YouGain => "common.you_gain",
            TranslationKey::YouLose => "common.you_lose",
            TranslationKey::BreakEven => "common.break_even",
            TranslationKey::YouPaid => "common.you_paid",
            TranslationKey::CurrentValue => "common.current_value",
            TranslationKey::PriceNow => "common.price_now",
            TranslationKey::ComparisonNote => "common.comparison_note",
            TranslationKey::EquivalentTo => "common.equivalent_to",
            TranslationKey::AmountPlaceholder => "common.amount_placeholder",
            TranslationKey::QuantityPlaceholder => "common.quantity_placeholder",
            TranslationKey::UseMarketPrice => "common.use_market_price",
            TranslationKey::UseLatestMarket => "common.use_latest_market",
            TranslationKey::Loading => "common.loading",
            TranslationKey::WelcomeBack => "common.welcome_back",
            TranslationKey::NewCalculation => "common.new_calculation",
            TranslationKey::Next => "common.next",
            TranslationKey::Back => "common.back",
            TranslationKey::Finish => "common.finish",
            TranslationKey::TipPrices => "common.tip_prices",
            TranslationKey::TipBuyPrice => "common.tip_buy_price",
            TranslationKey::TipCurrentPrice => "common.tip_current_price",
            TranslationKey::TipQuantity => "common.tip_quantity",
            TranslationKey::TipResult => "common.tip_result",
            TranslationKey::MarketOpen => "common.market_open",
            TranslationKey::MarketClosed => "common.market_closed",
            TranslationKey::MarketClosedPrediction => "common.market_closed_prediction",
            TranslationKey::PriceUpdated => "common.price_updated",
            TranslationKey::LastUpdated => "common.last_updated",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
