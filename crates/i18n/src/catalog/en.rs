use crate::keys::TranslationKey;

pub(crate) fn lookup(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::AppTitle => "Gold ROI Calculator",
        TranslationKey::AppLabel => "Calculator",
        TranslationKey::ShortDescription => "Quick snapshot of how your gold is doing today.",
        TranslationKey::Tagline => "Simple gold shop calculator for Cambodia",
        TranslationKey::BuyPriceLabel => "Buy Price",
        TranslationKey::CurrentPriceLabel => "Current Price",
        TranslationKey::QuantityLabel => "Quantity",
        TranslationKey::PriceLabel => "Price",
        TranslationKey::QuantityShort => "Qty",
        TranslationKey::Result => "Result",
        TranslationKey::UnitXi => "Per Xi",
        TranslationKey::UnitDomlang => "Per Domlang",
        TranslationKey::UnitOunce => "Per Ounce",
        TranslationKey::UnitXiShort => "Xi",
        TranslationKey::UnitDomlangShort => "Domlang",
        TranslationKey::UnitOunceShort => "Ounce",
        TranslationKey::ProfitPerXi => "Profit per Xi",
        TranslationKey::Roi => "ROI",
        TranslationKey::Language => "Language",
        TranslationKey::TotalBuyValue => "Total Buy Value",
        TranslationKey::TotalCurrentValue => "Total Current Value",
        TranslationKey::TotalProfit => "Total Profit / Loss",
        TranslationKey::EmptyState => "Enter values to see your profit and ROI.",
        TranslationKey::FillAll => "Enter all fields",
        TranslationKey::QuantityHint => "xi or domlang",
        TranslationKey::YouGain => "You gain",
        TranslationKey::YouLose => "You lose",
        TranslationKey::BreakEven => "No gain or loss",
        TranslationKey::YouPaid => "You paid",
        TranslationKey::CurrentValue => "Current value",
        TranslationKey::PriceNow => "Price now",
        TranslationKey::ComparisonNote => "Prices are compared using the same gold unit",
        TranslationKey::EquivalentTo => "Equivalent to",
        TranslationKey::AmountPlaceholder => "Enter amount",
        TranslationKey::QuantityPlaceholder => "Enter quantity",
        TranslationKey::UseMarketPrice => "Use Market Price",
        TranslationKey::UseLatestMarket => "Get Latest Price",
        TranslationKey::Loading => "Loading...",
        TranslationKey::WelcomeBack => "Welcome back! Want to check your profit now?",
        TranslationKey::NewCalculation => "New calculation",
        TranslationKey::Next => "Next",
        TranslationKey::Back => "Back",
        TranslationKey::Finish => "See Result",
        TranslationKey::TipPrices => "Enter your buy and current prices",
        TranslationKey::TipBuyPrice => "Enter your buy price",
        TranslationKey::TipCurrentPrice => "Enter the current price",
        TranslationKey::TipQuantity => "Add your quantity",
        TranslationKey::TipResult => "Your result is ready",
        TranslationKey::MarketOpen => "Market open",
        TranslationKey::MarketClosed => "Market closed",
        TranslationKey::MarketClosedPrediction => "The market is closed. Showing the last known price until it reopens.",
        TranslationKey::PriceUpdated => "Price updated",
        TranslationKey::LastUpdated => "Last updated",
    }
}
