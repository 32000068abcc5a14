use crate::keys::TranslationKey;

pub(crate) fn lookup(key: TranslationKey) -> Option<&'static str> {
    let text = match key {
        TranslationKey::AppTitle => "黄金投资回报计算器",
        TranslationKey::AppLabel => "计算器",
        TranslationKey::ShortDescription => "按今日金价快速查看你的收益。",
        TranslationKey::Tagline => "柬埔寨金店简单计算器",
        TranslationKey::BuyPriceLabel => "买入价格",
        TranslationKey::CurrentPriceLabel => "当前价格",
        TranslationKey::QuantityLabel => "数量",
        TranslationKey::PriceLabel => "价格",
        TranslationKey::QuantityShort => "数量",
        TranslationKey::Result => "结果",
        TranslationKey::UnitXi => "每希",
        TranslationKey::UnitDomlang => "每东朗",
        TranslationKey::UnitOunce => "每盎司",
        TranslationKey::UnitXiShort => "希",
        TranslationKey::UnitDomlangShort => "东朗",
        TranslationKey::UnitOunceShort => "盎司",
        TranslationKey::ProfitPerXi => "每希利润",
        TranslationKey::Roi => "投资回报率",
        TranslationKey::Language => "语言",
        TranslationKey::TotalBuyValue => "买入总额",
        TranslationKey::TotalCurrentValue => "当前总额",
        TranslationKey::TotalProfit => "总利润 / 亏损",
        TranslationKey::EmptyState => "请输入数值以查看利润和回报率。",
        TranslationKey::FillAll => "请填写完整",
        TranslationKey::QuantityHint => "希或东朗",
        TranslationKey::YouGain => "盈利",
        TranslationKey::YouLose => "亏损",
        TranslationKey::BreakEven => "不赚不赔",
        TranslationKey::YouPaid => "已支付",
        TranslationKey::CurrentValue => "当前价值",
        TranslationKey::PriceNow => "现价",
        TranslationKey::ComparisonNote => "价格将以同一黄金单位比较",
        TranslationKey::EquivalentTo => "相当于",
        TranslationKey::AmountPlaceholder => "输入金额",
        TranslationKey::QuantityPlaceholder => "输入数量",
        TranslationKey::UseMarketPrice => "使用市场现价",
        TranslationKey::UseLatestMarket => "获取最新金价",
        TranslationKey::Loading => "正在加载...",
        TranslationKey::WelcomeBack => "欢迎回来！想现在查看你的收益吗？",
        TranslationKey::NewCalculation => "重新计算",
        TranslationKey::Next => "下一步",
        TranslationKey::Back => "返回",
        TranslationKey::Finish => "查看结果",
        TranslationKey::TipPrices => "请输入买入和当前价格",
        TranslationKey::TipBuyPrice => "请输入买入价格",
        TranslationKey::TipCurrentPrice => "请输入当前价格",
        TranslationKey::TipQuantity => "请输入数量",
        _ => return None,
    };
    Some(text)
}
