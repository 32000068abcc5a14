use crate::keys::TranslationKey;

pub(crate) fn lookup(key: TranslationKey) -> Option<&'static str> {
    let text = match key {
        TranslationKey::AppTitle => "គណនាផលចំណេញមាស",
        TranslationKey::AppLabel => "កម្មវិធីគណនា",
        TranslationKey::ShortDescription => "មើលតម្លៃមាសរបស់អ្នកយ៉ាងឆាប់រហ័សតាមតម្លៃថ្ងៃនេះ។",
        TranslationKey::Tagline => "គណនាផលចំណេញសាមញ្ញសម្រាប់ហាងមាស",
        TranslationKey::BuyPriceLabel => "តម្លៃទិញ",
        TranslationKey::CurrentPriceLabel => "តម្លៃបច្ចុប្បន្ន",
        TranslationKey::QuantityLabel => "បរិមាណ",
        TranslationKey::PriceLabel => "តម្លៃ",
        TranslationKey::QuantityShort => "បរិ.",
        TranslationKey::Result => "លទ្ធផល",
        TranslationKey::UnitXi => "ក្នុងមួយ ជី",
        TranslationKey::UnitDomlang => "ក្នុងមួយ ដំឡឹង",
        TranslationKey::UnitOunce => "ក្នុងមួយ អោន",
        TranslationKey::UnitXiShort => "ជី",
        TranslationKey::UnitDomlangShort => "ដំឡឹង",
        TranslationKey::UnitOunceShort => "អោន",
        TranslationKey::ProfitPerXi => "ចំណេញក្នុងមួយ ជី",
        TranslationKey::Roi => "អត្រាចំណេញ",
        TranslationKey::Language => "ភាសា",
        TranslationKey::TotalBuyValue => "តម្លៃទិញសរុប",
        TranslationKey::TotalCurrentValue => "តម្លៃបច្ចុប្បន្នសរុប",
        TranslationKey::TotalProfit => "ចំណេញ / ខាតសរុប",
        TranslationKey::EmptyState => "បញ្ចូលតម្លៃដើម្បីមើលចំណេញ និង ROI របស់អ្នក។",
        TranslationKey::FillAll => "បំពេញទាំងអស់",
        TranslationKey::QuantityHint => "ជី ឬ ដំឡឹង",
        TranslationKey::YouGain => "អ្នកចំណេញ",
        TranslationKey::YouLose => "អ្នកខាត",
        TranslationKey::BreakEven => "គ្មានចំណេញ ឬ ខាត",
        TranslationKey::YouPaid => "តម្លៃកាលទិញសរុប",
        TranslationKey::CurrentValue => "តម្លៃបច្ចុប្បន្ន",
        TranslationKey::PriceNow => "តម្លៃឥឡូវ",
        TranslationKey::ComparisonNote => "តម្លៃទាំងអស់ត្រូវបានប្រៀបធៀបទៅកាន់ឯកតាមាសដូចគ្នា",
        TranslationKey::EquivalentTo => "ស្មើនឹងប្រហែល",
        TranslationKey::AmountPlaceholder => "បញ្ចូលចំនួន",
        TranslationKey::QuantityPlaceholder => "បញ្ចូលបរិមាណ",
        TranslationKey::UseMarketPrice => "ប្រើតម្លៃទីផ្សារឥឡូវ",
        TranslationKey::UseLatestMarket => "ទាញយកតម្លៃឥឡូវ",
        TranslationKey::Loading => "កំពុងទាញយក...",
        TranslationKey::WelcomeBack => "រីករាយដែលបានជួបគ្នាវិញ! តើអ្នកចង់ដឹងពីចំណេញឥឡូវទេ?",
        TranslationKey::NewCalculation => "គណនាថ្មី",
        TranslationKey::Next => "បន្ទាប់",
        TranslationKey::Back => "ថយក្រោយ",
        TranslationKey::Finish => "មើលលទ្ធផល",
        TranslationKey::TipPrices => "សូមបញ្ចូលតម្លៃទិញ និងតម្លៃបច្ចុប្បន្ន",
        TranslationKey::TipBuyPrice => "សូមបញ្ចូលតម្លៃដែលអ្នកទិញ",
        TranslationKey::TipCurrentPrice => "សូមបញ្ចូលតម្លៃបច្ចុប្បន្ន",
        TranslationKey::TipQuantity => "សូមបញ្ចូលបរិមាណ",
        _ => return None,
    };
    Some(text)
}
