use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed two-decimal rendering for display
///
/// No grouping separators, no currency symbol. Halves round away from zero on
/// the exact binary value, so `0.125` prints `0.13` while `1.005` (stored just
/// below the half) prints `1.00`. Negative zero prints as `0.00` and
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                return "0.00".to_string();
            }
            rounded.rescale(2);
            rounded.to_string()
        }
        // Beyond Decimal range every f64 is a whole number
        None => format!("{:.2}", value),
    }
}
