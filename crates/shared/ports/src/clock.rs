use meas_core::Timestamp;

/// Source of the current time
///
/// Market hours and cache freshness are both judged against this, so tests
/// can pin them to any moment of the week.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Identifier for logs
    fn name(&self) -> &str {
        "clock"
    }
}
