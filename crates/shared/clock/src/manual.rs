use chrono::Duration;
use meas_core::Timestamp;
use meas_ports::Clock;
use parking_lot::RwLock;

/// Fixed clock that only advances when explicitly moved
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            current_time: RwLock::new(start),
        }
    }

    /// Advance the time by a specified duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current_time.write();
        *current += duration;
    }

    /// Explicitly set the time
    pub fn set(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "manual"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_manual_clock_is_frozen() {
        let start = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_advance_and_set() {
        let start = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);

        clock.advance(Duration::minutes(90));
        assert_eq!(clock.now() - start, Duration::minutes(90));

        let later = Utc.with_ymd_and_hms(2025, 6, 7, 9, 30, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
