use chrono::Utc;
use meas_core::Timestamp;
use meas_ports::Clock;

/// Wall-clock UTC time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "system"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_tracks_wall_clock() {
        let before = Utc::now();
        let now = SystemClock::new().now();
        let after = Utc::now();

        assert!(before <= now && now <= after);
        assert!(after - before < Duration::seconds(1));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        assert_eq!(clock.name(), "system");
    }
}
