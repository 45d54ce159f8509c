use std::time::{Duration, Instant};

/// Decides when the next sample is due.
///
/// The first poll is always due. After that a tick fires once `period` has passed
/// since the previous one. Missed ticks are not made up: a late poll fires a single
/// tick and the schedule restarts from that moment.
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns `true` if a tick is due at `now`, and if so schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.next_due.is_none_or(|next_due| next_due <= now);
        if due {
            self.next_due = Some(now + self.period);
        }
        due
    }

    /// How long until the next tick; zero if one is already due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |next_due| next_due.saturating_duration_since(now))
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(500);

    #[test]
    fn first_poll_is_due() {
        let mut timer = TickTimer::new(PERIOD);
        assert!(timer.poll(Instant::now()));
    }

    #[test]
    fn waits_one_period_between_ticks() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD);

        assert!(timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(100)));
        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + PERIOD));
        assert!(!timer.poll(start + PERIOD + Duration::from_millis(1)));
    }

    #[test]
    fn late_poll_fires_once() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD);
        assert!(timer.poll(start));

        let late = start + PERIOD * 5;
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.until_next(late), PERIOD);
    }

    #[test]
    fn until_next_counts_down() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD);
        assert_eq!(timer.until_next(start), Duration::ZERO);

        timer.poll(start);
        assert_eq!(
            timer.until_next(start + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
        assert_eq!(timer.until_next(start + PERIOD * 2), Duration::ZERO);
    }
}
