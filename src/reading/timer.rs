use std::time::{Duration, Instant};

/// Milliseconds each word stays on screen at the given rate.
///
/// Uses floating-point division with rounding, not integer truncation:
/// 165 WPM is 363.63ms and must come out as 364, not 363.
pub fn wpm_to_millis(wpm: u32) -> u64 {
    (60_000.0 / f64::from(wpm.max(1))).round() as u64
}

/// Deadline-based handle for the recurring word-advance tick.
///
/// The player owns at most one of these; "playing" means exactly that the
/// handle exists. The event loop asks `time_remaining` for its poll timeout
/// and fires a tick once the deadline passes. Deadlines advance by whole
/// intervals (`rearm`), so handling a key press mid-interval does not stretch
/// the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    interval: Duration,
    next_fire: Instant,
}

impl TickTimer {
    /// Arms a fresh timer whose first deadline is one full interval from now.
    pub fn arm(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_fire
    }

    /// Schedules the next deadline one interval after the previous one.
    pub fn rearm(&mut self) {
        self.next_fire += self.interval;
    }

    /// Time left until the deadline; zero once it has passed.
    pub fn time_remaining(&self, now: Instant) -> Duration {
        self.next_fire.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_millis_300() {
        // 60,000 / 300 = 200ms per word
        assert_eq!(wpm_to_millis(300), 200);
    }

    #[test]
    fn test_wpm_to_millis_600() {
        assert_eq!(wpm_to_millis(600), 100);
    }

    #[test]
    fn test_wpm_to_millis_rounds_165() {
        // 60,000 / 165 = 363.63... -> 364; truncation would give 363
        assert_eq!(wpm_to_millis(165), 364);
    }

    #[test]
    fn test_wpm_to_millis_rounds_350() {
        // 60,000 / 350 = 171.43... -> 171
        assert_eq!(wpm_to_millis(350), 171);
    }

    #[test]
    fn test_wpm_to_millis_zero_guard() {
        // Zero never reaches the timer (clamping), but the conversion
        // must still be total
        assert_eq!(wpm_to_millis(0), 60_000);
    }

    #[test]
    fn test_timer_not_due_before_deadline() {
        let timer = TickTimer::arm(Duration::from_millis(200));
        assert!(!timer.is_due(Instant::now()));
    }

    #[test]
    fn test_timer_due_after_deadline() {
        let timer = TickTimer::arm(Duration::from_millis(200));
        let later = Instant::now() + Duration::from_millis(500);
        assert!(timer.is_due(later));
    }

    #[test]
    fn test_rearm_advances_by_one_interval() {
        let mut timer = TickTimer::arm(Duration::from_millis(200));
        let after_first = Instant::now() + Duration::from_millis(250);
        assert!(timer.is_due(after_first));
        timer.rearm();
        // New deadline is ~400ms from arm time, so 250ms in it is not due
        assert!(!timer.is_due(after_first));
    }

    #[test]
    fn test_time_remaining_saturates_at_zero() {
        let timer = TickTimer::arm(Duration::from_millis(50));
        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(timer.time_remaining(later), Duration::ZERO);
    }
}
