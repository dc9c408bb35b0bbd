//! Keystroke debouncing
//!
//! A cancellable delayed query update polled by the event loop. Each new
//! keystroke replaces the pending text and pushes the deadline back; the
//! settled text is the same text undebounced input would have produced.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    text: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// A zero delay disables debouncing
    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Replace any pending text, restarting the delay
    pub fn schedule(&mut self, text: String, now: Instant) {
        self.pending = Some(Pending {
            text,
            deadline: now + self.delay,
        });
    }

    pub fn pending_text(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.text.as_str())
    }

    /// Take the pending text once its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.flush(),
            _ => None,
        }
    }

    /// Take the pending text regardless of the deadline
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keystroke_restarts_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        debouncer.schedule("t".to_string(), start);
        debouncer.schedule("tr".to_string(), start + Duration::from_millis(80));

        assert_eq!(debouncer.poll(start + Duration::from_millis(120)), None);
        assert_eq!(debouncer.pending_text(), Some("tr"));
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(180)),
            Some("tr".to_string())
        );
        assert_eq!(debouncer.pending_text(), None);
    }

    #[test]
    fn test_flush_and_time_until_due() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        assert!(debouncer.is_enabled());
        assert_eq!(debouncer.time_until_due(start), None);

        debouncer.schedule("lum".to_string(), start);
        assert_eq!(
            debouncer.time_until_due(start + Duration::from_millis(20)),
            Some(Duration::from_millis(30))
        );
        assert_eq!(debouncer.flush(), Some("lum".to_string()));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_zero_delay_is_disabled() {
        assert!(!Debouncer::new(Duration::ZERO).is_enabled());
    }
}
