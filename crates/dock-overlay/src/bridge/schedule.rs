//! Report timing driven by injected time

/// Periodic report interval plus a debounced one-shot resync
///
/// Nothing here owns a timer. The caller feeds the current time to
/// [`poll`](Self::poll) from its own heartbeat and sends a report whenever
/// it returns true.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportSchedule {
    interval_ms: Option<f64>,
    next_due_ms: Option<f64>,
    resync_at_ms: Option<f64>,
}

impl ReportSchedule {
    /// Create a stopped schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if periodic reporting is active
    #[inline]
    pub fn is_running(&self) -> bool {
        self.interval_ms.is_some()
    }

    /// Active interval
    #[inline]
    pub fn interval_ms(&self) -> Option<f64> {
        self.interval_ms
    }

    /// Time of the pending resync, if any
    #[inline]
    pub fn pending_resync(&self) -> Option<f64> {
        self.resync_at_ms
    }

    /// Start (or restart) the periodic report; the first one is due at `now_ms`
    pub fn start(&mut self, interval_ms: f64, now_ms: f64) {
        self.interval_ms = Some(interval_ms.max(1.0));
        self.next_due_ms = Some(now_ms);
    }

    /// Stop the periodic report and drop any pending resync
    pub fn stop(&mut self) {
        self.interval_ms = None;
        self.next_due_ms = None;
        self.resync_at_ms = None;
    }

    /// Schedule a one-shot report `delay_ms` from now
    ///
    /// A later request replaces an earlier pending one.
    pub fn request_resync(&mut self, now_ms: f64, delay_ms: f64) {
        self.resync_at_ms = Some(now_ms + delay_ms.max(0.0));
    }

    /// Advance to `now_ms`; true when at least one report is due
    ///
    /// Missed periodic ticks collapse into a single report.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let mut due = false;

        if let Some(at) = self.resync_at_ms {
            if now_ms >= at {
                self.resync_at_ms = None;
                due = true;
            }
        }

        if let (Some(interval), Some(next)) = (self.interval_ms, self.next_due_ms) {
            if now_ms >= next {
                let missed = ((now_ms - next) / interval).floor();
                self.next_due_ms = Some(next + (missed + 1.0) * interval);
                due = true;
            }
        }

        due
    }
}
