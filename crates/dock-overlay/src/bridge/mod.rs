//! Host bridge
//!
//! Bidirectional channel to the native host application. Inbound messages
//! carry layout snapshots; outbound messages carry interactive-region
//! reports and arbitrary payload strings such as `SCRIPT_LOAD:`.
//!
//! When no [`HostChannel`] is present every outbound operation is a no-op,
//! which is the normal state when the page is opened in a plain browser.

mod report;
mod schedule;

pub use report::{format_region_report, parse_region_report};
pub use schedule::ReportSchedule;

use log::debug;

use crate::layout::LayoutSnapshot;
use crate::math::Rect;

/// Outbound half of the host connection
pub trait HostChannel {
    /// Deliver one raw message string to the host
    fn post_message(&mut self, message: &str);
}

type LayoutHandler = Box<dyn FnMut(&LayoutSnapshot)>;

/// Message passing between the overlay and the host
pub struct HostBridge<C> {
    channel: Option<C>,
    on_layout: Option<LayoutHandler>,
    schedule: ReportSchedule,
}

impl<C: HostChannel> HostBridge<C> {
    /// Create a bridge over `channel`, or a detached bridge when `None`
    pub fn new(channel: Option<C>) -> Self {
        Self {
            channel,
            on_layout: None,
            schedule: ReportSchedule::new(),
        }
    }

    /// Check if a host channel is attached
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    /// The attached channel
    pub fn channel(&self) -> Option<&C> {
        self.channel.as_ref()
    }

    /// Register the layout subscriber (last registration wins)
    pub fn on_layout(&mut self, handler: impl FnMut(&LayoutSnapshot) + 'static) {
        self.on_layout = Some(Box::new(handler));
    }

    /// Parse an inbound host message
    ///
    /// Returns the new snapshot after notifying the layout subscriber.
    /// Malformed payloads are dropped.
    pub fn handle_message(&mut self, raw: &str) -> Option<LayoutSnapshot> {
        match LayoutSnapshot::from_host_json(raw) {
            Ok(snapshot) => {
                if let Some(handler) = self.on_layout.as_mut() {
                    handler(&snapshot);
                }
                Some(snapshot)
            }
            Err(e) => {
                debug!("[bridge] dropped host message: {}", e);
                None
            }
        }
    }

    /// Send a raw string to the host unchanged
    ///
    /// Returns false when no channel is attached.
    pub fn send_message(&mut self, raw: &str) -> bool {
        match self.channel.as_mut() {
            Some(channel) => {
                channel.post_message(raw);
                true
            }
            None => false,
        }
    }

    /// Send one interactive-region report built from `regions`
    ///
    /// Returns the report that was sent, or `None` without a channel.
    pub fn report(&mut self, regions: &[Rect]) -> Option<String> {
        let channel = self.channel.as_mut()?;
        let report = format_region_report(regions);
        channel.post_message(&report);
        debug!("[bridge] reported {} bytes of regions", report.len());
        Some(report)
    }

    /// Periodic report and resync timing
    #[inline]
    pub fn schedule(&self) -> &ReportSchedule {
        &self.schedule
    }

    /// Start periodic reporting, replacing any previous interval
    ///
    /// The first report is due immediately.
    pub fn start_reporting(&mut self, interval_ms: f64, now_ms: f64) {
        if self.channel.is_none() {
            return;
        }
        self.schedule.start(interval_ms, now_ms);
    }

    /// Stop periodic reporting; pending resyncs are cancelled too
    pub fn stop_reporting(&mut self) {
        self.schedule.stop();
    }

    /// Request a report `delay_ms` from now, superseding a pending one
    pub fn request_resync(&mut self, now_ms: f64, delay_ms: f64) {
        if self.channel.is_none() {
            return;
        }
        self.schedule.request_resync(now_ms, delay_ms);
    }

    /// Advance timers; true when a report is due now
    pub fn poll(&mut self, now_ms: f64) -> bool {
        self.schedule.poll(now_ms)
    }

    /// Detach the channel and stop all timers
    pub fn disconnect(&mut self) -> Option<C> {
        self.schedule.stop();
        self.on_layout = None;
        self.channel.take()
    }
}
