//! Poll-Driven Scan/Advertise Scheduler
//!
//! ## Overview
//!
//! The thermostat cycle is: broadcast a scan request carrying the set-point,
//! listen for a reply broadcast with a measured reading, compute feels-like,
//! publish the result, repeat every refresh period. The platform wireless
//! layer owns the radio; this module owns everything else.
//!
//! Instead of a background task mutating shared state, the monitor is an
//! explicit state machine:
//!
//! ```text
//! Platform glue                    Monitor                   Presentation
//!      │   poll(now) ──────────────→ │                            │
//!      │ ←── [Advertise, StartScan]  │                            │
//!      │   on_reading(t, rh) ──────→ │ feels_like(t, rh)          │
//!      │   poll(now) ──────────────→ │ ──→ Event queue ──────────→│ pop_event()
//!      │ ←── [StopScan]              │                            │
//! ```
//!
//! The glue calls [`Monitor::poll`] on its tick (timer callback, main loop,
//! whatever the platform offers), executes the returned [`Action`]s against
//! the radio, and forwards scan results through the [`ScanEvents`] trait.
//! The presentation layer drains [`Monitor::pop_event`]. Nothing blocks,
//! nothing allocates, and no state is shared.
//!
//! ## Timing
//!
//! Defaults mirror the reference firmware: a 10 s refresh period, a 5 s scan
//! window, and a 100 ms advertisement pulse. A window closes early on the
//! first reading - one reading per cycle is all the display needs.
//!
//! ## Overflow
//!
//! The event queue is bounded. When full, the newest event is dropped and
//! counted; the engine never blocks the radio callback path.

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

use heapless::Deque;

use crate::constants::{
    DEFAULT_ADVERTISE_PULSE_MS, DEFAULT_REFRESH_PERIOD_MS, DEFAULT_SCAN_WINDOW_MS,
};
use crate::errors::{EngineError, EngineResult};
use crate::events::{ApparentReading, Event, Reading};
use crate::feels_like::feels_like;
use crate::history::History;
use crate::time::Timestamp;
use crate::traits::ScanEvents;

/// Computed readings kept for trend display
pub const HISTORY_CAPACITY: usize = 8;

/// Most actions a single poll can emit
const MAX_ACTIONS: usize = 4;

/// One radio command the glue layer must execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start broadcasting the given frame
    Advertise(Frame),
    /// Stop the current broadcast (end of the advertise pulse)
    StopAdvertise,
    /// Open a scan window and route results to [`ScanEvents`]
    StartScan,
    /// Close the scan window
    StopScan,
}

/// Decoded content of an outgoing advertisement
///
/// Byte-level framing is the glue layer's concern; the engine only decides
/// what the broadcast means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Deliver the set-point to the heater
    SetPoint {
        /// Requested temperature in whole °C
        celsius: i16,
    },
    /// Ask the heater to reply with a measurement broadcast
    ScanRequest {
        /// Current set-point, piggybacked on the request
        celsius: i16,
    },
}

/// Timing knobs for the refresh cycle
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Milliseconds between automatic refresh cycles
    pub refresh_period_ms: u64,
    /// Milliseconds a scan window stays open without a reading
    pub scan_window_ms: u64,
    /// Milliseconds an advertisement keeps broadcasting
    pub advertise_pulse_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_period_ms: DEFAULT_REFRESH_PERIOD_MS,
            scan_window_ms: DEFAULT_SCAN_WINDOW_MS,
            advertise_pulse_ms: DEFAULT_ADVERTISE_PULSE_MS,
        }
    }
}

/// The engine state machine
///
/// `QUEUE` is the event queue capacity. The monitor is single-owner: the
/// glue layer drives it, the presentation layer drains it through a shared
/// reference the application arranges (mutex, single-threaded executor -
/// whatever fits the platform).
pub struct Monitor<const QUEUE: usize = 16> {
    config: MonitorConfig,
    set_point: i16,
    scanning: bool,
    stop_scan_pending: bool,
    scan_until: Option<Timestamp>,
    advertise_until: Option<Timestamp>,
    next_refresh_at: Option<Timestamp>,
    last_now: Timestamp,
    events: Deque<Event, QUEUE>,
    dropped_events: u32,
    history: History<HISTORY_CAPACITY>,
}

impl<const QUEUE: usize> Monitor<QUEUE> {
    /// Create a monitor with the given timing configuration
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            set_point: 0,
            scanning: false,
            stop_scan_pending: false,
            scan_until: None,
            advertise_until: None,
            next_refresh_at: None,
            last_now: 0,
            events: Deque::new(),
            dropped_events: 0,
            history: History::new(),
        }
    }

    /// Advance the state machine to `now` and collect due radio commands
    ///
    /// The first poll only arms the refresh timer; the first scan cycle
    /// starts one full refresh period later, matching the reference
    /// firmware's leading delay.
    pub fn poll(&mut self, now: Timestamp) -> heapless::Vec<Action, MAX_ACTIONS> {
        self.last_now = now;
        let mut actions = heapless::Vec::new();

        if let Some(until) = self.advertise_until {
            if now >= until {
                self.advertise_until = None;
                let _ = actions.push(Action::StopAdvertise);
            }
        }

        if self.stop_scan_pending {
            // A reading or failure closed the window between polls
            self.stop_scan_pending = false;
            let _ = actions.push(Action::StopScan);
        } else if self.scanning {
            if let Some(until) = self.scan_until {
                if now >= until {
                    self.close_window(now);
                    self.stop_scan_pending = false;
                    let _ = actions.push(Action::StopScan);
                }
            }
        }

        match self.next_refresh_at {
            None => {
                self.next_refresh_at = Some(now + self.config.refresh_period_ms);
            }
            Some(due) if now >= due && !self.scanning => {
                self.next_refresh_at = Some(now + self.config.refresh_period_ms);
                self.advertise_until = Some(now + self.config.advertise_pulse_ms);
                let _ = actions.push(Action::Advertise(Frame::ScanRequest {
                    celsius: self.set_point,
                }));
                self.scanning = true;
                self.scan_until = Some(now + self.config.scan_window_ms);
                self.push_event(Event::ScanStateChanged {
                    active: true,
                    timestamp: now,
                });
                let _ = actions.push(Action::StartScan);
            }
            Some(_) => {}
        }

        actions
    }

    /// Change the requested set-point
    pub fn update_set_point(&mut self, celsius: i16) {
        if celsius == self.set_point {
            return;
        }
        self.set_point = celsius;
        self.push_event(Event::SetPointChanged {
            celsius,
            timestamp: self.last_now,
        });
    }

    /// Current set-point in whole °C
    pub fn set_point(&self) -> i16 {
        self.set_point
    }

    /// Broadcast the set-point now (the explicit "send" path)
    ///
    /// Returns the command to execute immediately; the pulse is stopped by a
    /// later [`Monitor::poll`].
    pub fn send_set_point(&mut self, now: Timestamp) -> Action {
        self.last_now = now;
        self.advertise_until = Some(now + self.config.advertise_pulse_ms);
        Action::Advertise(Frame::SetPoint {
            celsius: self.set_point,
        })
    }

    /// Report that the platform advertiser rejected a broadcast
    pub fn on_advertise_failure(&mut self, code: i32) {
        self.advertise_until = None;
        self.push_event(Event::Failure {
            error: EngineError::AdvertiseFailed { code },
            timestamp: self.last_now,
        });
    }

    /// Queue an event on behalf of the glue layer
    ///
    /// Lets the platform side surface its own status (a failure it observed
    /// outside a scan callback, say) through the same queue the engine uses.
    /// Unlike the engine's internal publishing, the caller learns about
    /// overflow and can retry after the consumer drains.
    pub fn publish(&mut self, event: Event) -> EngineResult<()> {
        match self.events.push_back(event) {
            Ok(()) => Ok(()),
            Err(_) => {
                self.dropped_events += 1;
                Err(EngineError::QueueFull)
            }
        }
    }

    /// Next published event, oldest first
    pub fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Events dropped because the queue was full
    pub fn dropped_events(&self) -> u32 {
        self.dropped_events
    }

    /// True while a scan window is open
    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Recent computed readings, oldest first
    pub fn history(&self) -> &History<HISTORY_CAPACITY> {
        &self.history
    }

    /// Latest computed reading, if any cycle has completed
    pub fn last_computed(&self) -> Option<&ApparentReading> {
        self.history.last()
    }

    fn close_window(&mut self, now: Timestamp) {
        self.scanning = false;
        self.scan_until = None;
        self.push_event(Event::ScanStateChanged {
            active: false,
            timestamp: now,
        });
    }

    fn push_event(&mut self, event: Event) {
        if self.events.push_back(event).is_err() {
            self.dropped_events += 1;
            log_warn!("event queue full, dropping {:?}", event);
        }
    }
}

impl<const QUEUE: usize> Default for Monitor<QUEUE> {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

impl<const QUEUE: usize> ScanEvents for Monitor<QUEUE> {
    fn on_reading(&mut self, temp_c: f64, humidity_pct: f64) {
        let timestamp = self.last_now;
        let reading = Reading {
            temp_c,
            humidity_pct,
            timestamp,
        };

        if !reading.is_finite() {
            // A garbled frame decoded to NaN/infinity; don't let it reach
            // the display as a number
            self.push_event(Event::Failure {
                error: EngineError::InvalidReading,
                timestamp,
            });
            return;
        }

        self.push_event(Event::Reading(reading));

        let computed = ApparentReading {
            temp_c,
            humidity_pct,
            feels_like_c: feels_like(temp_c, humidity_pct),
            timestamp,
        };
        self.history.push(computed);
        self.push_event(Event::Computed(computed));

        // One reading per cycle; release the radio early
        if self.scanning {
            self.close_window(timestamp);
            self.stop_scan_pending = true;
        }
    }

    fn on_failure(&mut self, code: i32) {
        let timestamp = self.last_now;
        self.push_event(Event::Failure {
            error: EngineError::ScanFailed { code },
            timestamp,
        });
        if self.scanning {
            self.close_window(timestamp);
            self.stop_scan_pending = true;
        }
    }
}
