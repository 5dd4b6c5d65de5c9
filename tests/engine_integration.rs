//! End-to-end engine tests
//!
//! Drives a monitor through full thermostat cycles with a manual clock,
//! playing the roles of both the platform glue (executing actions, feeding
//! readings) and the presentation layer (draining events).

use feelslike_core::{
    feels_like, Action, Clock, EngineError, Event, Frame, ManualClock, Monitor, ScanEvents,
};

/// Minimal stand-in for the platform radio: records commands and tracks
/// whether it is currently scanning or advertising.
#[derive(Default)]
struct FakeRadio {
    scanning: bool,
    advertising: Option<Frame>,
    log: Vec<Action>,
}

impl FakeRadio {
    fn execute(&mut self, action: Action) {
        match action {
            Action::Advertise(frame) => self.advertising = Some(frame),
            Action::StopAdvertise => self.advertising = None,
            Action::StartScan => self.scanning = true,
            Action::StopScan => self.scanning = false,
        }
        self.log.push(action);
    }

    fn run<const Q: usize>(&mut self, monitor: &mut Monitor<Q>, clock: &ManualClock) {
        for action in monitor.poll(clock.now_ms()) {
            self.execute(action);
        }
    }
}

fn drain<const Q: usize>(monitor: &mut Monitor<Q>) -> Vec<Event> {
    std::iter::from_fn(|| monitor.pop_event()).collect()
}

#[test]
fn full_cycle_produces_feels_like() {
    let mut clock = ManualClock::new(0);
    let mut radio = FakeRadio::default();
    let mut monitor: Monitor = Monitor::default();

    radio.run(&mut monitor, &clock); // arms the refresh timer

    clock.advance(10_000);
    radio.run(&mut monitor, &clock);
    assert!(radio.scanning);
    assert_eq!(
        radio.advertising,
        Some(Frame::ScanRequest { celsius: 0 })
    );

    // The heater replies mid-window
    clock.advance(800);
    monitor.on_reading(31.5, 72.0);

    clock.advance(100);
    radio.run(&mut monitor, &clock);
    assert!(!radio.scanning, "window closes after the first reading");

    let events = drain(&mut monitor);
    let computed = events
        .iter()
        .find_map(|e| match e {
            Event::Computed(c) => Some(*c),
            _ => None,
        })
        .expect("one computed reading per cycle");

    assert_eq!(computed.temp_c, 31.5);
    assert_eq!(computed.humidity_pct, 72.0);
    assert_eq!(computed.feels_like_c, feels_like(31.5, 72.0));
    // 31.5°C at 72% RH is oppressive; feels-like must exceed air temp
    assert!(computed.feels_like_c > 31.5);
}

#[test]
fn cycles_repeat_on_schedule() {
    let mut clock = ManualClock::new(0);
    let mut radio = FakeRadio::default();
    let mut monitor: Monitor = Monitor::default();

    radio.run(&mut monitor, &clock);

    for cycle in 0..3u64 {
        clock.set((cycle + 1) * 10_000);
        radio.run(&mut monitor, &clock);
        assert!(radio.scanning, "cycle {cycle} opened a window");

        monitor.on_reading(22.0 + cycle as f64, 50.0);
        clock.advance(200);
        radio.run(&mut monitor, &clock);
        assert!(!radio.scanning);
    }

    // History holds one entry per cycle, newest last
    let history: Vec<f64> = monitor.history().iter().map(|r| r.temp_c).collect();
    assert_eq!(history, vec![22.0, 23.0, 24.0]);

    let starts = radio
        .log
        .iter()
        .filter(|a| matches!(a, Action::StartScan))
        .count();
    let stops = radio
        .log
        .iter()
        .filter(|a| matches!(a, Action::StopScan))
        .count();
    assert_eq!(starts, 3);
    assert_eq!(stops, 3);
}

#[test]
fn empty_window_then_recovery() {
    let mut clock = ManualClock::new(0);
    let mut radio = FakeRadio::default();
    let mut monitor: Monitor = Monitor::default();

    radio.run(&mut monitor, &clock);

    // First window: no reply at all
    clock.set(10_000);
    radio.run(&mut monitor, &clock);
    clock.set(15_000);
    radio.run(&mut monitor, &clock);
    assert!(!radio.scanning);
    assert!(monitor.last_computed().is_none());

    // Second window: the platform reports a scan failure
    clock.set(20_000);
    radio.run(&mut monitor, &clock);
    monitor.on_failure(2);
    clock.set(20_100);
    radio.run(&mut monitor, &clock);
    assert!(!radio.scanning);

    // Third window: a reading finally lands
    clock.set(30_000);
    radio.run(&mut monitor, &clock);
    monitor.on_reading(19.5, 45.0);

    let events = drain(&mut monitor);
    assert!(events.contains(&Event::Failure {
        error: EngineError::ScanFailed { code: 2 },
        timestamp: 20_000
    }));
    let computed = monitor.last_computed().expect("third cycle succeeded");
    // Below the 26°C crossover, so the apparent-temperature model applies
    assert_eq!(computed.feels_like_c, feels_like(19.5, 45.0));
    assert!(computed.feels_like_c < 19.5);
}

#[test]
fn set_point_broadcast_path() {
    let mut clock = ManualClock::new(0);
    let mut radio = FakeRadio::default();
    let mut monitor: Monitor = Monitor::default();

    radio.run(&mut monitor, &clock);
    monitor.update_set_point(23);

    // User taps "send": broadcast starts immediately
    clock.set(1_000);
    let action = monitor.send_set_point(clock.now_ms());
    radio.execute(action);
    assert_eq!(radio.advertising, Some(Frame::SetPoint { celsius: 23 }));

    // Pulse ends on the next poll past the pulse duration
    clock.advance(100);
    radio.run(&mut monitor, &clock);
    assert_eq!(radio.advertising, None);

    // The next automatic scan request carries the new set-point
    clock.set(10_000);
    radio.run(&mut monitor, &clock);
    assert_eq!(
        radio.advertising,
        Some(Frame::ScanRequest { celsius: 23 })
    );
}
