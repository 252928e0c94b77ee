// SPDX-License-Identifier: Apache-2.0

//! Order-status simulation: a linear stage progression driven by a
//! timer. Cosmetic by design — it is not wired to any real fulfillment
//! system and must stay that way.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Final stage number; stage 0 is the explicit "no active order" state.
pub const STAGE_COUNT: u8 = 5;

/// Stages 0..=[`STAGE_COUNT`]. Stage 0 is only left by an external
/// "order placed" signal ([`start`](Self::start)); the timer advances
/// 1..[`STAGE_COUNT`] and halts at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StageTracker {
    stage: u8,
    started_at: Option<NaiveDateTime>,
}

impl StageTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The "order placed" signal: idle -> stage 1. Restarting an active
    /// tracker rewinds it to stage 1 as well.
    pub fn start(&mut self, at: NaiveDateTime) {
        self.stage = 1;
        self.started_at = Some(at);
    }

    /// One timer tick. Advances only while a run is active and not yet
    /// complete; idle and completed trackers ignore ticks.
    pub fn advance(&mut self) {
        if self.stage > 0 && self.stage < STAGE_COUNT {
            self.stage += 1;
        }
    }

    /// Back to "no active order", unconditionally.
    pub fn reset(&mut self) {
        self.stage = 0;
        self.started_at = None;
    }

    #[must_use]
    pub fn stage(&self) -> u8 {
        self.stage
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.stage == 0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stage == STAGE_COUNT
    }

    /// Visual-only progress of the connecting line, given how far the
    /// current tick interval has elapsed (0..=1).
    #[must_use]
    pub fn line_progress(&self, tick_fraction: f32) -> f32 {
        if self.stage == 0 {
            return 0.0;
        }
        if self.is_complete() {
            return 1.0;
        }
        let within = tick_fraction.clamp(0.0, 1.0);
        (f32::from(self.stage - 1) + within) / f32::from(STAGE_COUNT)
    }

    /// UI-facing view. `is_complete` is derived, never stored.
    #[must_use]
    pub fn status(&self, tick_fraction: f32) -> OrderStatus {
        OrderStatus {
            current_stage: self.stage,
            line_progress: self.line_progress(tick_fraction),
            started_at: self.started_at,
            is_complete: self.is_complete(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderStatus {
    pub current_stage: u8,
    pub line_progress: f32,
    pub started_at: Option<NaiveDateTime>,
    pub is_complete: bool,
}

/// Cancellation handle for a running ticker. Cancelling (or dropping)
/// stops further ticks; tie its lifetime to the owning view.
#[derive(Debug)]
pub struct TickerHandle {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn cancel(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

/// Drive `tracker` forward every `interval` until the handle is
/// cancelled. The tick itself is a no-op while the tracker is idle or
/// complete.
#[must_use]
pub fn spawn_ticker(tracker: Arc<Mutex<StageTracker>>, interval: Duration) -> TickerHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let join = std::thread::spawn(move || {
        // Sleep in short slices so cancellation never waits out a full
        // 10-second interval.
        let slice = Duration::from_millis(20).min(interval);
        let mut elapsed = Duration::ZERO;
        while !stop_flag.load(Ordering::Relaxed) {
            std::thread::sleep(slice);
            elapsed += slice;
            if elapsed >= interval {
                elapsed = Duration::ZERO;
                let mut tracker = tracker
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                tracker.advance();
            }
        }
    });

    TickerHandle {
        stop,
        join: Some(join),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 5)
            .expect("date")
            .and_hms_opt(12, 0, 0)
            .expect("time")
    }

    #[test]
    fn stages_advance_linearly_and_halt() {
        let mut tracker = StageTracker::new();
        assert!(tracker.is_idle());

        // Idle trackers ignore ticks.
        tracker.advance();
        assert_eq!(tracker.stage(), 0);

        tracker.start(noon());
        assert_eq!(tracker.stage(), 1);
        for expected in 2..=STAGE_COUNT {
            tracker.advance();
            assert_eq!(tracker.stage(), expected);
        }
        assert!(tracker.is_complete());

        // Completed trackers ignore further ticks.
        tracker.advance();
        assert_eq!(tracker.stage(), STAGE_COUNT);
    }

    #[test]
    fn reset_is_unconditional() {
        let mut tracker = StageTracker::new();
        tracker.start(noon());
        tracker.advance();
        tracker.reset();
        assert!(tracker.is_idle());
        assert_eq!(tracker.status(0.0).started_at, None);

        tracker.reset();
        assert!(tracker.is_idle());
    }

    #[test]
    fn completion_is_derived_from_stage() {
        let mut tracker = StageTracker::new();
        tracker.start(noon());
        let status = tracker.status(0.5);
        assert!(!status.is_complete);
        assert_eq!(status.current_stage, 1);

        for _ in 1..STAGE_COUNT {
            tracker.advance();
        }
        let status = tracker.status(0.0);
        assert!(status.is_complete);
        assert_eq!(status.current_stage, STAGE_COUNT);
        assert_eq!(status.line_progress, 1.0);
    }

    #[test]
    fn line_progress_stays_in_unit_range() {
        let mut tracker = StageTracker::new();
        assert_eq!(tracker.line_progress(0.7), 0.0);

        tracker.start(noon());
        assert!(tracker.line_progress(-3.0) >= 0.0);
        assert!(tracker.line_progress(99.0) <= 1.0);
    }

    #[test]
    fn ticker_advances_and_cancels() {
        let tracker = Arc::new(Mutex::new(StageTracker::new()));
        tracker
            .lock()
            .expect("tracker lock")
            .start(noon());

        let handle = spawn_ticker(Arc::clone(&tracker), Duration::from_millis(40));
        std::thread::sleep(Duration::from_millis(140));
        handle.cancel();

        let stage_after_cancel = tracker.lock().expect("tracker lock").stage();
        assert!(stage_after_cancel > 1, "ticker never advanced");

        // No further ticks after cancellation.
        std::thread::sleep(Duration::from_millis(120));
        assert_eq!(tracker.lock().expect("tracker lock").stage(), stage_after_cancel);
    }
}
