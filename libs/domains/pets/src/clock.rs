//! Wall clock used for `created_at` / `updated_at` stamps.
//!
//! Timestamps are rendered as `YYYY-MM-DD HH:MM:SS` in Asia/Kolkata
//! (UTC+05:30, no DST).

use chrono::{DateTime, Duration, FixedOffset, Utc};
use std::sync::Mutex;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The fixed Asia/Kolkata offset
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("UTC+05:30 is a valid offset")
}

pub fn format_timestamp(at: DateTime<FixedOffset>) -> String {
    at.with_timezone(&ist()).format(TIMESTAMP_FORMAT).to_string()
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current time as a stored timestamp string
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&ist())
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
