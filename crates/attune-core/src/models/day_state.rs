use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse time-of-day buckets used by timing affinity and retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket a local hour (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    /// Lowercase label as it appears in memory content ("morning" etc.).
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// A user's do-not-disturb window in local hours, `[start, end)`.
/// Wraps midnight when `start > end` (the default 22→6 does).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    pub start: u32,
    pub end: u32,
}

impl QuietHours {
    /// Whether `hour` falls inside the window, handling wraparound.
    pub fn contains(self, hour: u32) -> bool {
        if self.start > self.end {
            hour >= self.start || hour < self.end
        } else {
            hour >= self.start && hour < self.end
        }
    }
}

impl Default for QuietHours {
    fn default() -> Self {
        Self { start: 22, end: 6 }
    }
}

/// Per-day user state supplied by external scheduling/wearable/calendar
/// components. Every field is optional upstream; `Default` carries the
/// documented fallbacks (healthy recovery, UTC midnight counters at zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDayState {
    /// Nudges already delivered today.
    pub nudges_delivered_today: u32,
    /// Nudges the user dismissed today.
    pub dismissals_today: u32,
    /// When the last nudge went out, if any did.
    pub last_delivery_at: Option<DateTime<Utc>>,
    /// Hours of meetings on today's calendar.
    pub meeting_hours_today: f64,
    /// User's current local hour (0-23).
    pub local_hour: u32,
    /// Minutes east of UTC for the user's timezone (negative west of it).
    /// Derives the local calendar date; zero when no timezone arrived.
    pub utc_offset_minutes: i32,
    /// Do-not-disturb window.
    pub quiet_hours: QuietHours,
    /// Wearable recovery score 0-100. Missing data reads as healthy.
    pub recovery_score: u32,
    /// Consecutive days of protocol completion.
    pub current_streak: u32,
    /// Whether Minimum Viable Day mode is active.
    pub mvd_active: bool,
}

impl Default for UserDayState {
    fn default() -> Self {
        Self {
            nudges_delivered_today: 0,
            dismissals_today: 0,
            last_delivery_at: None,
            meeting_hours_today: 0.0,
            local_hour: 12,
            utc_offset_minutes: 0,
            quiet_hours: QuietHours::default(),
            recovery_score: 100,
            current_streak: 0,
            mvd_active: false,
        }
    }
}
