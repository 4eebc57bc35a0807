//! Wall-clock time model.
//!
//! # Design
//!
//! A point in the day is represented as an integer count of minutes since
//! midnight, wrapped in `ClockTime`:
//!
//!   minutes = hour * 60 + minute          (0..=1439)
//!
//! Using an integer minute as the canonical unit means all schedule
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//! There is no day-wrap arithmetic: a computation that would cross midnight
//! must clamp, never wrap, which is why [`ClockTime::saturating_from_minutes`]
//! exists alongside the checked constructors.
//!
//! The scheduler itself works in plain `i32` minute offsets (intermediate
//! values may legitimately fall outside the day while corrections are still
//! pending) and converts back to `ClockTime` at its output boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::{ClockError, ClockResult};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A time of day, stored as minutes since midnight.
///
/// The inner value is guaranteed to lie in `0..=1439` by every constructor,
/// so accessors and `Display` never fail.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// 23:59 — the last representable minute of the day.
    pub const LAST_MINUTE: ClockTime = ClockTime(MINUTES_PER_DAY - 1);

    /// Const constructor for trusted in-range literals (presets, tests).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `hour > 23` or `minute > 59`.  Untrusted
    /// input goes through [`ClockTime::from_hm`] instead.
    #[inline]
    pub const fn hm(hour: u16, minute: u16) -> ClockTime {
        debug_assert!(hour < 24 && minute < 60);
        ClockTime(hour * 60 + minute)
    }

    /// Parse an hour/minute pair from untrusted input.
    pub fn from_hm(hour: u32, minute: u32) -> ClockResult<ClockTime> {
        if hour > 23 || minute > 59 {
            return Err(ClockError::InvalidTime(format!(
                "{hour:02}:{minute:02} (hour must be 0-23, minute 0-59)"
            )));
        }
        Ok(ClockTime((hour * 60 + minute) as u16))
    }

    /// Convert a signed minute offset back to a time of day.
    pub fn from_minutes(total: i32) -> ClockResult<ClockTime> {
        if !(0..i32::from(MINUTES_PER_DAY)).contains(&total) {
            return Err(ClockError::InvalidTime(format!(
                "{total} minutes from midnight is outside 0..={}",
                MINUTES_PER_DAY - 1
            )));
        }
        Ok(ClockTime(total as u16))
    }

    /// Like [`ClockTime::from_minutes`] but clamps out-of-range offsets to
    /// the nearest end of the day instead of failing.
    ///
    /// This is the no-wrap rule: an offset past midnight saturates at 23:59.
    #[inline]
    pub fn saturating_from_minutes(total: i32) -> ClockTime {
        ClockTime(total.clamp(0, i32::from(MINUTES_PER_DAY) - 1) as u16)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    #[inline]
    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Parses `"HH:MM"` (24-hour).  Leading zeros optional.
    fn from_str(s: &str) -> ClockResult<ClockTime> {
        let invalid = || ClockError::InvalidTime(format!("{s:?} (expected HH:MM)"));
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = h.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = m.trim().parse().map_err(|_| invalid())?;
        ClockTime::from_hm(hour, minute)
    }
}

// ── Duration formatting ───────────────────────────────────────────────────────

/// Render a minute count as a human-readable duration.
///
/// Zero components are omitted and both units pluralize correctly:
/// `"2 hours 30 minutes"`, `"1 hour"`, `"45 minutes"`.  Zero itself renders
/// as `"0 minutes"`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours} hour{}", if hours == 1 { "" } else { "s" }));
    }
    if mins > 0 || hours == 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{mins} minute{}", if mins == 1 { "" } else { "s" }));
    }
    out
}
