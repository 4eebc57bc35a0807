//! Output model: `NapKind`, `NapSlot`, and the derived `DaySchedule`.
//!
//! A schedule is a plain value: created fresh by each derivation call,
//! immutable once returned, and owned outright by the caller.  The third
//! nap is a single tagged optional — presence of the slot *is* the
//! needs-a-third-nap flag, so the two can never disagree.

use nap_core::{ClockTime, format_duration};

// ── NapKind / NapSlot ─────────────────────────────────────────────────────────

/// Position of a nap within the day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NapKind {
    First,
    Second,
    Third,
}

/// One scheduled daytime sleep interval.
///
/// Invariant: `start <= end`.  The deriver guarantees the duration lies
/// inside the constraint table's bounds for the slot's kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NapSlot {
    pub kind: NapKind,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl NapSlot {
    /// Elapsed minutes from `start` to `end`.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes().saturating_sub(self.start.minutes()))
    }
}

// ── DaySchedule ───────────────────────────────────────────────────────────────

/// A complete derived day: wake-up, two or three naps, last feeding, and
/// bedtime, in clock order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySchedule {
    pub wake: ClockTime,
    pub first_nap: NapSlot,
    pub second_nap: NapSlot,
    /// Present iff the table's third-nap decision (or the reconsideration
    /// pass) called for one.
    pub third_nap: Option<NapSlot>,
    pub last_feeding: ClockTime,
    pub bedtime: ClockTime,
}

impl DaySchedule {
    /// `true` iff a third nap was scheduled.
    #[inline]
    pub fn needs_third_nap(&self) -> bool {
        self.third_nap.is_some()
    }

    /// Elapsed minutes from wake-up to bedtime.
    #[inline]
    pub fn day_length_minutes(&self) -> u32 {
        u32::from(self.bedtime.minutes().saturating_sub(self.wake.minutes()))
    }

    /// The day length as a display string, e.g. `"12 hours 30 minutes"`.
    ///
    /// Part of the public contract: callers render this wording verbatim.
    pub fn day_length_label(&self) -> String {
        format_duration(self.day_length_minutes())
    }

    /// The naps in day order (two or three of them).
    pub fn naps(&self) -> impl Iterator<Item = &NapSlot> {
        [
            Some(&self.first_nap),
            Some(&self.second_nap),
            self.third_nap.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}
