//! The constraint table: every named timing bound that parameterizes one
//! derivation call.
//!
//! # Design
//!
//! All bounds live in an explicit [`SchedulePolicy`] value passed into
//! [`derive_schedule`](crate::derive_schedule) — there are no module-level
//! constants and no `Default` impl.  Two real deployments exist with
//! different numbers ([`SchedulePolicy::classic`] and
//! [`SchedulePolicy::long_windows`]); the deriver must be correct for any
//! valid table, not just those two.
//!
//! All bounds are inclusive on both ends: a candidate landing exactly on a
//! bound is accepted, never corrected.

use nap_core::ClockTime;

// ── Range types ───────────────────────────────────────────────────────────────

/// Inclusive minute bounds for a variable-length interval (nap durations,
/// day-length target).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive bounds on awake time between the end of one sleep and the
/// start of the next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WakeWindow {
    pub min: u32,
    pub max: u32,
}

/// An absolute window on the clock (bedtime window, third-nap end window).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockWindow {
    pub earliest: ClockTime,
    pub latest: ClockTime,
}

// ── Third-nap decision ────────────────────────────────────────────────────────

/// How a table decides whether the day needs a third nap.
///
/// Exactly one policy is active per table; both observed deployments are
/// supported as configuration rather than code forks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThirdNapPolicy {
    /// Third nap iff the second nap ends at or before this clock cutoff.
    Threshold(ClockTime),
    /// Third nap iff even the earliest allowed bedtime would leave a wake
    /// gap after the second nap longer than `wake_before_bed.max`.
    BedtimeGap,
}

// ── SchedulePolicy ────────────────────────────────────────────────────────────

/// Caller-selectable feeding offsets, in minutes before bedtime.
pub const FEEDING_OFFSET_CHOICES: [u32; 5] = [30, 45, 60, 75, 90];

/// Caller-selectable minimums for the wake window before the first nap.
pub const FIRST_WAKE_WINDOW_CHOICES: [u32; 5] = [120, 135, 150, 165, 180];

/// The full constraint table for one derivation call.
///
/// Immutable for the duration of a call; cheap to clone when a per-row
/// override is needed (see the batch loader).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulePolicy {
    /// First-nap duration bounds.
    pub first_nap: DurationRange,
    /// Second-nap duration bounds.
    pub second_nap: DurationRange,
    /// Third-nap duration — fixed, never stretched or shortened.
    pub third_nap_minutes: u32,

    pub wake_before_first_nap: WakeWindow,
    pub wake_before_second_nap: WakeWindow,
    pub wake_before_third_nap: WakeWindow,
    pub wake_before_bed: WakeWindow,

    /// Absolute bounds on bedtime.
    pub bedtime: ClockWindow,
    /// Target elapsed time from wake-up to bedtime.  Overlays (narrows) the
    /// bedtime window per call; never widens it.
    pub day_length: DurationRange,
    /// The third nap, when present, should end inside this window.
    pub third_nap_end: ClockWindow,

    pub third_nap_policy: ThirdNapPolicy,

    /// Minutes between the last feeding and bedtime.
    pub feeding_offset: u32,
}

impl SchedulePolicy {
    /// The original deployment's numbers: 40-60 / 90-120 minute naps, 2-2.5 h
    /// wake windows, bedtime-gap third-nap decision.
    pub fn classic() -> Self {
        Self {
            first_nap: DurationRange { min: 40, max: 60 },
            second_nap: DurationRange { min: 90, max: 120 },
            third_nap_minutes: 30,
            wake_before_first_nap: WakeWindow { min: 120, max: 150 },
            wake_before_second_nap: WakeWindow { min: 120, max: 150 },
            wake_before_third_nap: WakeWindow { min: 120, max: 150 },
            wake_before_bed: WakeWindow { min: 180, max: 240 },
            bedtime: ClockWindow {
                earliest: ClockTime::hm(18, 0),
                latest: ClockTime::hm(20, 0),
            },
            day_length: DurationRange { min: 690, max: 810 },
            third_nap_end: ClockWindow {
                earliest: ClockTime::hm(15, 0),
                latest: ClockTime::hm(16, 0),
            },
            third_nap_policy: ThirdNapPolicy::BedtimeGap,
            feeding_offset: 60,
        }
    }

    /// The later-age deployment: 45-75 minute first nap, 2.5-3 h wake
    /// windows, clock-threshold third-nap decision at 14:30.
    pub fn long_windows() -> Self {
        Self {
            first_nap: DurationRange { min: 45, max: 75 },
            second_nap: DurationRange { min: 90, max: 120 },
            third_nap_minutes: 30,
            wake_before_first_nap: WakeWindow { min: 150, max: 180 },
            wake_before_second_nap: WakeWindow { min: 150, max: 180 },
            wake_before_third_nap: WakeWindow { min: 150, max: 180 },
            wake_before_bed: WakeWindow { min: 180, max: 240 },
            bedtime: ClockWindow {
                earliest: ClockTime::hm(18, 0),
                latest: ClockTime::hm(20, 0),
            },
            day_length: DurationRange { min: 690, max: 810 },
            third_nap_end: ClockWindow {
                earliest: ClockTime::hm(15, 0),
                latest: ClockTime::hm(16, 0),
            },
            third_nap_policy: ThirdNapPolicy::Threshold(ClockTime::hm(14, 30)),
            feeding_offset: 60,
        }
    }

    // ── Caller-facing overrides ───────────────────────────────────────────

    /// Replace the feeding offset.  UI layers restrict the value to
    /// [`FEEDING_OFFSET_CHOICES`]; the table accepts any minute count.
    pub fn with_feeding_offset(mut self, minutes: u32) -> Self {
        self.feeding_offset = minutes;
        self
    }

    /// Replace the minimum wake window before the first nap.  UI layers
    /// restrict the value to [`FIRST_WAKE_WINDOW_CHOICES`].
    pub fn with_first_wake_window_min(mut self, minutes: u32) -> Self {
        self.wake_before_first_nap.min = minutes;
        self.wake_before_first_nap.max = self.wake_before_first_nap.max.max(minutes);
        self
    }
}
