//! The cascading deriver: one wake-up time in, one full day out.
//!
//! # Stage order
//!
//! Derivation is a fixed sequence of stages.  Each stage computes a
//! candidate from the stages before it; when a later bound cannot be met,
//! the correction always narrows an *earlier* value (shorten a nap toward
//! its minimum, clamp a time toward its window) and never loosens one, so
//! there is no search and no unbounded revisiting:
//!
//! 1. Overlay the day-length target onto the bedtime window.
//! 2. Place nap 1 at the minimum wake window, longest allowed duration.
//! 3. Place nap 2 the same way.
//! 4. Decide whether a third nap is needed (policy-selected).
//! 5. Place the third nap; if its end must be clamped into the end window,
//!    reclaim the squeezed wake window from nap 2, then nap 1 (the single
//!    backward correction, bounded to those two hops).
//! 6. Derive bedtime and clamp it into the stage-1 window, shortening or
//!    lengthening the second nap before accepting a hard clamp.
//! 7. On the two-nap path, reconsider: if the final wake stretch ended up
//!    longer than its maximum, slot in a third nap after all — but only if
//!    one still fits.
//! 8. Last feeding is bedtime minus the feeding offset.
//!
//! Starting each nap at its *maximum* duration pushes the rest of the day
//! as late as possible; every subsequent correction then only ever needs to
//! pull times earlier, which is the direction the clamps already go.
//!
//! # Numeric model
//!
//! All stage arithmetic is `i32` minutes.  Intermediate candidates may fall
//! outside the day (a late wake time can push a raw nap past midnight);
//! conversion back to [`ClockTime`] saturates at 23:59 on the way out, per
//! the no-wrap rule.  Given an in-range wake time the function is total:
//! there is no failure path, and the same inputs always produce an
//! identical schedule.

use nap_core::ClockTime;

use crate::policy::{SchedulePolicy, ThirdNapPolicy};
use crate::schedule::{DaySchedule, NapKind, NapSlot};

/// Derive the full day schedule for `wake` under `policy`.
pub fn derive_schedule(wake: ClockTime, policy: &SchedulePolicy) -> DaySchedule {
    let p = policy;
    let wake_m = i32::from(wake.minutes());

    let bed_earliest = i32::from(p.bedtime.earliest.minutes());
    let bed_latest = i32::from(p.bedtime.latest.minutes());
    let ww2_min = p.wake_before_second_nap.min as i32;
    let ww3_min = p.wake_before_third_nap.min as i32;
    let bed_min = p.wake_before_bed.min as i32;
    let bed_max = p.wake_before_bed.max as i32;
    let nap3_len = p.third_nap_minutes as i32;
    let nap3_end_earliest = i32::from(p.third_nap_end.earliest.minutes());
    let nap3_end_latest = i32::from(p.third_nap_end.latest.minutes());

    // ── Stage 1: day-length overlay on the bedtime window ─────────────────
    // The overlay narrows the absolute window, never widens it.
    let target_earliest = (wake_m + p.day_length.min as i32).max(bed_earliest);
    let target_latest = (wake_m + p.day_length.max as i32).min(bed_latest);

    // ── Stages 2-3: optimistic nap placement ──────────────────────────────
    let nap1_start = wake_m + p.wake_before_first_nap.min as i32;
    let mut nap1_len = p.first_nap.max as i32;
    let mut nap2_len = p.second_nap.max as i32;
    let (mut nap1_end, mut nap2_start, mut nap2_end) =
        nap_chain(nap1_start, nap1_len, ww2_min, nap2_len);

    // ── Stage 4: third-nap decision ───────────────────────────────────────
    let needs_third = match p.third_nap_policy {
        ThirdNapPolicy::Threshold(cutoff) => nap2_end <= i32::from(cutoff.minutes()),
        ThirdNapPolicy::BedtimeGap => {
            nap2_end + bed_min < bed_earliest && bed_earliest - nap2_end > bed_max
        }
    };

    // ── Stage 5: third-nap placement ──────────────────────────────────────
    // `(start, end)` in raw minutes; `None` until/unless a third nap exists.
    let mut nap3: Option<(i32, i32)> = None;
    if needs_third {
        let mut start = nap2_end + ww3_min;
        let mut end = start + nap3_len;
        if end > nap3_end_latest {
            end = nap3_end_latest;
            start = end - nap3_len;
            // The clamp may have squeezed the wake window before the third
            // nap below its minimum.  Reclaim the missing minutes from
            // nap 2, then nap 1 — the only backward correction, and it is
            // bounded to those two hops.  A residual deficit is accepted
            // rather than shrinking any nap below its minimum.
            let deficit = nap2_end - (start - ww3_min);
            if deficit > 0 {
                reclaim(deficit, &mut nap1_len, &mut nap2_len, p);
                (nap1_end, nap2_start, nap2_end) =
                    nap_chain(nap1_start, nap1_len, ww2_min, nap2_len);
            }
        } else if end < nap3_end_earliest {
            // Too early for a late-afternoon nap: push it to the window's
            // start.  The pre-nap wake window only grows here.
            end = nap3_end_earliest;
            start = end - nap3_len;
        }
        nap3 = Some((start, end));
    }

    // ── Stage 6: bedtime ──────────────────────────────────────────────────
    let sleep_end = nap3.map_or(nap2_end, |(_, end)| end);
    let mut candidate = sleep_end + bed_min;

    if nap3.is_none() {
        if candidate > target_latest {
            // Soften before the hard clamp: shorten nap 2 toward its
            // minimum, then nap 1.  (With a third nap present there is
            // nothing to shorten — its duration is fixed and naps 1-2 were
            // already narrowed in stage 5 if the day ran long.)
            let reclaimed = reclaim(candidate - target_latest, &mut nap1_len, &mut nap2_len, p);
            (nap1_end, nap2_start, nap2_end) =
                nap_chain(nap1_start, nap1_len, ww2_min, nap2_len);
            candidate -= reclaimed;
        } else if candidate < target_earliest {
            // Symmetric softening: lengthen nap 2 toward its maximum before
            // clamping bedtime up.  With optimistic placement nap 2 still
            // holds its maximum on this path, so today this only guards
            // against placement ever starting below the maximum.
            let grow = (p.second_nap.max as i32 - nap2_len).clamp(0, target_earliest - candidate);
            nap2_len += grow;
            (nap1_end, nap2_start, nap2_end) =
                nap_chain(nap1_start, nap1_len, ww2_min, nap2_len);
            candidate += grow;
        }
    }

    // Hard clamp.  If the overlay collapsed (a wake time so far from the
    // bedtime window that the day-length target cannot hold), the absolute
    // window wins.
    let (lo, hi) = if target_earliest <= target_latest {
        (target_earliest, target_latest)
    } else {
        (bed_earliest, bed_latest)
    };
    let bedtime = candidate.max(lo).min(hi);

    // ── Stage 7: reconsideration (two-nap path only) ──────────────────────
    // A final wake stretch past its maximum is worse than an extra short
    // nap.  Re-decide with the gap heuristic regardless of the configured
    // policy, and insert a third nap iff one still fits between the second
    // nap and the now-fixed bedtime.
    if nap3.is_none() && bedtime - nap2_end > bed_max {
        let mut start = nap2_end + ww3_min;
        let mut end = start + nap3_len;
        if end > nap3_end_latest {
            end = nap3_end_latest;
            start = end - nap3_len;
        } else if end < nap3_end_earliest {
            end = nap3_end_earliest;
            start = end - nap3_len;
        }
        let fits = start - nap2_end >= ww3_min && bedtime - end >= bed_min;
        if fits {
            nap3 = Some((start, end));
        }
    }

    // ── Stage 8: last feeding ─────────────────────────────────────────────
    let last_feeding = bedtime - p.feeding_offset as i32;

    DaySchedule {
        wake,
        first_nap: slot(NapKind::First, nap1_start, nap1_end),
        second_nap: slot(NapKind::Second, nap2_start, nap2_end),
        third_nap: nap3.map(|(start, end)| slot(NapKind::Third, start, end)),
        last_feeding: ClockTime::saturating_from_minutes(last_feeding),
        bedtime: ClockTime::saturating_from_minutes(bedtime),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Recompute the nap-1/nap-2 time chain from the (possibly corrected)
/// durations.  Returns `(nap1_end, nap2_start, nap2_end)`.
#[inline]
fn nap_chain(nap1_start: i32, nap1_len: i32, ww2_min: i32, nap2_len: i32) -> (i32, i32, i32) {
    let nap1_end = nap1_start + nap1_len;
    let nap2_start = nap1_end + ww2_min;
    (nap1_end, nap2_start, nap2_start + nap2_len)
}

/// Shrink nap 2 and then nap 1 toward their minimum durations, reclaiming
/// up to `wanted` minutes of day.  Neither nap ever drops below its
/// minimum.  Returns the minutes actually reclaimed.
fn reclaim(wanted: i32, nap1_len: &mut i32, nap2_len: &mut i32, p: &SchedulePolicy) -> i32 {
    let mut remaining = wanted;
    for (len, floor) in [
        (nap2_len, p.second_nap.min as i32),
        (nap1_len, p.first_nap.min as i32),
    ] {
        if remaining <= 0 {
            break;
        }
        let give = (*len - floor).clamp(0, remaining);
        *len -= give;
        remaining -= give;
    }
    wanted - remaining
}

fn slot(kind: NapKind, start: i32, end: i32) -> NapSlot {
    NapSlot {
        kind,
        start: ClockTime::saturating_from_minutes(start),
        end: ClockTime::saturating_from_minutes(end),
    }
}
