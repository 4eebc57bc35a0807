//! CSV batch front end.
//!
//! # CSV format
//!
//! One row per child.  The two trailing columns are optional per-row
//! overrides; leave them empty to use the policy's values.
//!
//! ```csv
//! name,wake_hour,wake_minute,feeding_offset,first_window
//! Ada,6,0,,
//! Ben,5,30,90,
//! Cleo,6,45,45,150
//! ```
//!
//! | Column           | Meaning                                             |
//! |------------------|-----------------------------------------------------|
//! | `name`           | Opaque label, echoed back with the schedule         |
//! | `wake_hour`      | Wake-up hour, 0-23                                  |
//! | `wake_minute`    | Wake-up minute, 0-59                                |
//! | `feeding_offset` | Optional: minutes between last feeding and bedtime  |
//! | `first_window`   | Optional: minimum wake window before the first nap  |
//!
//! Rows are derived in file order; one bad row fails the whole batch (a
//! partially derived batch is never returned).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nap_core::ClockTime;

use crate::PlanError;
use crate::deriver::derive_schedule;
use crate::policy::SchedulePolicy;
use crate::schedule::DaySchedule;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BatchRecord {
    name: String,
    wake_hour: u32,
    wake_minute: u32,
    feeding_offset: Option<u32>,
    first_window: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Derive one schedule per row of a CSV file.
///
/// Returns `(name, schedule)` pairs in file order.
pub fn load_batch_csv(
    path: &Path,
    policy: &SchedulePolicy,
) -> Result<Vec<(String, DaySchedule)>, PlanError> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_batch_reader(file, policy)
}

/// Like [`load_batch_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or piped input.
pub fn load_batch_reader<R: Read>(
    reader: R,
    policy: &SchedulePolicy,
) -> Result<Vec<(String, DaySchedule)>, PlanError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut out = Vec::new();

    for result in csv_reader.deserialize::<BatchRecord>() {
        let row = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        let wake = ClockTime::from_hm(row.wake_hour, row.wake_minute)?;

        let mut row_policy = policy.clone();
        if let Some(offset) = row.feeding_offset {
            row_policy = row_policy.with_feeding_offset(offset);
        }
        if let Some(window) = row.first_window {
            row_policy = row_policy.with_first_wake_window_min(window);
        }

        out.push((row.name, derive_schedule(wake, &row_policy)));
    }

    Ok(out)
}
