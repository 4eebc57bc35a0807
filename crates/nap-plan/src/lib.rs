//! `nap-plan` — derives a full infant day schedule from one wake-up time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`policy`]   | `SchedulePolicy` (the constraint table), range types       |
//! | [`schedule`] | `NapKind`, `NapSlot`, `DaySchedule`                        |
//! | [`deriver`]  | `derive_schedule` — the cascading derivation               |
//! | [`loader`]   | `load_batch_csv`, `load_batch_reader`                      |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                               |
//!
//! # Derivation model (summary)
//!
//! One wake time plus one [`SchedulePolicy`] produce one [`DaySchedule`]:
//!
//! ```text
//! nap1.start = wake + window.min          (longest allowed duration first)
//! nap2.start = nap1.end + window.min
//! third nap  = policy decision (clock threshold or bedtime-gap heuristic)
//! bedtime    = last sleep end + window.min, clamped into the bedtime window
//! feeding    = bedtime - feeding offset
//! ```
//!
//! Later stages may narrow earlier ones (shorten a nap toward its minimum)
//! but never the reverse, so derivation always terminates in a fixed number
//! of steps and is a pure function of its two inputs.

pub mod deriver;
pub mod error;
pub mod loader;
pub mod policy;
pub mod schedule;


pub use deriver::derive_schedule;
pub use error::{PlanError, PlanResult};
pub use loader::{load_batch_csv, load_batch_reader};
pub use policy::{
    ClockWindow, DurationRange, FEEDING_OFFSET_CHOICES, FIRST_WAKE_WINDOW_CHOICES, SchedulePolicy,
    ThirdNapPolicy, WakeWindow,
};
pub use schedule::{DaySchedule, NapKind, NapSlot};
