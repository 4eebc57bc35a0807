//! `nap-core` — foundational types for the `nap-plan` scheduler.
//!
//! This crate is a dependency of every other crate in the workspace.  It
//! intentionally has no workspace dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`time`]  | `ClockTime`, minute arithmetic, `format_duration`     |
//! | [`error`] | `ClockError`, `ClockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ClockError, ClockResult};
pub use time::{ClockTime, MINUTES_PER_DAY, format_duration};
