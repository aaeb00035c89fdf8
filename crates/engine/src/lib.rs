//! # Rollcall Engine
//!
//! The stateful services between the stores and the HTTP surface:
//!
//! - [`roster::RosterService`] owns the student collection's mutation paths
//!   and fans every change out on a watch channel.
//! - [`lifecycle::LifecycleEngine`] keeps each class's status consistent
//!   with the wall clock and triggers the roster-wide reset exactly when a
//!   new class becomes active.

/// Time-driven class status evaluation and the reset cascade
pub mod lifecycle;
/// Roster mutations, attendance marking, and change fan-out
pub mod roster;
