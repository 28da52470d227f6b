//! # Domain Models
//!
//! Pure domain types for the enrolment system with minimal dependencies (`serde`, `fxhash`).
//! Keep it lean: no I/O or console handling, just data and the invariants that belong to it.
//!
//! The only rule enforced here is the per-student enrolment cap
//! ([`constants::MAX_UNITS_PER_STUDENT`]); catalogue-level checks live in the registry.

pub mod config;
pub mod constants;
pub mod student;
pub mod unit;

pub use student::{ContactDetails, EnrolmentRejection, Student, StudentKind};
pub use unit::{Unit, UnitCode};
