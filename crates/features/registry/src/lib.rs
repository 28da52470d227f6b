//! # Enrolment Registry
//!
//! Owns every student and unit of a session and applies the enrolment rules:
//!
//! * student ids and unit codes are unique; duplicates are rejected, never overwritten;
//! * a student holds at most [`MAX_UNITS_PER_STUDENT`] units and never the same unit twice;
//! * enrol and withdraw only mutate after an explicit confirmation ([`Confirm`]).
//!
//! The [`Administrator`] is a thin, named actor over the same operations. Nothing here
//! performs console I/O; callers render the returned outcomes and errors.
//!
//! ```rust
//! use enrol_registry::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry.add_unit(Unit::new("FIT5136", "Software Engineering", 6)).unwrap();
//! registry.add_student(Student::full_time("123123", "John Lee")).unwrap();
//!
//! let outcome = registry.enroll("123123", "fit5136", &mut |_: &str| true).unwrap();
//! assert_eq!(outcome, Confirmation::Applied);
//! ```

mod admin;
mod catalog;
mod enrolment;
mod error;
mod registry;

pub use crate::admin::Administrator;
pub use crate::catalog::UnitCatalog;
pub use crate::enrolment::{Confirm, Confirmation, StudentEnrolment, is_affirmative};
pub use crate::error::RegistryError;
pub use crate::registry::{Registry, UnitRemoval};
pub use enrol_domain::constants::MAX_UNITS_PER_STUDENT;

pub mod prelude {
    pub use crate::{
        Administrator, Confirm, Confirmation, Registry, RegistryError, StudentEnrolment,
        UnitCatalog, UnitRemoval,
    };
    pub use enrol_domain::{ContactDetails, Student, StudentKind, Unit, UnitCode};
}
