use crate::catalog::UnitCatalog;
use crate::error::RegistryError;
use enrol_domain::constants::MAX_UNITS_PER_STUDENT;
use enrol_domain::{EnrolmentRejection, Student, Unit, UnitCode};
use std::sync::Arc;

/// Source of yes/no answers for confirmation-gated mutations.
pub trait Confirm {
    /// Shows `prompt` and returns `true` only on an explicit yes.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Only a literal `Y` (any case, surrounding whitespace ignored) counts as yes.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Result of a confirmation-gated operation whose preconditions all held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Applied,
    Cancelled,
}

/// Enrolment operations a student performs against the catalogue.
pub trait StudentEnrolment {
    /// Enrols in `unit` after re-checking that the catalogue still offers it.
    fn enroll(&mut self, unit: &Arc<Unit>, catalog: &UnitCatalog) -> Result<(), RegistryError>;

    /// Withdraws from the unit with `code`, returning it.
    fn withdraw(&mut self, code: &UnitCode) -> Result<Arc<Unit>, RegistryError>;
}

impl StudentEnrolment for Student {
    fn enroll(&mut self, unit: &Arc<Unit>, catalog: &UnitCatalog) -> Result<(), RegistryError> {
        if !catalog.is_unit_available(unit) {
            return Err(RegistryError::UnitUnavailable { code: unit.code().clone() });
        }

        self.attach_unit(Arc::clone(unit)).map_err(|rejection| match rejection {
            EnrolmentRejection::AlreadyEnrolled => {
                RegistryError::AlreadyEnrolled { code: unit.code().clone() }
            },
            EnrolmentRejection::AtCapacity => {
                RegistryError::CapacityReached { max: MAX_UNITS_PER_STUDENT }
            },
        })
    }

    fn withdraw(&mut self, code: &UnitCode) -> Result<Arc<Unit>, RegistryError> {
        self.detach_unit(code).ok_or_else(|| RegistryError::NotEnrolled { code: code.clone() })
    }
}
