use crate::enrolment::{Confirm, Confirmation};
use crate::error::RegistryError;
use crate::registry::{Registry, UnitRemoval};
use enrol_domain::{Student, Unit};
use std::sync::Arc;
use tracing::instrument;

/// A named operator with privileged access to the registry.
///
/// Holds no state beyond its display name; every call forwards to [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    name: String,
}

impl Administrator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip_all, fields(admin = %self.name, student_id = student.id()))]
    pub fn add_student(&self, registry: &mut Registry, student: Student) -> Result<(), RegistryError> {
        registry.add_student(student)
    }

    #[instrument(skip(self, registry), fields(admin = %self.name))]
    pub fn remove_student(
        &self,
        registry: &mut Registry,
        student_id: &str,
    ) -> Result<Student, RegistryError> {
        registry.remove_student(student_id)
    }

    #[instrument(skip_all, fields(admin = %self.name, unit = %unit.code()))]
    pub fn add_unit(&self, registry: &mut Registry, unit: Unit) -> Result<Arc<Unit>, RegistryError> {
        registry.add_unit(unit)
    }

    #[instrument(skip(self, registry), fields(admin = %self.name))]
    pub fn remove_unit(&self, registry: &mut Registry, code: &str) -> Result<UnitRemoval, RegistryError> {
        registry.remove_unit(code)
    }

    #[instrument(skip(self, registry, confirm), fields(admin = %self.name))]
    pub fn add_unit_to_student(
        &self,
        registry: &mut Registry,
        student_id: &str,
        code: &str,
        confirm: &mut (impl Confirm + ?Sized),
    ) -> Result<Confirmation, RegistryError> {
        ensure_student(registry, student_id)?;
        registry.enroll(student_id, code, confirm)
    }

    #[instrument(skip(self, registry, confirm), fields(admin = %self.name))]
    pub fn remove_unit_from_student(
        &self,
        registry: &mut Registry,
        student_id: &str,
        code: &str,
        confirm: &mut (impl Confirm + ?Sized),
    ) -> Result<Confirmation, RegistryError> {
        ensure_student(registry, student_id)?;
        registry.withdraw(student_id, code, confirm)
    }
}

fn ensure_student(registry: &Registry, student_id: &str) -> Result<(), RegistryError> {
    if registry.student_exists(student_id) {
        Ok(())
    } else {
        Err(RegistryError::StudentNotFound { id: student_id.trim().to_owned() })
    }
}
