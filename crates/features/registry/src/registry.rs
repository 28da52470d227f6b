use crate::catalog::UnitCatalog;
use crate::enrolment::{Confirm, Confirmation, StudentEnrolment};
use crate::error::RegistryError;
use enrol_domain::config::RegistryConfig;
use enrol_domain::constants::MAX_UNITS_PER_STUDENT;
use enrol_domain::{Student, Unit, UnitCode};
use fxhash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Outcome of removing a unit from the catalogue.
#[derive(Debug, Clone)]
pub struct UnitRemoval {
    pub unit: Arc<Unit>,
    /// Students that were enrolled in the unit at removal time.
    pub enrolled: Vec<String>,
    /// Whether those enrolments were withdrawn as part of the removal.
    pub cascaded: bool,
}

/// In-memory owner of all students and units.
#[derive(Debug, Default)]
pub struct Registry {
    students: FxHashMap<String, Student>,
    catalog: UnitCatalog,
    cascade_unit_removal: bool,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self { cascade_unit_removal: config.cascade_unit_removal, ..Self::default() }
    }

    // --- Students ---

    pub fn add_student(&mut self, student: Student) -> Result<(), RegistryError> {
        if student.id().is_empty() {
            return Err(RegistryError::EmptyKey { field: "Student ID" });
        }
        if self.students.contains_key(student.id()) {
            return Err(RegistryError::DuplicateStudent { id: student.id().to_owned() });
        }

        info!(student_id = student.id(), kind = %student.kind(), "Student added");
        self.students.insert(student.id().to_owned(), student);
        Ok(())
    }

    pub fn remove_student(&mut self, id: &str) -> Result<Student, RegistryError> {
        let id = id.trim();
        let student = self
            .students
            .remove(id)
            .ok_or_else(|| RegistryError::StudentNotFound { id: id.to_owned() })?;

        info!(student_id = id, units = student.unit_count(), "Student removed");
        Ok(student)
    }

    #[must_use]
    pub fn student_exists(&self, id: &str) -> bool {
        self.students.contains_key(id.trim())
    }

    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id.trim())
    }

    pub fn student_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.get_mut(id.trim())
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> + Clone + '_ {
        self.students.values()
    }

    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    // --- Units ---

    pub fn add_unit(&mut self, unit: Unit) -> Result<Arc<Unit>, RegistryError> {
        let unit = self.catalog.insert(unit)?;
        info!(unit = %unit.code(), credit_points = unit.credit_points(), "Unit added");
        Ok(unit)
    }

    /// Removes a unit from the catalogue.
    ///
    /// With `cascade_unit_removal` off, students keep their (now dangling) enrolment and
    /// are only reported in [`UnitRemoval::enrolled`].
    pub fn remove_unit(&mut self, code: &str) -> Result<UnitRemoval, RegistryError> {
        let code = UnitCode::new(code);
        let unit =
            self.catalog.remove(&code).ok_or_else(|| RegistryError::UnitNotFound { code: code.clone() })?;

        let mut enrolled = Vec::new();
        for student in self.students.values_mut() {
            if !student.is_enrolled(&code) {
                continue;
            }
            enrolled.push(student.id().to_owned());
            if self.cascade_unit_removal {
                student.detach_unit(&code);
            }
        }
        enrolled.sort_unstable();

        if enrolled.is_empty() || self.cascade_unit_removal {
            info!(unit = %code, withdrawn = enrolled.len(), "Unit removed");
        } else {
            warn!(unit = %code, students = ?enrolled, "Unit removed with students still enrolled");
        }

        Ok(UnitRemoval { unit, enrolled, cascaded: self.cascade_unit_removal })
    }

    #[must_use]
    pub fn unit(&self, code: &str) -> Option<&Arc<Unit>> {
        self.catalog.get(&UnitCode::new(code))
    }

    #[must_use]
    pub const fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    pub fn units(&self) -> impl Iterator<Item = &Arc<Unit>> + Clone + '_ {
        self.catalog.iter()
    }

    #[must_use]
    pub fn is_unit_available(&self, unit: &Unit) -> bool {
        self.catalog.is_unit_available(unit)
    }

    // --- Enrolment ---

    /// Enrols a student in a unit once every precondition holds and `confirm` says yes.
    ///
    /// Preconditions are checked in order (student, unit, duplicate, capacity); the first
    /// failure is returned without prompting.
    #[instrument(skip(self, confirm))]
    pub fn enroll(
        &mut self,
        student_id: &str,
        code: &str,
        confirm: &mut (impl Confirm + ?Sized),
    ) -> Result<Confirmation, RegistryError> {
        let code = UnitCode::new(code);
        let Self { students, catalog, .. } = self;

        let student = students
            .get_mut(student_id.trim())
            .ok_or_else(|| RegistryError::StudentNotFound { id: student_id.trim().to_owned() })?;
        let unit = catalog
            .get(&code)
            .cloned()
            .ok_or_else(|| RegistryError::UnitNotFound { code: code.clone() })?;

        if student.is_enrolled(&code) {
            return Err(RegistryError::AlreadyEnrolled { code });
        }
        if !student.has_capacity() {
            return Err(RegistryError::CapacityReached { max: MAX_UNITS_PER_STUDENT });
        }

        if !confirm.confirm(&format!("Confirm enrolment in unit '{code}' (Y/N): ")) {
            debug!("Enrolment cancelled");
            return Ok(Confirmation::Cancelled);
        }

        student.enroll(&unit, catalog)?;
        info!(units = student.unit_count(), "Student enrolled");
        Ok(Confirmation::Applied)
    }

    /// Withdraws a student from a unit they hold, after confirmation.
    #[instrument(skip(self, confirm))]
    pub fn withdraw(
        &mut self,
        student_id: &str,
        code: &str,
        confirm: &mut (impl Confirm + ?Sized),
    ) -> Result<Confirmation, RegistryError> {
        let code = UnitCode::new(code);
        let student = self
            .students
            .get_mut(student_id.trim())
            .ok_or_else(|| RegistryError::StudentNotFound { id: student_id.trim().to_owned() })?;

        if !student.is_enrolled(&code) {
            return Err(RegistryError::NotEnrolled { code });
        }

        if !confirm.confirm(&format!("Confirm removal of unit '{code}' (Y/N): ")) {
            debug!("Withdrawal cancelled");
            return Ok(Confirmation::Cancelled);
        }

        student.withdraw(&code)?;
        info!(units = student.unit_count(), "Student withdrawn");
        Ok(Confirmation::Applied)
    }
}
