use crate::constants::MAX_UNITS_PER_STUDENT;
use crate::unit::{Unit, UnitCode};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Enrolment mode of a student. Only part-time students carry a course advisor.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudentKind {
    #[default]
    #[strum(to_string = "Full-time")]
    FullTime,
    #[strum(to_string = "Part-time")]
    PartTime {
        #[serde(default)]
        advisor: Option<String>,
    },
}

/// Contact fields collected when a student is registered.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Why a unit could not be attached to a student's enrolment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrolmentRejection {
    AlreadyEnrolled,
    AtCapacity,
}

/// A registered student and the units they are enrolled in.
///
/// Units are shared with the catalogue through [`Arc`]; the student never owns a unit.
#[derive(Debug, Clone)]
pub struct Student {
    id: String,
    name: String,
    contact: ContactDetails,
    kind: StudentKind,
    units: FxHashMap<UnitCode, Arc<Unit>>,
}

impl Student {
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        contact: ContactDetails,
        kind: StudentKind,
    ) -> Self {
        Self {
            id: id.as_ref().trim().to_owned(),
            name: name.into(),
            contact,
            kind,
            units: FxHashMap::default(),
        }
    }

    pub fn full_time(id: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContactDetails::default(), StudentKind::FullTime)
    }

    pub fn part_time(id: impl AsRef<str>, name: impl Into<String>, advisor: Option<String>) -> Self {
        Self::new(id, name, ContactDetails::default(), StudentKind::PartTime { advisor })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    #[must_use]
    pub const fn kind(&self) -> &StudentKind {
        &self.kind
    }

    #[must_use]
    pub fn advisor(&self) -> Option<&str> {
        match &self.kind {
            StudentKind::PartTime { advisor } => advisor.as_deref(),
            StudentKind::FullTime => None,
        }
    }

    /// Assigns a course advisor. Returns `false` for full-time students, who have none.
    pub fn set_advisor(&mut self, name: impl Into<String>) -> bool {
        match &mut self.kind {
            StudentKind::PartTime { advisor } => {
                *advisor = Some(name.into());
                true
            },
            StudentKind::FullTime => false,
        }
    }

    /// Enrolled units in unspecified order. The iterator is lazy and can be cloned to restart.
    pub fn units(&self) -> impl Iterator<Item = &Arc<Unit>> + Clone + '_ {
        self.units.values()
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_enrolled(&self, code: &UnitCode) -> bool {
        self.units.contains_key(code)
    }

    #[must_use]
    pub fn has_capacity(&self) -> bool {
        self.units.len() < MAX_UNITS_PER_STUDENT
    }

    /// Adds `unit` to the enrolment set, enforcing the duplicate and capacity rules.
    pub fn attach_unit(&mut self, unit: Arc<Unit>) -> Result<(), EnrolmentRejection> {
        if self.is_enrolled(unit.code()) {
            return Err(EnrolmentRejection::AlreadyEnrolled);
        }
        if !self.has_capacity() {
            return Err(EnrolmentRejection::AtCapacity);
        }
        self.units.insert(unit.code().clone(), unit);
        Ok(())
    }

    /// Removes the unit with the given code, returning it if the student was enrolled.
    pub fn detach_unit(&mut self, code: &UnitCode) -> Option<Arc<Unit>> {
        self.units.remove(code)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}
