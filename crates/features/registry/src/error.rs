use enrol_domain::UnitCode;

/// Registry error type. The `Display` text is the message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Error: Student ID '{id}' already exists. Cannot add new student with this ID.")]
    DuplicateStudent { id: String },

    #[error("Student not found.")]
    StudentNotFound { id: String },

    #[error("Error: Unit '{code}' already exists. Cannot add new unit with this code.")]
    DuplicateUnit { code: UnitCode },

    #[error("Unit '{code}' not found.")]
    UnitNotFound { code: UnitCode },

    #[error("Unit '{code}' is not available.")]
    UnitUnavailable { code: UnitCode },

    #[error("Student is already enrolled in the unit '{code}'.")]
    AlreadyEnrolled { code: UnitCode },

    #[error("Student is already enrolled in the maximum number of units ({max} units).")]
    CapacityReached { max: usize },

    #[error("Student is not currently enrolled in the unit '{code}'.")]
    NotEnrolled { code: UnitCode },

    #[error("{field} cannot be empty.")]
    EmptyKey { field: &'static str },
}
