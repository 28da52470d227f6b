/// Maximum number of units a single student may be enrolled in.
pub const MAX_UNITS_PER_STUDENT: usize = 4;

/// Sentinel line printed when a student has no enrolled units.
pub const NO_UNITS_ENROLLED: &str = "No units enrolled.";
