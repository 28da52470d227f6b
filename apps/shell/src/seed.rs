use enrol_domain::config::SeedConfig;
use enrol_domain::{Student, Unit};
use enrol_registry::Registry;
use tracing::{info, warn};

/// How many seed records were loaded and how many were rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub students: usize,
    pub units: usize,
    pub skipped: usize,
}

/// Loads the configured demo records into `registry`. Rejected records are logged and skipped.
pub fn apply_seed(registry: &mut Registry, seed: &SeedConfig) -> SeedReport {
    let mut report = SeedReport::default();
    if !seed.enabled {
        return report;
    }

    for unit in &seed.units {
        match registry.add_unit(Unit::from(unit)) {
            Ok(_) => report.units += 1,
            Err(e) => {
                warn!(code = %unit.code, error = %e, "Skipping seed unit");
                report.skipped += 1;
            },
        }
    }
    for student in &seed.students {
        match registry.add_student(Student::from(student)) {
            Ok(()) => report.students += 1,
            Err(e) => {
                warn!(student_id = %student.id, error = %e, "Skipping seed student");
                report.skipped += 1;
            },
        }
    }

    info!(students = report.students, units = report.units, "Seed data loaded");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrol_domain::config::UnitSeed;

    #[test]
    fn default_seed_loads_demo_records() {
        let mut registry = Registry::new();
        let report = apply_seed(&mut registry, &SeedConfig::default());

        assert_eq!(report, SeedReport { students: 1, units: 1, skipped: 0 });
        assert!(registry.student_exists("123123"));
        assert!(registry.unit("FIT5136").is_some());
    }

    #[test]
    fn duplicate_seed_records_are_skipped() {
        let mut seed = SeedConfig::default();
        seed.units.push(UnitSeed {
            code: "fit5136".to_owned(),
            title: "Duplicate".to_owned(),
            credit_points: 6,
        });

        let mut registry = Registry::new();
        let report = apply_seed(&mut registry, &seed);
        assert_eq!(report.units, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn disabled_seed_is_a_no_op() {
        let seed = SeedConfig { enabled: false, ..SeedConfig::default() };
        let mut registry = Registry::new();
        assert_eq!(apply_seed(&mut registry, &seed), SeedReport::default());
        assert_eq!(registry.student_count(), 0);
    }
}
