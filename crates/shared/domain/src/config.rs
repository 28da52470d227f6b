use crate::student::{ContactDetails, Student, StudentKind};
use crate::unit::Unit;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for the console shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Display name of the administrator acting through the admin menu.
    pub administrator: String,
    pub registry: RegistryConfig,
    pub seed: SeedConfig,
    pub log: LogConfig,
}

/// Registry behaviour switches.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// When set, removing a unit also withdraws it from every enrolled student.
    /// Otherwise those enrolments are left in place and reported.
    pub cascade_unit_removal: bool,
}

/// Records loaded into the registry at start-up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub students: Vec<StudentSeed>,
    pub units: Vec<UnitSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact: ContactDetails,
    #[serde(default)]
    pub kind: StudentKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitSeed {
    pub code: String,
    pub title: String,
    pub credit_points: u32,
}

/// Logging output settings. Console output always goes to stderr.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Directory for rolling log files; `None` disables file logging.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

// --- Conversions ---

impl From<&StudentSeed> for Student {
    fn from(seed: &StudentSeed) -> Self {
        Self::new(&seed.id, seed.name.clone(), seed.contact.clone(), seed.kind.clone())
    }
}

impl From<&UnitSeed> for Unit {
    fn from(seed: &UnitSeed) -> Self {
        Self::new(seed.code.as_str(), seed.title.clone(), seed.credit_points)
    }
}

// --- Default ---

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            administrator: "John".to_owned(),
            registry: RegistryConfig::default(),
            seed: SeedConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            students: vec![StudentSeed {
                id: "123123".to_owned(),
                name: "John Lee".to_owned(),
                contact: ContactDetails {
                    address: "123 Fake Street".to_owned(),
                    phone: "1111111111".to_owned(),
                    email: "JohnLee@fakestreet.com".to_owned(),
                },
                kind: StudentKind::FullTime,
            }],
            units: vec![UnitSeed {
                code: "FIT5136".to_owned(),
                title: "Software Engineering".to_owned(),
                credit_points: 6,
            }],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}
