use crate::console::Console;
use crate::menu::{MainChoice, Menu};
use enrol_domain::constants::NO_UNITS_ENROLLED;
use enrol_domain::{Student, Unit};
use enrol_registry::{Administrator, Registry};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// What the enclosing menu loop should do after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redisplay the current menu.
    Stay,
    /// Return to the parent menu.
    Back,
    /// Leave the program.
    Exit,
}

/// Who is currently driving the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Actor {
    #[default]
    Guest,
    Student {
        id: String,
    },
    Administrator {
        name: String,
    },
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("guest"),
            Self::Student { id } => write!(f, "student {id}"),
            Self::Administrator { name } => write!(f, "administrator {name}"),
        }
    }
}

pub(crate) enum Selection<M> {
    Picked(M),
    Invalid,
    Closed,
}

/// One interactive run: the registry, the acting administrator, the current actor and the
/// terminal.
#[derive(Debug)]
pub struct Session<R, W> {
    pub(crate) registry: Registry,
    pub(crate) admin: Administrator,
    pub(crate) actor: Actor,
    pub(crate) console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(registry: Registry, admin: Administrator, console: Console<R, W>) -> Self {
        Self { registry, admin, actor: Actor::Guest, console }
    }

    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn into_parts(self) -> (Registry, Console<R, W>) {
        (self.registry, self.console)
    }

    /// Runs the main menu until the user exits or the input ends.
    ///
    /// # Errors
    /// Returns any I/O error raised by the underlying streams.
    pub fn run(&mut self) -> io::Result<()> {
        info!(admin = self.admin.name(), "Session started");

        loop {
            let flow = match self.select::<MainChoice>()? {
                Selection::Picked(MainChoice::Student) => self.student_menu()?,
                Selection::Picked(MainChoice::Administrator) => self.admin_menu()?,
                Selection::Picked(MainChoice::Exit) | Selection::Closed => Flow::Exit,
                Selection::Invalid => Flow::Stay,
            };
            if flow == Flow::Exit {
                break;
            }
        }

        self.console.line("Exiting system.")?;
        info!("Session finished");
        Ok(())
    }

    /// Shows menu `M` and reads one selection.
    pub(crate) fn select<M: Menu>(&mut self) -> io::Result<Selection<M>> {
        self.console.header(M::PAGE)?;
        self.console.line(format_args!("\n{}", M::TITLE))?;
        for entry in M::iter() {
            self.console.line(format_args!("{}. {}", entry.number(), entry.label()))?;
        }

        let Some(input) = self.console.prompt("Enter choice: ")? else {
            return Ok(Selection::Closed);
        };
        if let Some(choice) = M::parse(&input) {
            debug!(actor = %self.actor, page = M::PAGE, choice = choice.number(), "Menu selection");
            return Ok(Selection::Picked(choice));
        }

        self.console.line("Invalid choice.")?;
        Ok(Selection::Invalid)
    }

    /// Prompts for a value; `None` when the input is exhausted.
    pub(crate) fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.console.prompt(label)?.map(|answer| answer.trim().to_owned()))
    }

    pub(crate) fn list_students(&mut self) -> io::Result<bool> {
        let mut students: Vec<&Student> = self.registry.students().collect();
        if students.is_empty() {
            self.console.line("No students currently registered.")?;
            return Ok(false);
        }
        students.sort_by(|a, b| a.id().cmp(b.id()));
        for student in students {
            match student.advisor() {
                Some(advisor) => self.console.line(format_args!(
                    "{student} ({}, advisor: {advisor})",
                    student.kind()
                ))?,
                None => self.console.line(format_args!("{student} ({})", student.kind()))?,
            }
        }
        Ok(true)
    }

    pub(crate) fn list_units(&mut self) -> io::Result<bool> {
        let units: Vec<Arc<Unit>> = self.registry.units().cloned().collect();
        if units.is_empty() {
            self.console.line("No units currently available.")?;
            return Ok(false);
        }
        self.print_units(units)?;
        Ok(true)
    }

    /// Lists a student's enrolled units, or the empty sentinel.
    pub(crate) fn list_student_units(&mut self, id: &str) -> io::Result<bool> {
        let units: Vec<Arc<Unit>> = self
            .registry
            .student(id)
            .map(|student| student.units().cloned().collect())
            .unwrap_or_default();
        if units.is_empty() {
            self.console.line(NO_UNITS_ENROLLED)?;
            return Ok(false);
        }
        self.print_units(units)?;
        Ok(true)
    }

    fn print_units(&mut self, mut units: Vec<Arc<Unit>>) -> io::Result<()> {
        units.sort_by(|a, b| a.code().cmp(b.code()));
        for unit in units {
            self.console.line(&unit)?;
        }
        Ok(())
    }
}
