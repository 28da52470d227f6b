use crate::menu::AdminChoice;
use crate::session::{Actor, Flow, Selection, Session};
use enrol_domain::{ContactDetails, Student, StudentKind, Unit, UnitCode};
use enrol_registry::{RegistryError, is_affirmative};
use std::io::{self, BufRead, Write};
use tracing::info_span;

/// Answers collected by the "Add Student" form, in prompt order.
const STUDENT_FIELDS: [&str; 5] = [
    "Enter New Student Name: ",
    "Enter New Student ID: ",
    "Enter New Student Address: ",
    "Enter New Student Phone: ",
    "Enter New Student Email: ",
];

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn admin_menu(&mut self) -> io::Result<Flow> {
        let _span = info_span!("admin_session", admin = self.admin.name()).entered();
        self.actor = Actor::Administrator { name: self.admin.name().to_owned() };

        let flow = loop {
            let flow = match self.select::<AdminChoice>()? {
                Selection::Picked(choice) => self.dispatch_admin(choice)?,
                Selection::Closed => Flow::Exit,
                Selection::Invalid => Flow::Stay,
            };
            if flow != Flow::Stay {
                break flow;
            }
        };

        self.actor = Actor::Guest;
        Ok(if flow == Flow::Exit { Flow::Exit } else { Flow::Stay })
    }

    fn dispatch_admin(&mut self, choice: AdminChoice) -> io::Result<Flow> {
        match choice {
            AdminChoice::AddStudent => self.admin_add_student(),
            AdminChoice::RemoveStudent => self.admin_remove_student(),
            AdminChoice::AddUnit => self.admin_add_unit(),
            AdminChoice::RemoveUnit => self.admin_remove_unit(),
            AdminChoice::ListStudents => {
                self.console.header("Admin Menu: List All Students")?;
                self.console.section("Current Students:")?;
                self.list_students()?;
                Ok(if self.console.pause()? { Flow::Stay } else { Flow::Exit })
            },
            AdminChoice::ListUnits => {
                self.console.header("Admin Menu: List All Units")?;
                self.console.section("Current Units:")?;
                self.list_units()?;
                Ok(if self.console.pause()? { Flow::Stay } else { Flow::Exit })
            },
            AdminChoice::Back => Ok(Flow::Back),
            AdminChoice::AddUnitToStudent => self.admin_add_unit_to_student(),
            AdminChoice::RemoveUnitFromStudent => self.admin_remove_unit_from_student(),
            AdminChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn admin_add_student(&mut self) -> io::Result<Flow> {
        self.console.header("Admin Menu: Add New Student")?;

        let mut answers = Vec::with_capacity(STUDENT_FIELDS.len());
        for label in STUDENT_FIELDS {
            let Some(answer) = self.ask(label)? else {
                return Ok(Flow::Exit);
            };
            answers.push(answer);
        }
        let [name, id, address, phone, email] = <[String; 5]>::try_from(answers)
            .map_err(|_| io::Error::other("student form answer count mismatch"))?;

        let Some(kind) = self.ask("Enter Type of Student - [F] Full-time or [P] Part-time: ")?
        else {
            return Ok(Flow::Exit);
        };
        let kind = match kind.to_ascii_uppercase().as_str() {
            "F" => StudentKind::FullTime,
            "P" => {
                let Some(advisor) = self.ask("Enter Course Advisor (leave blank if none): ")?
                else {
                    return Ok(Flow::Exit);
                };
                StudentKind::PartTime { advisor: (!advisor.is_empty()).then_some(advisor) }
            },
            _ => {
                self.console.line("Invalid option. Returning to the menu.")?;
                return Ok(Flow::Stay);
            },
        };

        let student = Student::new(&id, name, ContactDetails { address, phone, email }, kind);
        let id = student.id().to_owned();
        match self.admin.add_student(&mut self.registry, student) {
            Ok(()) => self.console.line(format_args!("Student '{id}' added successfully."))?,
            Err(e) => self.console.line(e)?,
        }
        Ok(Flow::Stay)
    }

    fn admin_remove_student(&mut self) -> io::Result<Flow> {
        self.console.header("Admin Menu: Remove Student")?;
        self.console.section("Current Students:")?;
        if !self.list_students()? {
            return Ok(Flow::Stay);
        }

        let Some(id) = self.ask("\nEnter Student ID to Remove: ")? else {
            return Ok(Flow::Exit);
        };
        if !self.registry.student_exists(&id) {
            self.console.line(RegistryError::StudentNotFound { id })?;
            return Ok(Flow::Stay);
        }
        let Some(answer) = self.ask(&format!("Confirm removal of student '{id}' (Y/N): "))? else {
            return Ok(Flow::Exit);
        };
        if !is_affirmative(&answer) {
            self.console.line("Operation cancelled.")?;
            return Ok(Flow::Stay);
        }

        match self.admin.remove_student(&mut self.registry, &id) {
            Ok(_) => self.console.line(format_args!("Student with ID '{id}' has been removed."))?,
            Err(e) => self.console.line(e)?,
        }
        Ok(Flow::Stay)
    }

    fn admin_add_unit(&mut self) -> io::Result<Flow> {
        self.console.header("Admin Menu: Add New Unit")?;

        let Some(code) = self.ask("Enter New Unit Code: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.ask("Enter New Unit Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(points) = self.ask("Enter Credit Points: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(credit_points) = points.parse::<u32>() else {
            self.console.line("Invalid input for credit points. Returning to the menu.")?;
            return Ok(Flow::Stay);
        };

        let unit = Unit::new(code.as_str(), title, credit_points);
        if unit.code().is_empty() {
            self.console.line(RegistryError::EmptyKey { field: "Unit code" })?;
            return Ok(Flow::Stay);
        }
        if self.registry.catalog().contains(unit.code()) {
            self.console.line(RegistryError::DuplicateUnit { code: unit.code().clone() })?;
            return Ok(Flow::Stay);
        }

        let prompt = format!("Confirm creation of unit '{}' (Y/N): ", unit.code());
        let Some(answer) = self.ask(&prompt)? else {
            return Ok(Flow::Exit);
        };
        if !is_affirmative(&answer) {
            self.console.line("Operation cancelled.")?;
            return Ok(Flow::Stay);
        }

        match self.admin.add_unit(&mut self.registry, unit) {
            Ok(unit) => {
                self.console.line(format_args!("Unit '{}' added successfully.", unit.code()))?;
            },
            Err(e) => self.console.line(e)?,
        }
        Ok(Flow::Stay)
    }

    fn admin_remove_unit(&mut self) -> io::Result<Flow> {
        self.console.header("Admin Menu: Remove Unit")?;
        self.console.section("Current Units:")?;
        if !self.list_units()? {
            return Ok(Flow::Stay);
        }

        let Some(code) = self.ask("\nEnter Unit Code to Remove: ")? else {
            return Ok(Flow::Exit);
        };
        let code = UnitCode::new(code);
        if !self.registry.catalog().contains(&code) {
            self.console.line(RegistryError::UnitNotFound { code })?;
            return Ok(Flow::Stay);
        }
        let Some(answer) = self.ask(&format!("Confirm removal of unit '{code}' (Y/N): "))? else {
            return Ok(Flow::Exit);
        };
        if !is_affirmative(&answer) {
            self.console.line("Operation cancelled.")?;
            return Ok(Flow::Stay);
        }

        let removal = match self.admin.remove_unit(&mut self.registry, code.as_str()) {
            Ok(removal) => removal,
            Err(e) => {
                self.console.line(e)?;
                return Ok(Flow::Stay);
            },
        };
        self.console.line(format_args!("Unit '{code}' removed successfully."))?;

        if !removal.enrolled.is_empty() {
            let students = removal.enrolled.join(", ");
            if removal.cascaded {
                self.console.line(format_args!("Withdrew unit '{code}' from: {students}"))?;
            } else {
                self.console.line(format_args!(
                    "Warning: students still enrolled in unit '{code}': {students}"
                ))?;
            }
        }
        Ok(Flow::Stay)
    }

    fn admin_add_unit_to_student(&mut self) -> io::Result<Flow> {
        self.console.header("Admin Menu: Add Unit to Student")?;
        self.console.section("Current Students:")?;
        if !self.list_students()? {
            return Ok(Flow::Stay);
        }

        let Some(id) = self.ask("\nStudent ID: ")? else {
            return Ok(Flow::Exit);
        };
        if !self.registry.student_exists(&id) {
            self.console.line(RegistryError::StudentNotFound { id })?;
            return Ok(Flow::Stay);
        }

        self.console.section("Available Units:")?;
        self.list_units()?;
        let Some(code) = self.ask("\nEnter Unit Code to Enroll: ")? else {
            return Ok(Flow::Exit);
        };

        let result =
            self.admin.add_unit_to_student(&mut self.registry, &id, &code, &mut self.console);
        self.report_enrolment(&code, result)?;
        Ok(Flow::Stay)
    }

    fn admin_remove_unit_from_student(&mut self) -> io::Result<Flow> {
        self.console.header("Admin Menu: Remove Unit from Student")?;
        self.console.section("Current Students:")?;
        if !self.list_students()? {
            return Ok(Flow::Stay);
        }

        let Some(id) = self.ask("\nEnter Student ID: ")? else {
            return Ok(Flow::Exit);
        };
        if !self.registry.student_exists(&id) {
            self.console.line(RegistryError::StudentNotFound { id })?;
            return Ok(Flow::Stay);
        }

        self.console.section("Student's Current Units:")?;
        if !self.list_student_units(&id)? {
            self.console.line("\nThis student is not enrolled in any units.")?;
            return Ok(Flow::Stay);
        }
        let Some(code) = self.ask("\nEnter Unit Code to Remove: ")? else {
            return Ok(Flow::Exit);
        };

        let result =
            self.admin.remove_unit_from_student(&mut self.registry, &id, &code, &mut self.console);
        self.report_withdrawal(&code, result)?;
        Ok(Flow::Stay)
    }
}
