use crate::menu::StudentChoice;
use crate::session::{Actor, Flow, Selection, Session};
use enrol_registry::{Confirmation, RegistryError};
use std::io::{self, BufRead, Write};
use tracing::info_span;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Asks for a student id and, if it is registered, runs the student menu as that student.
    pub(crate) fn student_menu(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask("Enter Student ID: ")? else {
            return Ok(Flow::Exit);
        };
        if !self.registry.student_exists(&id) {
            self.console.line("Student does not exist in the enrolment system.")?;
            return Ok(Flow::Stay);
        }

        let _span = info_span!("student_session", student_id = %id).entered();
        self.actor = Actor::Student { id: id.clone() };

        let flow = loop {
            let flow = match self.select::<StudentChoice>()? {
                Selection::Picked(StudentChoice::AddUnit) => self.student_add_unit(&id)?,
                Selection::Picked(StudentChoice::RemoveUnit) => self.student_remove_unit(&id)?,
                Selection::Picked(StudentChoice::ListUnits) => self.student_list_units(&id)?,
                Selection::Picked(StudentChoice::Back) => Flow::Back,
                Selection::Picked(StudentChoice::Exit) | Selection::Closed => Flow::Exit,
                Selection::Invalid => Flow::Stay,
            };
            if flow != Flow::Stay {
                break flow;
            }
        };

        self.actor = Actor::Guest;
        Ok(if flow == Flow::Exit { Flow::Exit } else { Flow::Stay })
    }

    fn student_add_unit(&mut self, id: &str) -> io::Result<Flow> {
        self.console.header("Student Menu: Add Unit")?;
        self.console.section("Available Units:")?;
        self.list_units()?;

        let Some(code) = self.ask("\nEnter Unit Code to Enroll: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.registry.enroll(id, &code, &mut self.console);
        self.report_enrolment(&code, result)?;
        Ok(Flow::Stay)
    }

    fn student_remove_unit(&mut self, id: &str) -> io::Result<Flow> {
        self.console.header("Student Menu: Remove Unit")?;
        self.console.section("Units Enrolled:")?;
        if !self.list_student_units(id)? {
            self.console.line("Not enrolled in any Units.")?;
            return Ok(Flow::Stay);
        }

        let Some(code) = self.ask("\nEnter Unit Code to Remove: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.registry.withdraw(id, &code, &mut self.console);
        self.report_withdrawal(&code, result)?;
        Ok(Flow::Stay)
    }

    fn student_list_units(&mut self, id: &str) -> io::Result<Flow> {
        self.console.section("Current Units:")?;
        self.list_student_units(id)?;
        Ok(if self.console.pause()? { Flow::Stay } else { Flow::Exit })
    }

    pub(crate) fn report_enrolment(
        &mut self,
        code: &str,
        result: Result<Confirmation, RegistryError>,
    ) -> io::Result<()> {
        let code = code.to_ascii_uppercase();
        match result {
            Ok(Confirmation::Applied) => {
                self.console.line(format_args!("\nEnrolled in unit '{code}' successfully."))
            },
            Ok(Confirmation::Cancelled) => {
                self.console.line(format_args!("\nEnrolment in unit '{code}' cancelled."))
            },
            Err(e) => self.console.line(e),
        }
    }

    pub(crate) fn report_withdrawal(
        &mut self,
        code: &str,
        result: Result<Confirmation, RegistryError>,
    ) -> io::Result<()> {
        let code = code.to_ascii_uppercase();
        match result {
            Ok(Confirmation::Applied) => {
                self.console.line(format_args!("\nUnit '{code}' removed successfully."))
            },
            Ok(Confirmation::Cancelled) => {
                self.console.line(format_args!("Removal of unit '{code}' cancelled."))
            },
            Err(e) => self.console.line(e),
        }
    }
}
