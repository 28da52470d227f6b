use enrol_registry::{Confirm, is_affirmative};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::warn;

const BANNER: &str = "\n---------------------------------\n\
                      |         FIT5136 Demo           |\n\
                      |    Student Enrolment System    |\n\
                      ---------------------------------";

const RULE: &str = "-----------------";

/// Line-oriented terminal handle used by every screen.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its line terminator. `None` means the input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced, so they read as an unrecognised answer.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Prints `label` without a newline and reads the answer.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Page banner shown above every screen.
    pub fn header(&mut self, page: &str) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, " -- Current Page: {page} --")
    }

    /// Section title followed by a rule, e.g. `Current Units:`.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n{title}\n{RULE}")
    }

    /// Waits for any line before returning to the menu. `false` if the input is exhausted.
    pub fn pause(&mut self) -> io::Result<bool> {
        self.line("\nPress Enter to return to the menu.")?;
        Ok(self.read_line()?.is_some())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirm for Console<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        match self.prompt(prompt) {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Confirmation prompt failed; treating as cancelled");
                false
            },
        }
    }
}
