use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage as DeriveEnumMessage, FromRepr};

/// A numbered menu. Variants are listed in display order.
pub trait Menu: Copy + IntoEnumIterator + EnumMessage {
    /// Page name shown in the header.
    const PAGE: &'static str;
    /// Heading printed above the entries.
    const TITLE: &'static str;

    fn from_number(number: u8) -> Option<Self>;

    fn number(self) -> u8;

    /// Parses a menu selection; anything but a listed number is `None`.
    fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_number)
    }

    fn label(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, EnumIter, DeriveEnumMessage)]
#[repr(u8)]
pub enum MainChoice {
    #[strum(message = "Student")]
    Student = 1,
    #[strum(message = "Administrator")]
    Administrator = 2,
    #[strum(message = "Exit")]
    Exit = 0,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, EnumIter, DeriveEnumMessage)]
#[repr(u8)]
pub enum StudentChoice {
    #[strum(message = "Add Unit")]
    AddUnit = 1,
    #[strum(message = "Remove Unit")]
    RemoveUnit = 2,
    #[strum(message = "List Current Units")]
    ListUnits = 3,
    #[strum(message = "Back to Main Menu")]
    Back = 4,
    #[strum(message = "Exit")]
    Exit = 0,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, EnumIter, DeriveEnumMessage)]
#[repr(u8)]
pub enum AdminChoice {
    #[strum(message = "Add Student")]
    AddStudent = 1,
    #[strum(message = "Remove Student")]
    RemoveStudent = 2,
    #[strum(message = "Add Unit")]
    AddUnit = 3,
    #[strum(message = "Remove Unit")]
    RemoveUnit = 4,
    #[strum(message = "List All Students")]
    ListStudents = 5,
    #[strum(message = "List All Units")]
    ListUnits = 6,
    #[strum(message = "Back to Main Menu")]
    Back = 7,
    #[strum(message = "Add Unit to Student")]
    AddUnitToStudent = 8,
    #[strum(message = "Remove Unit from Student")]
    RemoveUnitFromStudent = 9,
    #[strum(message = "Exit")]
    Exit = 0,
}

impl Menu for MainChoice {
    const PAGE: &'static str = "Main Menu";
    const TITLE: &'static str = "Select User Type:";

    fn from_number(number: u8) -> Option<Self> {
        Self::from_repr(number)
    }

    fn number(self) -> u8 {
        self as u8
    }
}

impl Menu for StudentChoice {
    const PAGE: &'static str = "Student Menu";
    const TITLE: &'static str = "Student Menu:";

    fn from_number(number: u8) -> Option<Self> {
        Self::from_repr(number)
    }

    fn number(self) -> u8 {
        self as u8
    }
}

impl Menu for AdminChoice {
    const PAGE: &'static str = "Administrator Menu";
    const TITLE: &'static str = "Administrator Menu:";

    fn from_number(number: u8) -> Option<Self> {
        Self::from_repr(number)
    }

    fn number(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listed_numbers_only() {
        assert_eq!(MainChoice::parse(" 2 "), Some(MainChoice::Administrator));
        assert_eq!(MainChoice::parse("0"), Some(MainChoice::Exit));
        assert_eq!(MainChoice::parse("3"), None);
        assert_eq!(MainChoice::parse("-1"), None);
        assert_eq!(MainChoice::parse("one"), None);
        assert_eq!(StudentChoice::parse("4"), Some(StudentChoice::Back));
        assert_eq!(AdminChoice::parse("9"), Some(AdminChoice::RemoveUnitFromStudent));
        assert_eq!(AdminChoice::parse("10"), None);
    }

    #[test]
    fn entries_render_in_declaration_order() {
        let rendered: Vec<String> =
            MainChoice::iter().map(|c| format!("{}. {}", c.number(), c.label())).collect();
        assert_eq!(rendered, ["1. Student", "2. Administrator", "0. Exit"]);
        assert_eq!(AdminChoice::iter().count(), 10);
    }
}
