use enrol_domain::config::SeedConfig;
use enrol_registry::prelude::*;
use enrol_shell::{Actor, Console, Session, apply_seed};
use std::io::Cursor;

fn seeded() -> Registry {
    let mut registry = Registry::new();
    apply_seed(&mut registry, &SeedConfig::default());
    registry
}

fn yes(_: &str) -> bool {
    true
}

fn run(registry: Registry, script: &str) -> (Registry, String) {
    run_bytes(registry, script.as_bytes().to_vec())
}

fn run_bytes(registry: Registry, script: Vec<u8>) -> (Registry, String) {
    let console = Console::new(Cursor::new(script), Vec::new());
    let mut session = Session::new(registry, Administrator::new("John"), console);
    session.run().expect("in-memory streams should not fail");
    assert_eq!(session.actor(), &Actor::Guest, "actor resets when menus unwind");

    let (registry, console) = session.into_parts();
    (registry, String::from_utf8(console.into_output()).expect("utf8 output"))
}

#[test]
fn exit_prints_farewell() {
    let (_, out) = run(seeded(), "0\n");
    assert!(out.contains(" -- Current Page: Main Menu --"));
    assert!(out.contains("1. Student\n2. Administrator\n0. Exit\n"));
    assert!(out.ends_with("Exiting system.\n"));
}

#[test]
fn invalid_choices_redisplay_menu() {
    let (_, out) = run(seeded(), "abc\n5\n\n0\n");
    assert_eq!(out.matches("Invalid choice.").count(), 3);
    assert_eq!(out.matches("Select User Type:").count(), 4);
}

#[test]
fn undecodable_input_is_an_invalid_choice() {
    let (_, out) = run_bytes(seeded(), vec![0xff, 0xfe, b'\n', b'0', b'\n']);
    assert_eq!(out.matches("Invalid choice.").count(), 1);
    assert!(out.ends_with("Exiting system.\n"));
}

#[test]
fn end_of_input_ends_session() {
    let (_, out) = run(seeded(), "2\n1\nGrace");
    assert!(out.ends_with("Exiting system.\n"));
}

#[test]
fn exit_from_submenu_leaves_program() {
    let (_, out) = run(seeded(), "2\n0\n");
    assert_eq!(out.matches("Select User Type:").count(), 1);
    assert!(out.ends_with("Exiting system.\n"));
}

#[test]
fn student_enrols_and_repeat_is_rejected() {
    let script = "1\n123123\n1\nFIT5136\nY\n1\nFIT5136\n3\n\n4\n0\n";
    let (registry, out) = run(seeded(), script);

    assert!(out.contains("Enrolled in unit 'FIT5136' successfully."));
    assert!(out.contains("Student is already enrolled in the unit 'FIT5136'."));
    assert_eq!(out.matches("Confirm enrolment in unit").count(), 1);
    assert!(out.contains("Current Units:\n-----------------\nFIT5136 - Software Engineering (6 credit points)\n"));
    assert_eq!(registry.student("123123").unwrap().unit_count(), 1);
}

#[test]
fn declined_enrolment_is_cancelled() {
    let (registry, out) = run(seeded(), "1\n123123\n1\nfit5136\nn\n4\n0\n");
    assert!(out.contains("Enrolment in unit 'FIT5136' cancelled."));
    assert_eq!(registry.student("123123").unwrap().unit_count(), 0);
}

#[test]
fn unknown_student_cannot_open_student_menu() {
    let (_, out) = run(seeded(), "1\n999\n0\n");
    assert!(out.contains("Student does not exist in the enrolment system."));
    assert!(!out.contains("Student Menu:"));
}

#[test]
fn student_without_units_cannot_remove() {
    let (_, out) = run(seeded(), "1\n123123\n2\n4\n0\n");
    assert!(out.contains("No units enrolled.\nNot enrolled in any Units.\n"));
    assert!(!out.contains("Enter Unit Code to Remove"));
}

#[test]
fn student_withdraws_case_insensitively() {
    let mut registry = seeded();
    registry.enroll("123123", "FIT5136", &mut yes).unwrap();

    let (registry, out) = run(registry, "1\n123123\n2\nfit5136\ny\n4\n0\n");
    assert!(out.contains("Unit 'FIT5136' removed successfully."));
    assert_eq!(registry.student("123123").unwrap().unit_count(), 0);
}

#[test]
fn admin_adds_part_time_student_with_advisor() {
    let script = "2\n1\nGrace Hopper\n42\n1 Navy Way\n555\ngrace@navy.mil\np\nDr. Who\n5\n\n7\n0\n";
    let (registry, out) = run(seeded(), script);

    assert!(out.contains("Student '42' added successfully."));
    assert!(out.contains("42 - Grace Hopper (Part-time, advisor: Dr. Who)"));
    assert!(out.contains("123123 - John Lee (Full-time)"));

    let student = registry.student("42").unwrap();
    assert_eq!(student.advisor(), Some("Dr. Who"));
    assert_eq!(student.contact().email, "grace@navy.mil");
}

#[test]
fn admin_rejects_unknown_student_type() {
    let (registry, out) = run(seeded(), "2\n1\nX\n77\na\np\ne\nZ\n7\n0\n");
    assert!(out.contains("Invalid option. Returning to the menu."));
    assert!(!registry.student_exists("77"));
}

#[test]
fn admin_duplicate_student_is_rejected() {
    let (registry, out) = run(seeded(), "2\n1\nImpostor\n123123\na\np\ne\nF\n7\n0\n");
    assert!(out.contains("Error: Student ID '123123' already exists."));
    assert_eq!(registry.student("123123").unwrap().name(), "John Lee");
}

#[test]
fn admin_rejects_non_numeric_credit_points() {
    let (registry, out) = run(seeded(), "2\n3\nFIT1045\nAlgorithms\nsix\n7\n0\n");
    assert!(out.contains("Invalid input for credit points."));
    assert!(registry.unit("FIT1045").is_none());
}

#[test]
fn admin_blank_unit_code_is_rejected_without_prompt() {
    let (registry, out) = run(seeded(), "2\n3\n   \nNothing\n6\n7\n0\n");
    assert!(out.contains("Unit code cannot be empty."));
    assert!(!out.contains("Confirm creation of unit"));
    assert_eq!(registry.catalog().len(), 1);
}

#[test]
fn admin_adds_unit_after_confirmation() {
    let (registry, out) = run(seeded(), "2\n3\nfit1045\nAlgorithms\n6\ny\n6\n\n7\n0\n");
    assert!(out.contains("Confirm creation of unit 'FIT1045' (Y/N): "));
    assert!(out.contains("Unit 'FIT1045' added successfully."));
    assert!(out.contains("FIT1045 - Algorithms (6 credit points)\nFIT5136 - Software Engineering"));
    assert_eq!(registry.catalog().len(), 2);
}

#[test]
fn admin_removing_unknown_student_reports_not_found() {
    let (registry, out) = run(seeded(), "2\n2\n999\n7\n0\n");
    assert!(out.contains("Student not found."));
    assert!(!out.contains("Confirm removal of student"));
    assert_eq!(registry.student_count(), 1);
}

#[test]
fn admin_remove_student_needs_confirmation() {
    let (registry, out) = run(seeded(), "2\n2\n123123\nN\n2\n123123\nY\n7\n0\n");
    assert!(out.contains("Operation cancelled."));
    assert!(out.contains("Student with ID '123123' has been removed."));
    assert_eq!(registry.student_count(), 0);
}

#[test]
fn admin_enrolment_respects_capacity() {
    let mut registry = Registry::new();
    for code in ["U1", "U2", "U3", "U4", "U5"] {
        registry.add_unit(Unit::new(code, "Generated", 6)).unwrap();
    }
    registry.add_student(Student::full_time("1", "Ada")).unwrap();
    for code in ["U1", "U2", "U3", "U4"] {
        registry.enroll("1", code, &mut yes).unwrap();
    }

    let (registry, out) = run(registry, "2\n8\n1\nU5\n7\n0\n");
    assert!(out.contains("maximum number of units (4 units)"));
    assert!(!out.contains("Confirm enrolment"));
    assert_eq!(registry.student("1").unwrap().unit_count(), 4);
}

#[test]
fn admin_withdraws_unit_from_student() {
    let mut registry = seeded();
    registry.enroll("123123", "FIT5136", &mut yes).unwrap();

    let (registry, out) = run(registry, "2\n9\n123123\nFIT5136\nY\n9\n123123\n7\n0\n");
    assert!(out.contains("Unit 'FIT5136' removed successfully."));
    assert!(out.contains("This student is not enrolled in any units."));
    assert_eq!(registry.student("123123").unwrap().unit_count(), 0);
}

#[test]
fn admin_remove_unit_flags_dangling_enrolments() {
    let mut registry = seeded();
    registry.enroll("123123", "FIT5136", &mut yes).unwrap();

    let (registry, out) = run(registry, "2\n4\nFIT5136\nY\n7\n0\n");
    assert!(out.contains("Unit 'FIT5136' removed successfully."));
    assert!(out.contains("Warning: students still enrolled in unit 'FIT5136': 123123"));
    assert!(registry.unit("FIT5136").is_none());
    assert_eq!(registry.student("123123").unwrap().unit_count(), 1);
}

#[test]
fn admin_remove_unknown_unit_reports_not_found() {
    let (registry, out) = run(seeded(), "2\n4\nFIT9999\n7\n0\n");
    assert!(out.contains("Unit 'FIT9999' not found."));
    assert_eq!(registry.catalog().len(), 1);
}
