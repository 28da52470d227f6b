//! Console front-end for the enrolment registry.
//!
//! [`Session`] drives the nested menus over any [`std::io::BufRead`] / [`std::io::Write`]
//! pair, so the whole interaction can be scripted in tests. The `enrol` binary wires it
//! to stdin/stdout after loading configuration and logging.

mod admin;
mod args;
mod console;
mod menu;
mod seed;
mod session;
mod student;

pub use crate::args::Cli;
pub use crate::console::Console;
pub use crate::menu::{AdminChoice, MainChoice, Menu, StudentChoice};
pub use crate::seed::{SeedReport, apply_seed};
pub use crate::session::{Actor, Flow, Session};
