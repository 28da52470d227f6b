//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; today it only hosts the layered config loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use enrol_kernel::config::load_config;
//! use enrol_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
pub mod config;

pub use enrol_domain as domain;
