use enrol_kernel::config::{ConfigError, load_config};
use enrol_kernel::domain::config::ShellConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn absent_default_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cfg: ShellConfig = load_config(None::<&str>)?;

    assert_eq!(cfg.administrator, "John");
    assert!(cfg.seed.enabled);
    Ok(())
}

#[test]
fn missing_explicit_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let err = load_config::<ShellConfig>(Some(tmp_dir.path().join("absent.toml")))
        .expect_err("explicit path must exist");

    assert!(matches!(err, ConfigError::Build { .. }), "unexpected error: {err}");
    Ok(())
}

#[test]
fn toml_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("enrol.toml");
    fs::write(
        &path,
        r#"
administrator = "Jane"

[registry]
cascade_unit_removal = true

[seed]
enabled = false

[log]
level = "debug"
json = true
"#,
    )?;

    let cfg: ShellConfig = load_config(Some(&path))?;
    assert_eq!(cfg.administrator, "Jane");
    assert!(cfg.registry.cascade_unit_removal);
    assert!(!cfg.seed.enabled);
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.json);
    Ok(())
}

#[test]
fn malformed_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("broken.toml");
    fs::write(&path, "administrator = [unclosed")?;

    let err = load_config::<ShellConfig>(Some(&path)).expect_err("broken toml must fail");
    assert!(matches!(err, ConfigError::Build { .. }), "unexpected error: {err}");
    Ok(())
}
