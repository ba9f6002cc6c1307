use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.host.registration_prefix, "VisualStudio.DTE.");
    assert!(config.host.command.ends_with(r#"devenv.com" ."#));
    assert!(!config.open.wait);
    assert!(config.open.prefer_solution);
    assert!(config.open.target.is_none());
    assert!(config.companion.dir.is_none());
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.host.command, DEFAULT_HOST_COMMAND);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[open]\nwait = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.open.wait);
    assert!(config.open.prefer_solution);
    assert_eq!(config.host.registration_prefix, DEFAULT_REGISTRATION_PREFIX);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[open\nwait = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_save_then_load_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set_value("host.command", "devenv {target} /nosplash").unwrap();
    config.set_value("open.target", r"C:\proj\app.sln").unwrap();
    config.set_value("companion.dir", r"C:\proj\rust").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.get_value("host.command").unwrap(), "devenv {target} /nosplash");
    assert_eq!(loaded.get_value("open.target").unwrap(), r"C:\proj\app.sln");
    assert_eq!(loaded.get_value("companion.dir").unwrap(), r"C:\proj\rust");
}

#[test]
fn test_set_value_rejects_bad_input() {
    let mut config = Config::default();
    assert!(config.set_value("open.wait", "yes").is_err());
    assert!(config.set_value("host.command", "   ").is_err());
    assert!(config.set_value("host.registration_prefix", "").is_err());
    assert!(config.set_value("editor.command", "code .").is_err());
    assert!(config.get_value("editor.command").is_err());

    config.set_value("open.wait", "true").unwrap();
    assert_eq!(config.get_value("open.wait").unwrap(), "true");
}

#[test]
fn test_empty_value_clears_optional_paths() {
    let mut config = Config::default();
    config.set_value("open.target", "app.sln").unwrap();
    config.set_value("open.target", "").unwrap();
    assert!(config.open.target.is_none());
    assert_eq!(config.get_value("open.target").unwrap(), "");
}

#[test]
fn test_locate_settings() {
    let mut config = Config::default();
    config.host.command = "devenv .".to_string();

    let settings = config.locate_settings(false).unwrap();
    assert_eq!(settings.registration_prefix, "VisualStudio.DTE.");
    assert_eq!(settings.command.program(), "devenv");
    assert!(!settings.wait);

    assert!(config.locate_settings(true).unwrap().wait);
    config.open.wait = true;
    assert!(config.locate_settings(false).unwrap().wait);

    config.host.command = String::new();
    assert!(config.locate_settings(false).is_err());
}
