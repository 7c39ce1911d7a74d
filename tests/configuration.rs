//! Tests for configuration system

use temp_dir::TempDir;
use weekmenu::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "pretty");
    assert!(config.catalog.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("weekmenu.toml");
    std::fs::write(
        &path,
        r#"
[catalog]
path = "/srv/menu/catalog.json"

[logging]
format = "json"

[planner]
seed = 7
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("/srv/menu/catalog.json"))
    );
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.planner.seed, Some(7));

    Ok(())
}

#[test]
fn test_configured_catalog_is_used() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog_path = dir.child("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{"main_meat":[{"name":"Braised Hairtail"}],"semi_meat":[],"veggie":[]}"#,
    )?;

    let mut config = Config::default();
    config.catalog.path = Some(catalog_path.clone());
    let catalog = weekmenu::load_catalog(&config, None);
    assert_eq!(catalog.main_meat.len(), 1);

    let embedded = weekmenu::load_catalog(&Config::default(), None);
    assert_eq!(embedded.main_meat.len(), 15);

    let missing = weekmenu::load_catalog(&config, Some(dir.child("missing.toml")));
    assert!(missing.is_empty());

    Ok(())
}
