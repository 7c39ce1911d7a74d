//! Tests for CLI commands (generate, catalog)

use std::process::Command;

use temp_dir::TempDir;

fn weekmenu() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_weekmenu"));
    command.env("WEEKMENU__LOGGING__LEVEL", "off");
    command
}

#[test]
fn test_cli_help_shows_all_commands() {
    let output = weekmenu()
        .arg("--help")
        .output()
        .expect("Failed to run weekmenu --help");

    let help_text = String::from_utf8_lossy(&output.stdout);

    assert!(help_text.contains("generate"), "generate command not in help");
    assert!(help_text.contains("catalog"), "catalog command not in help");
}

#[test]
fn test_generate_prints_five_days() {
    let output = weekmenu()
        .args(["generate", "--no-lamb", "--seed", "11"])
        .output()
        .expect("Failed to run weekmenu generate");

    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("Weekly menu (no lamb)"));
    for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
        assert!(text.contains(day), "{day} missing from {text}");
    }
    assert!(!text.contains("Scallion Stir-Fried Lamb"));
}

#[test]
fn test_generate_same_seed_same_output() {
    let run = || {
        weekmenu()
            .args(["generate", "--seed", "3", "--format", "json"])
            .output()
            .expect("Failed to run weekmenu generate")
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn test_generate_infeasible_exits_with_failure() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("spicy.json");
    std::fs::write(
        &path,
        r#"{
            "main_meat": [{"name": "Twice-Cooked Pork", "has_spicy": true}],
            "semi_meat": [{"name": "Moo Shu Pork"}],
            "veggie": [{"name": "Garlic Spinach"}]
        }"#,
    )?;

    let output = weekmenu()
        .arg("--catalog")
        .arg(&path)
        .args(["generate", "--no-spicy"])
        .output()?;

    assert!(!output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("No main meat dish"), "{text}");

    Ok(())
}

#[test]
fn test_catalog_summary() {
    let output = weekmenu()
        .args(["catalog", "--no-spicy"])
        .output()
        .expect("Failed to run weekmenu catalog");

    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("main_meat   10 of  15 dishes"), "{text}");
    assert!(text.contains("semi_meat    9 of  15 dishes"), "{text}");
    assert!(text.contains("veggie      15 of  15 dishes"), "{text}");
}
