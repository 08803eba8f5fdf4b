use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_remove-restaurant-id");

fn run_in(dir: &TempDir, args: &[&str]) -> Result<Output> {
    Ok(Command::new(BIN)
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn test_cli_success_output() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("ingredients_with_translations.json"),
        r#"[{"name":"Salt","restaurant_id":"r1"},{"name":"Pepper"}]"#,
    )?;

    let output = run_in(&dir, &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Found 2 ingredients",
            "Removed restaurant_id from 1 ingredients",
            "Cleaned data written to ingredients_without_restaurant_id.json",
            "✅ Successfully removed restaurant_id fields",
        ]
    );

    let written =
        std::fs::read_to_string(dir.path().join("ingredients_without_restaurant_id.json"))?;
    assert_eq!(
        written,
        "[\n  {\n    \"name\": \"Salt\"\n  },\n  {\n    \"name\": \"Pepper\"\n  }\n]"
    );
    Ok(())
}

#[test]
fn test_cli_missing_input() -> Result<()> {
    let dir = TempDir::new()?;

    let output = run_in(&dir, &[])?;

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error: "));
    assert!(lines[0].contains("ingredients_with_translations.json"));
    assert_eq!(lines[1], "❌ Failed to process file");
    assert!(!dir.path().join("ingredients_without_restaurant_id.json").exists());
    Ok(())
}

#[test]
fn test_cli_atomic_flag() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("ingredients_with_translations.json"),
        r#"[{"name":"Café","restaurant_id":"r2"}]"#,
    )?;

    let output = run_in(&dir, &["--atomic"])?;

    assert!(output.status.success());
    let written =
        std::fs::read_to_string(dir.path().join("ingredients_without_restaurant_id.json"))?;
    assert_eq!(written, "[\n  {\n    \"name\": \"Café\"\n  }\n]");
    Ok(())
}

#[test]
fn test_cli_rejects_positional_paths() -> Result<()> {
    let dir = TempDir::new()?;

    let output = run_in(&dir, &["other.json"])?;

    assert!(!output.status.success());
    Ok(())
}
