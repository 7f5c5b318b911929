use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "cravox";

fn cravox(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("CRAVOX_DATA_DIR", dir.path());
    cmd.env("CRAVOX_SYSTEM_THEME", "dark");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn theme_defaults_to_system() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(contains("Theme:      system").and(contains("Effective:  dark")));
}

#[test]
fn theme_set_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .args(["theme", "set", "Light"])
        .assert()
        .success()
        .stdout(contains("Theme set to light"));

    cravox(&dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(contains("Theme:      light").and(contains("Effective:  light")));

    let stored = std::fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    assert!(stored.contains("\"theme\""));
    assert!(stored.contains("\"light\""));
}

#[test]
fn theme_set_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .args(["theme", "set", "blue"])
        .assert()
        .failure()
        .stderr(contains("Unknown theme 'blue'"));
}

#[test]
fn invalid_stored_theme_falls_back_to_system() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("preferences.json"), r#"{"theme":"blue"}"#).unwrap();
    cravox(&dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(contains("Theme:      system"));
}

#[test]
fn theme_show_palette_lists_colours() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .args(["theme", "show", "--palette"])
        .assert()
        .success()
        .stdout(contains("background").and(contains("#0F172A")));
}

#[test]
fn summary_uses_seed_values() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("$1,800")
                .and(contains("$5,000"))
                .and(contains("36%"))
                .and(contains("Netflix Inc.")),
        );
}

#[test]
fn summary_overspent_shows_negative_balance() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .args(["summary", "--income", "1000", "--expenses", "1500"])
        .assert()
        .success()
        .stdout(contains("-$500").and(contains("Fill:      0%")));
}

#[test]
fn summary_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .args(["summary", "--income", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid income"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();
    cravox(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains("preferences.json")
                .and(contains("config.json"))
                .and(contains("cravox=info")),
        );
}
