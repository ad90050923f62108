//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lexdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("lexdrill").unwrap()
}

fn add_word(dir: &TempDir, term: &str, definition: &str) {
    lexdrill()
        .current_dir(dir.path())
        .args(["add", term, "--definition", definition])
        .assert()
        .success();
}

#[test]
fn help_output() {
    lexdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vocabulary practice"));
}

#[test]
fn version_output() {
    lexdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexdrill"));
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    lexdrill()
        .current_dir(dir.path())
        .args([
            "add",
            "serene",
            "--definition",
            "calm and unworried",
            "--part-of-speech",
            "adjective",
            "--example",
            "The lake looked serene at dawn.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'serene'"));

    lexdrill()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("serene"))
        .stdout(predicate::str::contains("learning"));
}

#[test]
fn list_empty_library() {
    let dir = TempDir::new().unwrap();
    lexdrill()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No terms to show."));
}

#[test]
fn mark_changes_status() {
    let dir = TempDir::new().unwrap();
    add_word(&dir, "serene", "calm");

    lexdrill()
        .current_dir(dir.path())
        .args(["mark", "serene", "mastered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'serene' as mastered."));

    lexdrill()
        .current_dir(dir.path())
        .args(["list", "--status", "mastered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serene"));

    lexdrill()
        .current_dir(dir.path())
        .args(["list", "--status", "learning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No terms to show."));
}

#[test]
fn remove_term() {
    let dir = TempDir::new().unwrap();
    add_word(&dir, "serene", "calm");

    lexdrill()
        .current_dir(dir.path())
        .args(["remove", "serene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'serene'"));

    lexdrill()
        .current_dir(dir.path())
        .args(["remove", "serene"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn import_wordlist() {
    let dir = TempDir::new().unwrap();
    let wordlist = dir.path().join("words.toml");
    std::fs::write(
        &wordlist,
        r#"
[wordlist]
name = "Test words"

[[terms]]
text = "candid"

[[terms.meanings]]
part_of_speech = "adjective"
definition = "truthful and straightforward"

[[terms]]
text = "resilient"

[[terms.meanings]]
part_of_speech = "adjective"
definition = "able to recover quickly"
"#,
    )
    .unwrap();

    lexdrill()
        .current_dir(dir.path())
        .arg("import")
        .arg(&wordlist)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 term(s) added"));

    lexdrill()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("candid"))
        .stdout(predicate::str::contains("resilient"));
}

#[test]
fn import_invalid_wordlist_fails() {
    let dir = TempDir::new().unwrap();
    let wordlist = dir.path().join("broken.toml");
    std::fs::write(&wordlist, "not toml [").unwrap();

    lexdrill()
        .current_dir(dir.path())
        .arg("import")
        .arg(&wordlist)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_starter_wordlist() {
    let dir = TempDir::new().unwrap();

    lexdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wordlists/starter.toml"));

    assert!(dir.path().join("wordlists/starter.toml").exists());

    // Second init should skip.
    lexdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn stats_without_history() {
    let dir = TempDir::new().unwrap();
    lexdrill()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No practice history yet."));
}

#[test]
fn practice_with_empty_library_fails() {
    let dir = TempDir::new().unwrap();
    lexdrill()
        .current_dir(dir.path())
        .arg("practice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn practice_single_term_full_run() {
    let dir = TempDir::new().unwrap();
    add_word(&dir, "serene", "calm");

    // One bare term yields exactly one written question; a non-empty line
    // answers it and the run ends with a perfect score.
    lexdrill()
        .current_dir(dir.path())
        .arg("practice")
        .write_stdin("The sea was serene.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1/1"));
}

#[test]
fn practice_miss_records_history() {
    let dir = TempDir::new().unwrap();
    add_word(&dir, "serene", "calm");

    // An empty line fails the written question; "n" declines the redeem.
    lexdrill()
        .current_dir(dir.path())
        .arg("practice")
        .write_stdin("\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/1"))
        .stdout(predicate::str::contains("Missed terms: serene"));

    lexdrill()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions: 1"))
        .stdout(predicate::str::contains("assessment"));
}
