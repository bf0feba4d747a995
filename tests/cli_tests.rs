use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookql_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookql"))
}

/// Command running in an empty temp dir, so no stray config is picked up.
fn isolated(temp_dir: &TempDir) -> Command {
    let mut cmd = bookql_cmd();
    cmd.current_dir(temp_dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_config(temp_dir: &TempDir, content: &str) {
    std::fs::write(temp_dir.path().join(".bookql.yml"), content).unwrap();
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL service"));
}

#[test]
fn test_version() {
    bookql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookql"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Mutation"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let config = std::fs::read_to_string(temp_dir.path().join(".bookql.yml")).unwrap();
    assert!(config.contains("id_policy: length"));
    assert!(config.contains("port: 3000"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir).arg("init").assert().success();
    isolated(&temp_dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_books() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ books { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harry Potter and the Chamber of Secrets"))
        .stdout(predicate::str::contains("Beyond the Shadows"));
}

#[test]
fn test_query_book_author() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ book(id: 5) { name author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Two Towers"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args([
            "query",
            "query($id: Int) { author(id: $id) { name } }",
            "--variables",
            r#"{"id": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brent Weeks"));
}

#[test]
fn test_query_without_id_reports_validation() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ book { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VALIDATION"))
        .stdout(predicate::str::contains("Argument `id` is required"));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ books { id } }", "--variables", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_mutate_add_book() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args([
            "mutate",
            r#"addBook(name: "The Hobbit", authorId: 2) { id name author { name } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 9"#))
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

#[test]
fn test_mutate_delete_unknown_author() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["mutate", "deleteAuthor(id: 99) { id }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT_FOUND"))
        .stdout(predicate::str::contains("Author not found: 99"));
}

#[test]
fn test_mutate_update_then_read_in_same_document() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args([
            "mutate",
            r#"updateAuthor(id: 1, name: "Joanne Rowling") { name books { id } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joanne Rowling"))
        .stdout(predicate::str::contains(r#""id": 3"#));
}

#[test]
fn test_length_policy_reuses_id_after_delete() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args([
            "mutate",
            r#"deleteBook(id: 1) { id } addBook(name: "Again", authorId: 1) { id }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 8"#));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_monotonic_policy_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "store:\n  id_policy: monotonic\n");

    isolated(&temp_dir)
        .args([
            "mutate",
            r#"deleteBook(id: 1) { id } addBook(name: "Again", authorId: 1) { id }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 9"#));
}

#[test]
fn test_empty_store_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "store:\n  empty: true\n");

    isolated(&temp_dir)
        .args(["query", "{ authors { id } books { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""authors": []"#))
        .stdout(predicate::str::contains(r#""books": []"#));
}

#[test]
fn test_seed_file_from_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("seed.yml"),
        "authors:\n  - id: 1\n    name: Ursula K. Le Guin\nbooks:\n  - id: 1\n    name: A Wizard of Earthsea\n    authorId: 1\n",
    )
    .unwrap();
    write_config(&temp_dir, "store:\n  seed: seed.yml\n");

    isolated(&temp_dir)
        .args(["query", "{ book(id: 1) { name author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A Wizard of Earthsea"))
        .stdout(predicate::str::contains("Ursula K. Le Guin"));
}

#[test]
fn test_seed_file_missing_field_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("seed.yml"),
        "books:\n  - id: 1\n    name: Orphan\n",
    )
    .unwrap();
    write_config(&temp_dir, "store:\n  seed: seed.yml\n");

    isolated(&temp_dir)
        .args(["query", "{ books { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book.authorId is non-null"));
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("conf");
    std::fs::create_dir_all(&config_dir).unwrap();
    let config_path = config_dir.join("custom.yml");
    std::fs::write(&config_path, "store:\n  empty: true\n").unwrap();

    isolated(&temp_dir)
        .args(["query", "{ authors { id } }", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""authors": []"#));
}
