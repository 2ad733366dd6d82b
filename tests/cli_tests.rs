use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{hl, init_db, init_db_with_habits, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    hl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_relative_db_is_shared_by_init_and_other_commands() {
    let name = "cli_relative_db.sqlite";
    let cwd = std::env::temp_dir().join("habitlog_test_cwd");
    fs::create_dir_all(&cwd).expect("create cwd");
    fs::remove_file(cwd.join(name)).ok();

    let in_config_dir = std::env::temp_dir()
        .join("habitlog_test_home")
        .join(".habitlog")
        .join(name);
    fs::remove_file(&in_config_dir).ok();

    hl().current_dir(&cwd)
        .args(["--db", name, "--test", "init"])
        .assert()
        .success();

    hl().current_dir(&cwd)
        .args(["--db", name, "--user", "alice", "add", "Stretch"])
        .assert()
        .success();

    hl().current_dir(&cwd)
        .args(["--db", name, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Stretch"));

    assert!(in_config_dir.exists());
    assert!(!cwd.join(name).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Drink water 8 cups"))
        .stdout(contains("Stretch"))
        .stdout(contains("STREAK"));
}

#[test]
fn test_list_is_per_user() {
    let db_path = setup_test_db("cli_list_per_user");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "bob", "list"])
        .assert()
        .success()
        .stdout(contains("No habits yet for bob"))
        .stdout(contains("Stretch").not());
}

#[test]
fn test_done_increments_and_repeats() {
    let db_path = setup_test_db("cli_done_increment");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "done", "1", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("streak started: 1"));

    hl().args(["--db", &db_path, "--user", "alice", "done", "1", "--date", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("streak: 2"));

    hl().args(["--db", &db_path, "--user", "alice", "done", "1", "--date", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("already done"))
        .stdout(contains("stays at 2"));

    hl().args(["--db", &db_path, "--user", "alice", "show", "1"])
        .assert()
        .success()
        .stdout(contains("2024-01-02"));
}

#[test]
fn test_done_after_gap_resets() {
    let db_path = setup_test_db("cli_done_reset");
    init_db_with_habits(&db_path);

    for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        hl().args(["--db", &db_path, "--user", "alice", "done", "2", "--date", date])
            .assert()
            .success();
    }

    hl().args(["--db", &db_path, "--user", "alice", "done", "2", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("streak reset to 1"));
}

#[test]
fn test_done_without_date_uses_today() {
    let db_path = setup_test_db("cli_done_today");
    init_db_with_habits(&db_path);

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    hl().args(["--db", &db_path, "--user", "alice", "done", "1"])
        .assert()
        .success()
        .stdout(contains(today.as_str()));
}

#[test]
fn test_done_rejects_bad_date() {
    let db_path = setup_test_db("cli_done_bad_date");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "done", "1", "--date", "01/02/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_done_on_other_users_habit_fails() {
    let db_path = setup_test_db("cli_done_other_user");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "bob", "done", "1", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Could not update habit #1"))
        .stderr(contains("Habit #1 not found"));
}

#[test]
fn test_del_with_yes() {
    let db_path = setup_test_db("cli_del");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Habit #2 has been deleted"));

    hl().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Stretch").not());
}

#[test]
fn test_del_declined_keeps_habit() {
    let db_path = setup_test_db("cli_del_declined");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    hl().args(["--db", &db_path, "--user", "alice", "show", "2"])
        .assert()
        .success()
        .stdout(contains("Stretch"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "done", "1", "--date", "2024-02-10"])
        .assert()
        .success();

    let csv_out = temp_out("cli_export", "csv");
    hl().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &csv_out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("id,owner,label,last_completed,streak,created_at"));
    assert!(content.contains("Drink water 8 cups"));
    assert!(content.contains("2024-02-10"));

    let json_out = temp_out("cli_export", "json");
    hl().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "json", "--file", &json_out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(2));
    assert_eq!(rows[0]["streak"], 1);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("cli_export_overwrite");
    init_db_with_habits(&db_path);

    let out = temp_out("cli_export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    hl().args(["--db", &db_path, "--user", "alice", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    hl().args(["--db", &db_path, "--user", "alice", "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("Stretch"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "--user", "alice", "done", "1", "--date", "2024-01-01"])
        .assert()
        .success();

    hl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("habit #1"))
        .stdout(contains("streak 0 → 1 (started)"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("cli_backup");
    init_db(&db_path);

    let out = temp_out("cli_backup", "sqlite");
    hl().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&out).exists());

    let zip_out = temp_out("cli_backup", "zip");
    hl().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();
    assert!(std::path::Path::new(&zip_out).exists());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_habits(&db_path);

    hl().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Habits:"))
        .stdout(contains("Integrity check passed"));
}
