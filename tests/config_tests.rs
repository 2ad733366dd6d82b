use habitlog::config::Config;
use habitlog::config::migrate::{migrate_config_file, missing_fields, unknown_fields};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("{}_habitlog.conf", name));
    fs::write(&path, content).expect("write conf");
    path
}

#[test]
fn complete_file_has_nothing_missing() {
    let path = temp_conf(
        "cfg_complete",
        "database: /tmp/h.sqlite\ndefault_user: alice\nseparator_char: '='\ndate_format: '%d/%m/%Y'\n",
    );

    assert!(missing_fields(&path).expect("check").is_empty());
    assert!(unknown_fields(&path).expect("check").is_empty());
    assert!(!migrate_config_file(&path).expect("migrate"));

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.default_user, "alice");
    assert_eq!(cfg.separator(), '=');
}

#[test]
fn old_file_is_migrated_with_defaults() {
    let path = temp_conf(
        "cfg_old",
        "database: /tmp/h.sqlite\ndefault_user: bob\nshow_weekday: None\n",
    );

    assert_eq!(
        missing_fields(&path).expect("check"),
        vec!["separator_char", "date_format"]
    );
    assert_eq!(unknown_fields(&path).expect("check"), vec!["show_weekday"]);

    assert!(migrate_config_file(&path).expect("migrate"));

    assert!(missing_fields(&path).expect("check").is_empty());
    assert!(unknown_fields(&path).expect("check").is_empty());

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.database, "/tmp/h.sqlite");
    assert_eq!(cfg.default_user, "bob");
    assert_eq!(cfg.separator_char, "-");
    assert_eq!(cfg.date_format, "%Y-%m-%d");
}

#[test]
fn invalid_yaml_is_a_config_error() {
    let path = temp_conf("cfg_invalid", "database: [unclosed\n");
    assert!(Config::load_from(&path).is_err());
    assert!(missing_fields(&path).is_err());
}
