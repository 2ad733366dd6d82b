use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_config_file, migrate_config_file};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            check_config_file(&path)?;
        }

        if *migrate {
            if migrate_config_file(&path)? {
                success(format!("Configuration file updated: {}", path.display()));
            } else {
                info("Configuration file already up to date.");
            }
        }

        if *edit_config {
            let fallback = default_editor();
            let editor_to_use = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&editor_to_use, &path) {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
            } else {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, fallback
                ));

                if run_editor(&fallback, &path) {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        fallback
                    ));
                } else {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        fallback
                    ));
                }
            }
        }
    }

    Ok(())
}
