use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

use crate::cli::parser::Commands;
use std::process::Command;

/// Editor used when neither --editor nor $EDITOR/$VISUAL is set.
fn platform_editor() -> String {
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

fn run_editor(editor: &str) -> bool {
    Command::new(editor)
        .arg(Config::config_file())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !Config::config_file().exists() {
                warning("No configuration file yet: run `rcalgrab init` first.");
                return Ok(());
            }

            let default_editor = platform_editor();
            // Se l'utente ha passato --editor, usiamo quello
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use) {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
            } else if editor_to_use != default_editor && run_editor(&default_editor) {
                warning(format!(
                    "Editor '{editor_to_use}' not available, used fallback '{default_editor}'"
                ));
            } else {
                error(format!(
                    "Failed to edit configuration file with '{editor_to_use}'"
                ));
            }
        }
    }

    Ok(())
}
