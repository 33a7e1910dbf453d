use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
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
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `punchclock init` first",
                    path.display()
                )));
            }

            let fallback = default_editor();
            let wanted = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&wanted, &path) {
                success(format!("Configuration edited with '{}'", wanted));
            } else {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    wanted, fallback
                ));
                if !run_editor(&fallback, &path) {
                    return Err(AppError::Config(format!(
                        "failed to edit configuration with '{}'",
                        fallback
                    )));
                }
                success(format!("Configuration edited with '{}'", fallback));
            }
        }
    }

    Ok(())
}
