use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values merged over defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL or a platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{editor_to_use}'"));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .ok()
                    .filter(|s| s.success())
                    .map(|_| success(format!("Configuration file edited using '{default_editor}'")))
                    .ok_or_else(|| {
                        AppError::Config(format!("failed to run editor '{default_editor}'"))
                    })
            }
            _ => Err(AppError::Config(format!(
                "failed to run editor '{editor_to_use}'"
            ))),
        }
    }
}
