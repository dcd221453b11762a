use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no question on stdin. Anything but y/yes (including EOF) is a no.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Check whether a file can be created or overwritten.
///
/// - missing file: Ok
/// - existing file with `force`: Ok
/// - existing file without `force`: ask the user
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
