// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Un file di output è scrivibile se non esiste, se c'è `--force`,
/// oppure se l'utente conferma la sovrascrittura.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let stdin = io::stdin();
    if confirm_overwrite(path, &mut stdin.lock())? {
        info(format!("Replacing {}", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "{} already exists, rerun with --force to replace it",
        path.display()
    )))
}

/// Ask on stdout, read one answer from `input`. End of input means no.
fn confirm_overwrite(path: &Path, input: &mut impl BufRead) -> io::Result<bool> {
    print!("{} already exists. Replace it? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        println!();
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "si"
    ))
}
