pub mod chart;
pub mod config;
pub mod export;
pub mod image;
pub mod info;
pub mod init;
pub mod programs;
pub mod summary;
pub mod vendors;

use crate::core::Session;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Open a session on the uploaded file given with `--file`.
pub(crate) fn open_session(file: &str) -> AppResult<Session> {
    let mut session = Session::new();
    session.load_file(&expand_tilde(file))?;
    Ok(session)
}
