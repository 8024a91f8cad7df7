use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::require_absolute;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        vendor,
        program,
        force,
    } = cmd
    {
        let path = require_absolute(out)?;
        let mut session = open_session(file)?;

        let selection = match vendor {
            Some(v) => Some(session.select(Some(v.as_str()), program.as_deref())?),
            None => None,
        };

        if let Some(upload) = session.upload() {
            let rows = ExportLogic::build_rows(upload, selection.as_ref());
            ExportLogic::export(&rows, *format, &path, *force)?;
        }
    }
    Ok(())
}
