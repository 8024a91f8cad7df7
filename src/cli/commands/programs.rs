use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::selectable_programs;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `programs` command for the given (or default) vendor.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Programs { file, vendor } = cmd {
        let mut session = open_session(file)?;
        let selection = session.select(vendor.as_deref(), None)?;

        info(format!("Programs for vendor {}", selection.vendor));

        if let Some(upload) = session.upload() {
            for p in selectable_programs(&upload.events, &selection.vendor) {
                println!("{p}");
            }
        }
    }
    Ok(())
}
