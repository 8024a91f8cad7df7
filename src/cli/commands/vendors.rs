use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::selectable_vendors;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `vendors` command: one vendor per line, sorted.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Vendors { file } = cmd {
        let session = open_session(file)?;
        let Some(upload) = session.upload() else {
            return Ok(());
        };

        let vendors = selectable_vendors(&upload.events);
        if vendors.is_empty() {
            warning("No vendor values found.");
        }
        for v in vendors {
            println!("{v}");
        }
    }
    Ok(())
}
