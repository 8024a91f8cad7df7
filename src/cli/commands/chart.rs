use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::render_bars;

/// Handle the `chart` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        file,
        by,
        vendor,
        program,
    } = cmd
    {
        let mut session = open_session(file)?;
        let selection = session.select(vendor.as_deref(), program.as_deref())?;
        let series = session.chart(*by)?;

        header(format!("📈 {} ({selection})", series.title));
        if series.is_empty() {
            info("Nothing to chart for this selection.");
        } else {
            print!("{}", render_bars(&series, cfg.chart_width));
        }
    }
    Ok(())
}
