use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest::{DATA_SHEET, RESET_SHEET, SUMMARY_SHEET, UploadKind};
use crate::models::EventColumn;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, YELLOW, colorize_count};

/// Handle the `info` command: what was read from the upload.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Info { file } = cmd {
        let session = open_session(file)?;
        let Some(upload) = session.upload() else {
            return Ok(());
        };

        header(format!("📄 {}", upload.filename));

        let kind = match upload.kind {
            UploadKind::Csv => "CSV",
            UploadKind::Workbook => "Excel workbook",
        };
        println!("{CYAN}• Type:{RESET} {YELLOW}{kind}{RESET}");

        println!(
            "{CYAN}• {DATA_SHEET}:{RESET} {} rows",
            colorize_count(upload.events.len())
        );
        println!(
            "{CYAN}• {SUMMARY_SHEET}:{RESET} {} rows",
            colorize_count(upload.summary.len())
        );
        println!(
            "{CYAN}• {RESET_SHEET}:{RESET} {} rows",
            colorize_count(upload.reset_log.len())
        );

        println!("{CYAN}• Columns:{RESET}");
        for col in EventColumn::ALL {
            let mark = if upload.events.has_column(col) { "✔" } else { "✘" };
            println!("    {mark} {}", col.header());
        }

        if upload.events.unparsed_times > 0 {
            println!(
                "{CYAN}• Unreadable FinishTime values:{RESET} {}",
                upload.events.unparsed_times
            );
        }
    }
    Ok(())
}
