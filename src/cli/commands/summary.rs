use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartKind;
use crate::core::images::ResolvedImage;
use crate::errors::AppResult;
use crate::models::{AggregateResult, FilterSelection};
use crate::ui::messages::{header, info, warning};
use crate::utils::formatting::{bold, format_avg, format_period, render_bars};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// Handle the `summary` command: period banner, KPIs, optional chart, image.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        file,
        vendor,
        program,
        zips,
        images_dir,
        chart,
    } = cmd
    {
        let mut session = open_session(file)?;
        let selection = session.select(vendor.as_deref(), program.as_deref())?;
        let result = session.summary()?;

        print_selection(&selection);
        print_period(&result, &cfg.period_format);
        print_kpis(&result);

        if *chart || cfg.show_chart {
            let series = session.chart(ChartKind::Month)?;
            header(format!("📈 {}", series.title));
            if series.is_empty() {
                info("No dated maintenances to chart.");
            } else {
                print!("{}", render_bars(&series, cfg.chart_width));
            }
        }

        session.attach_archives(zips.as_slice())?;
        let local = images_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.images_path());
        let image = session.image(Some(local.as_path()), &cfg.image_extensions)?;
        print_image(&selection, image.as_ref());
    }
    Ok(())
}

fn print_selection(selection: &FilterSelection) {
    println!(
        "{} {}   {} {}",
        bold("Vendor:"),
        selection.vendor,
        bold("Program:"),
        selection.program
    );
}

fn print_period(result: &AggregateResult, date_format: &str) {
    match format_period(result, date_format) {
        Some(period) => println!("🗓️  Period analyzed: {period}"),
        None => warning("No valid FinishTime values for this selection."),
    }
}

fn print_kpis(result: &AggregateResult) {
    header("📊 Overview");

    let mut table = Table::new(vec![Column::left("KPI"), Column::right("Value")]);
    table.add_row(vec![
        "Maintenances".into(),
        result.maintenance_count.to_string(),
    ]);
    table.add_row(vec!["Resets / Updates".into(), result.reset_count.to_string()]);
    table.add_row(vec!["Stores".into(), result.store_count.to_string()]);
    table.add_row(vec!["Bays".into(), result.bay_count.to_string()]);
    table.add_row(vec!["Avg. per Bay".into(), format_avg(result.avg_per_bay)]);

    print!("{}", table.render());
}

fn print_image(selection: &FilterSelection, image: Option<&ResolvedImage>) {
    header("🖼️  Bay Image");
    match image {
        Some(img) => println!(
            "{} ({} bytes) {}",
            img.filename,
            img.bytes.len(),
            img.path.display()
        ),
        None => info(format!(
            "No image found for program '{}'.",
            selection.program
        )),
    }
}
