#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub fn rsb() -> Command {
    cargo_bin_cmd!("resetboard")
}

/// Command with a config path that does not exist, so defaults are used.
pub fn rsb_in(dir: &Path) -> Command {
    let mut cmd = rsb();
    cmd.arg("--config").arg(dir.join("resetboard.conf"));
    cmd
}

pub const SCENARIO_CSV: &str = "\
Vendor,Program,Store,bay number,FinishTime
V1,P1,S1,B1,10/01/2024
V1,P1,S2,B1,15/01/2024
V1,P2,S1,B2,01/02/2024
";

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// A cell of a fixture sheet.
pub enum Xl<'a> {
    Text(&'a str),
    Date(u16, u8, u8),
    Empty,
}

fn add_sheet(wb: &mut Workbook, name: &str, headers: &[&str], rows: &[Vec<Xl>]) {
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd hh:mm");
    let ws = wb.add_worksheet();
    ws.set_name(name).expect("sheet name");

    for (c, h) in headers.iter().enumerate() {
        ws.write(0, c as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Xl::Text(s) => {
                    ws.write(r, c, *s).expect("write text");
                }
                Xl::Date(y, m, d) => {
                    let dt = ExcelDateTime::from_ymd(*y, *m, *d).expect("date");
                    ws.write_datetime_with_format(r, c, &dt, &date_fmt)
                        .expect("write date");
                }
                Xl::Empty => {}
            }
        }
    }
}

pub struct Sheet<'a> {
    pub name: &'a str,
    pub headers: &'a [&'a str],
    pub rows: Vec<Vec<Xl<'a>>>,
}

pub fn write_workbook(dir: &Path, name: &str, sheets: &[Sheet]) -> PathBuf {
    let mut wb = Workbook::new();
    for s in sheets {
        add_sheet(&mut wb, s.name, s.headers, &s.rows);
    }
    let path = dir.join(name);
    wb.save(&path).expect("save workbook");
    path
}

/// Workbook with the three dashboard sheets.
pub fn dashboard_workbook(dir: &Path, name: &str) -> PathBuf {
    use Xl::*;
    write_workbook(
        dir,
        name,
        &[
            Sheet {
                name: "Data",
                headers: &["Vendor", "Program", "Store", "bay number", "FinishTime"],
                rows: vec![
                    vec![Text(" acme "), Text("Shelf"), Text("s1"), Text("b1"), Date(2024, 3, 5)],
                    vec![Text("ACME"), Text("shelf "), Text("S2"), Text("B2"), Date(2024, 4, 20)],
                    vec![Text("Acme"), Text("Freezer"), Text("S1"), Text("B9"), Text("15/01/2024 08:00")],
                    vec![Text("Globex"), Text("Shelf"), Text("S3"), Empty, Text("not a date")],
                ],
            },
            Sheet {
                name: "Summary",
                headers: &["Vendor", "Total"],
                rows: vec![vec![Text("ACME"), Text("3")]],
            },
            Sheet {
                name: "Reset_Update",
                headers: &["Vendor", "Program", "Store"],
                rows: vec![
                    vec![Text("acme"), Text(" shelf"), Text("S1")],
                    vec![Text("ACME "), Text("SHELF"), Text("S2")],
                    vec![Text("Acme"), Text("Freezer"), Text("S1")],
                    vec![Text("Globex"), Text("Shelf"), Text("S3")],
                ],
            },
        ],
    )
}

pub fn write_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).expect("create zip");
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (entry, content) in files {
        zip.start_file(*entry, options.clone()).expect("start zip entry");
        zip.write_all(content).expect("write zip entry");
    }
    zip.finish().expect("finish zip");
    path
}
