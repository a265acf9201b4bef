use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rust_xlsxwriter::{Format as CellFormat, Workbook};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

use crate::app::calculator::ResultTable;
use crate::app::error::ExportError;
use crate::app::i18n::{headers, Language};

const FILE_PREFIX: &str = "compound_interest_";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    #[default]
    Xlsx,
    Csv,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Xlsx => "xlsx",
            Format::Csv => "csv",
        }
    }
}

/// Wall-clock time at `offset`. The offset is looked up once at startup, since
/// `time` refuses to read it once other threads are running.
pub fn now(offset: UtcOffset) -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(offset)
}

pub fn timestamp(at: OffsetDateTime) -> Result<String, ExportError> {
    Ok(at.format(format_description!(
        "[year][month][day]_[hour][minute][second]"
    ))?)
}

/// `attempt` 0 is the plain name; later attempts get a `_<n>` suffix.
pub fn file_name(stamp: &str, format: Format, attempt: u32) -> String {
    match attempt {
        0 => format!("{FILE_PREFIX}{stamp}.{}", format.extension()),
        n => format!("{FILE_PREFIX}{stamp}_{n}.{}", format.extension()),
    }
}

/// Writes `table` into a fresh file under `dir` and returns its path.
pub fn export(
    table: ResultTable,
    lang: Language,
    format: Format,
    dir: &Path,
    at: OffsetDateTime,
) -> Result<PathBuf, ExportError> {
    let bytes = match format {
        Format::Xlsx => render_xlsx(&table, lang)?,
        Format::Csv => render_csv(&table, lang)?,
    };
    write_new(dir, &timestamp(at)?, format, &bytes)
}

fn render_xlsx(table: &ResultTable, lang: Language) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = CellFormat::new().set_bold();
    let money = CellFormat::new().set_num_format("0.00");

    for (col, header) in (0u16..).zip(headers(lang)) {
        worksheet.write_string_with_format(0, col, header, &bold)?;
    }
    for (row, record) in (1u32..).zip(table.records()) {
        worksheet.write_number(row, 0, record.day)?;
        worksheet.write_number_with_format(row, 1, f64::try_from(record.balance)?, &money)?;
        worksheet.write_number_with_format(row, 2, f64::try_from(record.interest)?, &money)?;
        worksheet.write_string(row, 3, &record.formula)?;
    }
    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

fn render_csv(table: &ResultTable, lang: Language) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers(lang))?;
    for record in table.records() {
        writer.serialize(record)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

fn write_new(dir: &Path, stamp: &str, format: Format, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    write_new_with(dir, stamp, format, |file| {
        file.write_all(bytes)?;
        file.sync_all()
    })
}

/// Never overwrites: a taken name moves on to the next suffix. A failed write
/// removes the file it created.
fn write_new_with(
    dir: &Path,
    stamp: &str,
    format: Format,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> Result<PathBuf, ExportError> {
    let (path, mut file) = create_unique(dir, stamp, format)?;
    if let Err(e) = write(&mut file) {
        drop(file);
        if let Err(rm) = fs::remove_file(&path) {
            warn!(path = %path.display(), "could not remove partial file: {rm}");
        }
        return Err(e.into());
    }
    Ok(path)
}

fn create_unique(dir: &Path, stamp: &str, format: Format) -> io::Result<(PathBuf, File)> {
    let mut attempt = 0;
    loop {
        let path = dir.join(file_name(stamp, format, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}
