use std::path::Path;

use crate::error::SourceError;
use crate::incident::{IncidentTable, RawIncident};
use crate::io::open_maybe_gz;

pub const REPORT_DATE: &str = "DCLR_YMD";
pub const REPORT_TIME: &str = "DCLR_TM";
pub const DISPATCH_DATE: &str = "DSPT_YMD";
pub const DISPATCH_TIME: &str = "DSPT_TM";

const REQUIRED: [&str; 4] = [REPORT_DATE, REPORT_TIME, DISPATCH_DATE, DISPATCH_TIME];

/// Reads the four timestamp columns of one export.
///
/// Header matching ignores case and surrounding whitespace. Field bytes are
/// decoded lossily, so legacy non-UTF-8 exports still yield their ASCII
/// digit columns.
pub fn read_incidents(path: &Path) -> Result<Vec<RawIncident>, SourceError> {
    let read_err = |source: csv::Error| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };
    let reader = open_maybe_gz(path).map_err(|e| read_err(csv::Error::from(e)))?;
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.byte_headers().map_err(read_err)?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let names: Vec<String> = headers
        .iter()
        .map(|h| {
            String::from_utf8_lossy(h)
                .trim()
                .trim_start_matches('\u{feff}')
                .to_ascii_uppercase()
        })
        .collect();

    let mut idx = [0usize; 4];
    let mut missing = Vec::new();
    for (slot, col) in idx.iter_mut().zip(REQUIRED) {
        match names.iter().position(|n| n == col) {
            Some(i) => *slot = i,
            None => missing.push(col.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(SourceError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut rows = Vec::new();
    for record in rdr.byte_records() {
        let record = record.map_err(read_err)?;
        let field = |i: usize| {
            record
                .get(i)
                .map(|b| String::from_utf8_lossy(b).trim().to_string())
                .unwrap_or_default()
        };
        rows.push(RawIncident::new(
            field(idx[0]),
            field(idx[1]),
            field(idx[2]),
            field(idx[3]),
        ));
    }
    Ok(rows)
}

/// Writes a table in the export layout `read_incidents` accepts.
pub fn write_incidents(path: &Path, table: &IncidentTable) -> Result<(), csv::Error> {
    let mut buf = csv::Writer::from_writer(Vec::new());
    buf.write_record(REQUIRED)?;
    for row in table.rows() {
        buf.write_record([
            &row.report_date,
            &row.report_time,
            &row.dispatch_date,
            &row.dispatch_time,
        ])?;
    }
    let bytes = buf.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    crate::io::atomic::write_atomic(path, &bytes)?;
    Ok(())
}
