use chrono::NaiveDateTime;

use crate::error::ParseError;

pub mod synthetic;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One row as it arrives from a source: date and time components kept as
/// the raw strings found in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIncident {
    pub report_date: String,
    pub report_time: String,
    pub dispatch_date: String,
    pub dispatch_time: String,
}

impl RawIncident {
    pub fn new(
        report_date: impl Into<String>,
        report_time: impl Into<String>,
        dispatch_date: impl Into<String>,
        dispatch_time: impl Into<String>,
    ) -> Self {
        Self {
            report_date: report_date.into(),
            report_time: report_time.into(),
            dispatch_date: dispatch_date.into(),
            dispatch_time: dispatch_time.into(),
        }
    }

    /// Builds the row a source export would contain for these two instants.
    pub fn from_instants(reported_at: NaiveDateTime, dispatched_at: NaiveDateTime) -> Self {
        Self {
            report_date: reported_at.format("%Y%m%d").to_string(),
            report_time: reported_at.format("%H%M%S").to_string(),
            dispatch_date: dispatched_at.format("%Y%m%d").to_string(),
            dispatch_time: dispatched_at.format("%H%M%S").to_string(),
        }
    }

    pub fn normalize(&self) -> Result<IncidentRecord, ParseError> {
        let reported_at = parse_instant(&self.report_date, &self.report_time, Side::Report)?;
        let dispatched_at =
            parse_instant(&self.dispatch_date, &self.dispatch_time, Side::Dispatch)?;
        Ok(IncidentRecord::new(reported_at, dispatched_at))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentRecord {
    pub reported_at: NaiveDateTime,
    pub dispatched_at: NaiveDateTime,
    pub response_minutes: f64,
}

impl IncidentRecord {
    pub fn new(reported_at: NaiveDateTime, dispatched_at: NaiveDateTime) -> Self {
        let seconds = (dispatched_at - reported_at).num_seconds();
        Self {
            reported_at,
            dispatched_at,
            response_minutes: seconds as f64 / 60.0,
        }
    }
}

/// Rows for one analysis request. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentTable {
    rows: Vec<RawIncident>,
}

impl IncidentTable {
    pub fn new(rows: Vec<RawIncident>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RawIncident] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<RawIncident> for IncidentTable {
    fn from_iter<I: IntoIterator<Item = RawIncident>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Report,
    Dispatch,
}

impl Side {
    fn date_field(self) -> &'static str {
        match self {
            Side::Report => "report date",
            Side::Dispatch => "dispatch date",
        }
    }

    fn time_field(self) -> &'static str {
        match self {
            Side::Report => "report time",
            Side::Dispatch => "dispatch time",
        }
    }
}

/// Combines an 8-digit date with a time of up to 6 digits, left-padding the
/// time with zeros the way spreadsheet exports strip them.
pub fn parse_instant(date: &str, time: &str, side: Side) -> Result<NaiveDateTime, ParseError> {
    let date = date.trim();
    let time = time.trim();
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidField {
            field: side.date_field(),
            value: date.to_string(),
        });
    }
    if time.is_empty() || time.len() > 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidField {
            field: side.time_field(),
            value: time.to_string(),
        });
    }
    let stamp = format!("{date}{time:0>6}");
    NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(stamp))
}
