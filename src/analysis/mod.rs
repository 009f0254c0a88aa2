pub mod response;

use crate::incident::IncidentRecord;

pub use response::ResponseTimeAnalyzer;

/// What survived normalization and the sanity window, and what did not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCounts {
    pub total: usize,
    pub unparseable: usize,
    pub out_of_range: usize,
    pub analyzed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseStatsSummary {
    pub counts: RecordCounts,
    pub mean_response_minutes: f64,
    pub high_risk_threshold_minutes: f64,
    pub high_risk_cohort: Vec<IncidentRecord>,
    pub high_risk_mean_minutes: f64,
    pub estimated_lives_saved: u64,
    pub estimated_cost_saving_units: f64,
}

impl ResponseStatsSummary {
    pub fn cohort_size(&self) -> usize {
        self.high_risk_cohort.len()
    }
}
