use tracing::debug;

use crate::analysis::{RecordCounts, ResponseStatsSummary};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::incident::{IncidentRecord, IncidentTable};
use crate::math::stats::{mean, quantile};

/// Turns an incident table into response-time statistics and the high-risk
/// tail cohort. Holds only its coefficients; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct ResponseTimeAnalyzer {
    config: AnalysisConfig,
}

impl ResponseTimeAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, table: &IncidentTable) -> Result<ResponseStatsSummary, AnalysisError> {
        let (records, counts) = self.normalize_and_filter(table);
        if records.is_empty() {
            return Err(AnalysisError::NoAnalyzableData {
                total: counts.total,
                unparseable: counts.unparseable,
                out_of_range: counts.out_of_range,
                max_minutes: self.config.max_response_minutes,
            });
        }

        let mut minutes: Vec<f64> = records.iter().map(|r| r.response_minutes).collect();
        let overall_mean = mean(&minutes).unwrap_or_default();
        let threshold = quantile(&mut minutes, self.config.high_risk_quantile)
            .unwrap_or(overall_mean);

        let mut cohort: Vec<IncidentRecord> = records
            .iter()
            .filter(|r| r.response_minutes >= threshold)
            .copied()
            .collect();
        if cohort.is_empty() {
            // Never hand back an empty cohort for a non-empty set.
            cohort = records;
        }

        let cohort_minutes: Vec<f64> = cohort.iter().map(|r| r.response_minutes).collect();
        let cohort_mean = mean(&cohort_minutes).unwrap_or(overall_mean);
        let lives_saved = lives_saved(cohort.len(), self.config.lives_saved_fraction);
        let cost_saving = lives_saved as f64 * self.config.cost_per_life_units;

        debug!(
            analyzed = counts.analyzed,
            cohort = cohort.len(),
            threshold,
            "response_stats_ready"
        );

        Ok(ResponseStatsSummary {
            counts,
            mean_response_minutes: overall_mean,
            high_risk_threshold_minutes: threshold,
            high_risk_cohort: cohort,
            high_risk_mean_minutes: cohort_mean,
            estimated_lives_saved: lives_saved,
            estimated_cost_saving_units: cost_saving,
        })
    }

    /// Builds instants for every row and keeps those whose response time
    /// lies inside `[0, max_response_minutes]`. Bad rows are counted, not fatal.
    pub fn normalize_and_filter(&self, table: &IncidentTable) -> (Vec<IncidentRecord>, RecordCounts) {
        let mut counts = RecordCounts {
            total: table.len(),
            ..RecordCounts::default()
        };
        let mut kept = Vec::with_capacity(table.len());
        for (i, row) in table.rows().iter().enumerate() {
            let record = match row.normalize() {
                Ok(r) => r,
                Err(err) => {
                    debug!(row = i, error = %err, "row_dropped_unparseable");
                    counts.unparseable += 1;
                    continue;
                }
            };
            if !self.in_window(record.response_minutes) {
                debug!(
                    row = i,
                    minutes = record.response_minutes,
                    "row_dropped_out_of_range"
                );
                counts.out_of_range += 1;
                continue;
            }
            kept.push(record);
        }
        counts.analyzed = kept.len();
        (kept, counts)
    }

    fn in_window(&self, minutes: f64) -> bool {
        (0.0..=self.config.max_response_minutes).contains(&minutes)
    }
}

/// Floor, not round: a fractional life is not claimed.
pub fn lives_saved(cohort_size: usize, fraction: f64) -> u64 {
    (cohort_size as f64 * fraction).floor() as u64
}
