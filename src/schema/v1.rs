use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Files,
    Synthetic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionMeta {
    pub label: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub source: SourceKind,
    pub files: Vec<String>,
    pub total_records: usize,
    pub unparseable_records: usize,
    pub out_of_range_records: usize,
    pub analyzed_records: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseStats {
    pub mean_response_minutes: f64,
    pub high_risk_quantile: f64,
    pub high_risk_threshold_minutes: f64,
    pub high_risk_cohort_size: usize,
    pub high_risk_mean_minutes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervention {
    pub target_minutes: f64,
    pub estimated_lives_saved: u64,
    pub survival_increase_pct: u32,
    pub estimated_cost_saving_units: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifacts {
    pub report: Option<String>,
    pub chart: Option<String>,
    pub chart_error: Option<String>,
    pub cohort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryV1 {
    pub tool: ToolMeta,
    pub schema_version: String,
    pub region: RegionMeta,
    pub input: InputMeta,
    pub response: ResponseStats,
    pub intervention: Intervention,
    pub artifacts: Artifacts,
    pub warnings: Vec<String>,
}
