use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::atomic::write_atomic;
use crate::schema::v1::{
    Artifacts, InputMeta, Intervention, RegionMeta, ResponseStats, SourceKind, SummaryV1, ToolMeta,
};
use crate::source;

pub fn summary_file_name(label: &str) -> String {
    format!("SAFE_ALL_SUMMARY_{label}.json")
}

pub fn build_summary(ctx: &Ctx) -> Result<SummaryV1> {
    let summary = ctx.summary.as_ref().context("response summary missing")?;
    let (kind, files) = match ctx.source.as_ref().context("incident source missing")? {
        source::SourceKind::Files(files) => (
            SourceKind::Files,
            files.iter().map(|p| p.display().to_string()).collect(),
        ),
        source::SourceKind::Synthetic => (SourceKind::Synthetic, Vec::new()),
    };

    let cohort = ctx.write_tsv.then(|| file_name(&ctx.output.tsv_path));
    let artifacts = match &ctx.artifact {
        Some(a) => Artifacts {
            report: Some(file_name(&a.document_path)),
            chart: a.chart_path.as_deref().map(file_name),
            chart_error: a.chart_error.as_ref().map(|e| e.to_string()),
            cohort,
        },
        None => Artifacts {
            report: None,
            chart: None,
            chart_error: None,
            cohort,
        },
    };

    let counts = summary.counts;
    Ok(SummaryV1 {
        tool: ToolMeta {
            name: "safeall".to_string(),
            version: ctx.tool_version.clone(),
        },
        schema_version: "v1".to_string(),
        region: RegionMeta {
            label: ctx.region.label.clone(),
            full_name: ctx.region.full_name.clone(),
        },
        input: InputMeta {
            source: kind,
            files,
            total_records: counts.total,
            unparseable_records: counts.unparseable,
            out_of_range_records: counts.out_of_range,
            analyzed_records: counts.analyzed,
        },
        response: ResponseStats {
            mean_response_minutes: summary.mean_response_minutes,
            high_risk_quantile: ctx.config.analysis.high_risk_quantile,
            high_risk_threshold_minutes: summary.high_risk_threshold_minutes,
            high_risk_cohort_size: summary.cohort_size(),
            high_risk_mean_minutes: summary.high_risk_mean_minutes,
        },
        intervention: Intervention {
            target_minutes: ctx.config.report.target_minutes,
            estimated_lives_saved: summary.estimated_lives_saved,
            survival_increase_pct: ctx.config.report.survival_increase_pct,
            estimated_cost_saving_units: summary.estimated_cost_saving_units,
        },
        artifacts,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let summary = build_summary(ctx)?;
    let bytes = serde_json::to_vec_pretty(&summary)?;
    write_atomic(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
