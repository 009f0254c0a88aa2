use anyhow::{Result, anyhow};

use crate::ctx::Ctx;
use crate::source::SourceKind;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = &ctx.tool_version;
    let summary = ctx
        .summary
        .as_ref()
        .ok_or_else(|| anyhow!("response summary missing"))?;
    let counts = summary.counts;
    let source = match &ctx.source {
        Some(SourceKind::Files(files)) => format!("{} file(s)", files.len()),
        Some(SourceKind::Synthetic) => "synthetic".to_string(),
        None => "unknown".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("safeall v{}\n", version));
    out.push_str(&format!(
        "Region: {} ({})\n",
        ctx.region.label, ctx.region.full_name
    ));
    out.push_str(&format!(
        "Input: {} records, {} analyzed, source={}\n",
        counts.total, counts.analyzed, source
    ));
    out.push_str(&format!(
        "High-risk: {} incidents >= {:.1} min, mean {:.1} min\n",
        summary.cohort_size(),
        summary.high_risk_threshold_minutes,
        summary.high_risk_mean_minutes
    ));
    out.push_str(&format!(
        "Intervention: target {:.1} min, lives saved {}, survival +{}%, cost saving {:.0}\n",
        ctx.config.report.target_minutes,
        summary.estimated_lives_saved,
        ctx.config.report.survival_increase_pct,
        summary.estimated_cost_saving_units
    ));

    if let Some(artifact) = &ctx.artifact {
        out.push_str(&format!("Report: {}\n", artifact.document_path.display()));
        match (&artifact.chart_path, &artifact.chart_error) {
            (Some(path), _) => out.push_str(&format!("Chart: {}\n", path.display())),
            (None, Some(err)) => out.push_str(&format!("Chart: unavailable ({})\n", err)),
            (None, None) => out.push_str("Chart: unavailable\n"),
        }
    }
    if ctx.write_tsv {
        out.push_str(&format!("Cohort: {}\n", ctx.output.tsv_path.display()));
    }
    if ctx.write_json {
        out.push_str(&format!("Summary: {}\n", ctx.output.json_path.display()));
    }

    Ok(out)
}
