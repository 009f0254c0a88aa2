use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::io::atomic::write_atomic;

const TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

pub fn cohort_file_name(label: &str) -> String {
    format!("SAFE_ALL_COHORT_{label}.tsv")
}

/// One row per high-risk incident, slowest first.
pub fn write_cohort_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let summary = ctx.summary.as_ref().context("response summary missing")?;

    let mut cohort = summary.high_risk_cohort.clone();
    for rec in &cohort {
        if rec.response_minutes.is_nan() {
            bail!("NaN encountered in high-risk cohort");
        }
    }
    cohort.sort_by(|a, b| {
        b.response_minutes
            .total_cmp(&a.response_minutes)
            .then(a.reported_at.cmp(&b.reported_at))
    });

    let mut out = String::new();
    writeln!(out, "rank\treported_at\tdispatched_at\tresponse_minutes")?;
    for (i, rec) in cohort.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{:.1}",
            i + 1,
            rec.reported_at.format(TIMESTAMP),
            rec.dispatched_at.format(TIMESTAMP),
            rec.response_minutes
        )?;
    }

    write_atomic(path, out.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
