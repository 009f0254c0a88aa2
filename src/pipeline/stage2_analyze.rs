use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::ResponseTimeAnalyzer;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Analyze;

impl Stage2Analyze {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Analyze {
    fn name(&self) -> &'static str {
        "stage2_analyze"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.table.as_ref().context("incident table missing")?;
        let analyzer = ResponseTimeAnalyzer::new(ctx.config.analysis.clone());
        let summary = analyzer.analyze(table)?;

        let counts = summary.counts;
        let dropped = counts.unparseable + counts.out_of_range;
        if dropped > 0 {
            ctx.warnings.push(format!(
                "{} of {} records dropped ({} unparseable, {} out of range)",
                dropped, counts.total, counts.unparseable, counts.out_of_range
            ));
        }
        info!(
            analyzed = counts.analyzed,
            cohort = summary.cohort_size(),
            high_risk_mean = summary.high_risk_mean_minutes,
            "response_summary_ready"
        );
        ctx.summary = Some(summary);
        Ok(())
    }
}
