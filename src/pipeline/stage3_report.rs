use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::report::ReportComposer;

pub struct Stage3Report;

impl Stage3Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Report {
    fn name(&self) -> &'static str {
        "stage3_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let summary = ctx.summary.as_ref().context("response summary missing")?;
        let composer = ReportComposer::new(&ctx.output.out_dir, ctx.config.report.clone());
        let artifact = composer.compose(summary, &ctx.region)?;
        if let Some(err) = &artifact.chart_error {
            ctx.warnings.push(format!("chart omitted from report: {}", err));
        }
        info!(document = %artifact.document_path.display(), "report_ready");
        ctx.artifact = Some(artifact);
        Ok(())
    }
}
