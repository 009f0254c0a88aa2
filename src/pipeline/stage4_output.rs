use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage4Output;

impl Stage4Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Output {
    fn name(&self) -> &'static str {
        "stage4_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.write_tsv {
            let path = ctx.output.tsv_path.clone();
            tsv_writer::write_cohort_tsv(&path, ctx)?;
            info!(path = %path.display(), "cohort_tsv_written");
        }
        if ctx.write_json {
            let path = ctx.output.json_path.clone();
            json_writer::write_json(&path, ctx)?;
            info!(path = %path.display(), "summary_json_written");
        }
        info!("stage4_output_ready");
        Ok(())
    }
}
