use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::error::SourceError;
use crate::incident::synthetic;
use crate::pipeline::Stage;
use crate::source::{self, SourceKind};

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let paths = if ctx.inputs.is_empty() {
            source::locate(&ctx.data_dir, &ctx.region)
        } else {
            ctx.inputs.clone()
        };
        info!(
            region = %ctx.region.label,
            candidates = paths.len(),
            "incident_sources_located"
        );

        let loaded = source::load(&paths)?;
        ctx.warnings.extend(loaded.warnings);

        if !loaded.table.is_empty() {
            info!(rows = loaded.table.len(), "incident_table_ready");
            ctx.table = Some(loaded.table);
            ctx.source = Some(SourceKind::Files(loaded.files));
            return Ok(());
        }

        // Explicit inputs that yield nothing are a source error, never a demo run.
        if !ctx.allow_synthetic || !ctx.inputs.is_empty() {
            return Err(SourceError::NotFound {
                region: ctx.region.label.clone(),
            }
            .into());
        }

        warn!(
            region = %ctx.region.label,
            "no incident source found; falling back to synthetic data"
        );
        ctx.warnings.push(format!(
            "no incident data found for {}; using synthetic demo data",
            ctx.region.label
        ));
        let table = synthetic::generate(&ctx.region);
        info!(rows = table.len(), "incident_table_ready");
        ctx.table = Some(table);
        ctx.source = Some(SourceKind::Synthetic);
        Ok(())
    }
}
