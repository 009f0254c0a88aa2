use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::ResponseStatsSummary;
use crate::config::ReportConfig;
use crate::error::{ChartRenderError, ReportWriteError};
use crate::io::atomic::write_atomic;
use crate::region::Region;

pub mod chart;
pub mod document;

use chart::{Bar, BarChart, ChartRenderer, SvgRenderer};
use document::{Document, build_document, render_html};

const CURRENT_COLOR: &str = "#fa709a";
const TARGET_COLOR: &str = "#4facfe";

pub fn chart_file_name(label: &str, extension: &str) -> String {
    format!("차트_{label}_AAM효과.{extension}")
}

pub fn report_file_name(label: &str) -> String {
    format!("SAFE_ALL_REPORT_{label}.html")
}

#[derive(Debug)]
pub struct ReportArtifact {
    pub region: String,
    pub document: Document,
    pub document_path: PathBuf,
    /// `None` when the chart could not be produced; see `chart_error`.
    pub chart_path: Option<PathBuf>,
    pub chart_error: Option<ChartRenderError>,
}

/// Turns a summary into a chart file and an HTML report in `out_dir`.
///
/// Output names depend only on the region label, so a repeated run
/// replaces the previous artifacts.
pub struct ReportComposer {
    out_dir: PathBuf,
    config: ReportConfig,
    renderer: Box<dyn ChartRenderer>,
}

impl ReportComposer {
    pub fn new(out_dir: impl Into<PathBuf>, config: ReportConfig) -> Self {
        Self::with_renderer(out_dir, config, Box::new(SvgRenderer))
    }

    pub fn with_renderer(
        out_dir: impl Into<PathBuf>,
        config: ReportConfig,
        renderer: Box<dyn ChartRenderer>,
    ) -> Self {
        Self {
            out_dir: out_dir.into(),
            config,
            renderer,
        }
    }

    pub fn comparison_chart(&self, summary: &ResponseStatsSummary, region: &Region) -> BarChart {
        BarChart {
            title: format!("{} 구조시간 개선 효과", region.full_name),
            y_label: "평균 소요시간 (분)".to_string(),
            unit: "분".to_string(),
            bars: vec![
                Bar {
                    label: "기존 고위험\n구조시간".to_string(),
                    value: summary.high_risk_mean_minutes,
                    color: CURRENT_COLOR.to_string(),
                },
                Bar {
                    label: "AAM 도입 시\n목표시간".to_string(),
                    value: self.config.target_minutes,
                    color: TARGET_COLOR.to_string(),
                },
            ],
        }
    }

    pub fn compose(
        &self,
        summary: &ResponseStatsSummary,
        region: &Region,
    ) -> Result<ReportArtifact, ReportWriteError> {
        let chart = self.comparison_chart(summary, region);
        let (svg, mut chart_error) = match self.renderer.render(&chart) {
            Ok(svg) => (Some(svg), None),
            Err(err) => {
                warn!(region = %region.label, error = %err, "chart_unavailable");
                (None, Some(err))
            }
        };

        // The document lands first: a failed report write leaves no chart behind.
        let document = build_document(summary, region, &self.config, svg.as_deref());
        let document_path = self.out_dir.join(report_file_name(&region.label));
        write_atomic(&document_path, render_html(&document).as_bytes()).map_err(|source| {
            ReportWriteError {
                path: document_path.clone(),
                source,
            }
        })?;

        let mut chart_path = None;
        if let Some(svg) = &svg {
            let path = self
                .out_dir
                .join(chart_file_name(&region.label, self.renderer.extension()));
            match write_atomic(&path, svg.as_bytes()) {
                Ok(()) => chart_path = Some(path),
                Err(source) => {
                    let err = ChartRenderError::Write { path, source };
                    warn!(region = %region.label, error = %err, "chart_unavailable");
                    chart_error = Some(err);
                }
            }
        }
        info!(
            region = %region.label,
            document = %document_path.display(),
            chart = chart_path.is_some(),
            "report_written"
        );

        Ok(ReportArtifact {
            region: region.label.clone(),
            document,
            document_path,
            chart_path,
            chart_error,
        })
    }
}

pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
