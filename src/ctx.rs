use std::path::PathBuf;

use crate::analysis::ResponseStatsSummary;
use crate::config::Config;
use crate::incident::IncidentTable;
use crate::io::json_writer::summary_file_name;
use crate::io::tsv_writer::cohort_file_name;
use crate::region::Region;
use crate::report::ReportArtifact;
use crate::source::SourceKind;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// State threaded through one load → analyze → compose run.
#[derive(Debug)]
pub struct Ctx {
    pub region: Region,
    pub data_dir: PathBuf,
    /// Explicit source files; when set, the region folder is not searched.
    pub inputs: Vec<PathBuf>,
    pub allow_synthetic: bool,
    pub write_json: bool,
    pub write_tsv: bool,
    pub config: Config,
    pub tool_version: String,
    pub table: Option<IncidentTable>,
    pub source: Option<SourceKind>,
    pub summary: Option<ResponseStatsSummary>,
    pub artifact: Option<ReportArtifact>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        region: Region,
        data_dir: PathBuf,
        out_dir: PathBuf,
        config: Config,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join(summary_file_name(&region.label));
        let tsv_path = out_dir.join(cohort_file_name(&region.label));
        Self {
            region,
            data_dir,
            inputs: Vec::new(),
            allow_synthetic: true,
            write_json: false,
            write_tsv: false,
            config,
            tool_version: tool_version.to_string(),
            table: None,
            source: None,
            summary: None,
            artifact: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
        }
    }
}
