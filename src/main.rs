use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use safeall::cli::{Cli, Commands, RunArgs, SourceArgs, SynthArgs, ValidateArgs};
use safeall::config::Config;
use safeall::ctx::Ctx;
use safeall::error::{AnalysisError, ConfigError, RegionError, ReportWriteError, SourceError};
use safeall::incident::synthetic;
use safeall::io;
use safeall::pipeline::Pipeline;
use safeall::pipeline::stage0_scaffold::Stage0Scaffold;
use safeall::pipeline::stage1_input::Stage1Input;
use safeall::pipeline::stage2_analyze::Stage2Analyze;
use safeall::pipeline::stage3_report::Stage3Report;
use safeall::pipeline::stage4_output::Stage4Output;
use safeall::region::Region;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", describe(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run(args),
        Commands::Validate(args) => validate(args),
        Commands::Synth(args) => synth(args),
        Commands::Regions => {
            print_regions();
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut ctx = build_ctx(&args.source, args.out)?;
    ctx.write_json = args.json;
    ctx.write_tsv = args.tsv;

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Input::new()),
        Box::new(Stage2Analyze::new()),
        Box::new(Stage3Report::new()),
        Box::new(Stage4Output::new()),
    ]);
    pipeline.run(&mut ctx)?;

    print_summary(&ctx)
}

fn validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = build_ctx(&args.source, PathBuf::from("."))?;
    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Analyze::new()),
    ]);
    pipeline.run(&mut ctx)?;

    print_validate_summary(&ctx)
}

fn synth(args: SynthArgs) -> Result<()> {
    let region = Region::resolve(&args.region)?;
    let table = synthetic::generate(&region);
    io::incidents::write_incidents(&args.out, &table)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    println!(
        "wrote {} synthetic incidents for {} to {}",
        table.len(),
        region.label,
        args.out.display()
    );
    Ok(())
}

fn build_ctx(source: &SourceArgs, out_dir: PathBuf) -> Result<Ctx> {
    let region = Region::resolve(&source.region)?;
    let config = Config::load_or_default(source.config.as_deref())?;
    let mut ctx = Ctx::new(
        region,
        source.data_dir.clone(),
        out_dir,
        config,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.inputs = source.input.clone();
    ctx.allow_synthetic = !source.no_synthetic;
    Ok(ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let summary = ctx.summary.as_ref().context("response summary missing")?;
    let counts = summary.counts;
    println!("safeall validate ok");
    println!("records: {}", counts.total);
    println!("unparseable: {}", counts.unparseable);
    println!("out_of_range: {}", counts.out_of_range);
    println!("analyzed: {}", counts.analyzed);
    println!("high_risk: {}", summary.cohort_size());
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in warnings {
            println!("- {}", warning);
        }
    }
}

fn print_regions() {
    println!("regions:");
    for region in Region::builtin() {
        let folder = region.folder.as_deref().unwrap_or("-");
        println!(
            "{}\t{}\t{:.0}\t{}",
            region.label, region.full_name, region.base_minutes, folder
        );
    }
}

/// Picks the message for the most specific failure in the chain.
fn describe(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<AnalysisError>() {
        return format!("{e}; supply a source with valid report and dispatch timestamps");
    }
    if let Some(e) = err.downcast_ref::<ReportWriteError>() {
        return format!("{e}; check that the output directory is writable");
    }
    if let Some(e) = err.downcast_ref::<SourceError>() {
        return match e {
            SourceError::NotFound { .. } => {
                format!("{e}; pass --input or drop --no-synthetic")
            }
            _ => e.to_string(),
        };
    }
    format!("{err:#}")
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<AnalysisError>().is_some() {
        2
    } else if err.downcast_ref::<ReportWriteError>().is_some() {
        3
    } else if err.downcast_ref::<SourceError>().is_some() {
        4
    } else if err.downcast_ref::<ConfigError>().is_some()
        || err.downcast_ref::<RegionError>().is_some()
    {
        5
    } else {
        1
    }
}
