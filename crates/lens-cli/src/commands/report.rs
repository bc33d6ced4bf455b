use std::path::Path;

use anyhow::Context;
use lens_config::LensConfig;
use lens_report::ReportPipeline;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::loader::DatasetSource;
use crate::output;

/// Handle `lens report`.
pub fn handle(args: &ReportArgs, flags: &GlobalFlags, config: &LensConfig) -> anyhow::Result<()> {
    let options = config.report.to_options()?;
    let pipeline = ReportPipeline::new(options).context("failed to prepare report pipeline")?;

    let source = DatasetSource::select(args.input.as_deref(), &config.general);
    let dataset = source.load()?;
    let report = pipeline
        .run(&dataset)
        .with_context(|| format!("cannot build report from {}", source.path().display()))?;

    match &args.output {
        Some(path) => output::write_to(&report, Path::new(path), flags.format, config.general.pretty),
        None => output::output(&report, flags.format, config.general.pretty),
    }
}
