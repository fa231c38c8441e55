use crate::reports::{self, TableRenderer};
use clap::Args;
use launchboard::binding::RenderTarget;
use launchboard::config::FilterArgs;
use launchboard::dataset::Dataset;
use launchboard::derive::{outcome_proportion, payload_correlation};

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Also list every scatter point
    #[arg(long, default_value_t = false)]
    pub points: bool,
}

pub fn run(args: ReportArgs, dataset: &Dataset) -> anyhow::Result<()> {
    let state = args.filter.resolve(dataset)?;

    println!("\n📊 === LAUNCH REPORT === 📊");
    reports::print_dataset_summary(dataset, &state);

    let mut renderer = TableRenderer::new(args.points);
    renderer.render_proportion(&outcome_proportion(dataset, &state.site));
    renderer.render_correlation(&payload_correlation(
        dataset,
        &state.site,
        &state.payload_range,
    ));
    Ok(())
}
