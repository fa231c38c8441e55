use clap::Args;
use launchboard::config::ServerParams;
use launchboard::dataset::Dataset;
use launchboard::server::{self, AppState};

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub server: ServerParams,
}

pub async fn run(args: ServeArgs, dataset: Dataset) -> anyhow::Result<()> {
    println!(
        "\n🛰️  Serving {} launch records from {} sites",
        dataset.len(),
        dataset.distinct_sites().len()
    );

    let state = AppState::new(dataset);
    server::serve(state, args.server.addr()).await?;
    Ok(())
}
