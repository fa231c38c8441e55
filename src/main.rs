use clap::{Parser, Subcommand};
use launchboard::config::DataSource;
use launchboard::dataset::Dataset;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    source: DataSource,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the interactive dashboard
    Serve(cmd::serve::ServeArgs),
    /// Print both charts for one filter state as tables
    Report(cmd::report::ReportArgs),
    /// List the site dropdown options
    Sites,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    // The whole dashboard hangs off the dataset: no dataset, no process.
    let dataset = Dataset::load(&cli.source.data).unwrap_or_else(|e| {
        eprintln!("\n❌ FATAL ERROR LOADING DATASET:");
        eprintln!("   {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Serve(args) => cmd::serve::run(args, dataset).await,
        Commands::Report(args) => cmd::report::run(args, &dataset),
        Commands::Sites => {
            reports::print_site_options(&dataset);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
