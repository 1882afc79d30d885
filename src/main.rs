use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recruit_insights::locale::Phrase;
use recruit_insights::{report, source, weekly, Locale};

#[derive(Parser)]
#[command(name = "recruit-insights")]
#[command(about = "Dashboard statistics for the recruitment admin panel", long_about = None)]
struct Cli {
    /// Directory holding users.json, jobs.json, clients.json and applications.json
    #[arg(long, global = true, env = "RECRUIT_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
    /// Label language, `de` or `en`
    #[arg(long, global = true, env = "RECRUIT_LOCALE", default_value = "en")]
    locale: Locale,
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print widget totals and the weekly applications trend
    Summary,
    /// Print the weekly applications trend as JSON
    Weekly,
    /// Generate a markdown dashboard report
    Report {
        #[arg(long, default_value = "dashboard.md")]
        out: PathBuf,
    },
    /// Append applications from a CSV export
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "recruit_insights=debug"
    } else {
        "recruit_insights=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(data_dir = %cli.data_dir.display(), locale = %cli.locale, "starting");

    match cli.command {
        Commands::Summary => {
            let data = source::load_dashboard_or_default(&cli.data_dir).await;
            let stats = data.stats();
            for (title, value) in stats.widgets(cli.locale) {
                println!("{title:<20} {value}");
            }

            let series = weekly::aggregate_weekly(&data.applications, cli.locale);
            if series.is_empty() {
                println!("{}", cli.locale.no_data_message());
                return Ok(());
            }

            println!("{}:", cli.locale.text(Phrase::ApplicationsTrend));
            for point in &series {
                println!("- {}: {}", point.label, point.applications);
            }
        }
        Commands::Weekly => {
            let data = source::load_dashboard_or_default(&cli.data_dir).await;
            let series = weekly::aggregate_weekly(&data.applications, cli.locale);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        Commands::Report { out } => {
            let data = source::load_dashboard_or_default(&cli.data_dir).await;
            let report = report::build_report(&data, cli.locale);
            tokio::fs::write(&out, report)
                .await
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Import { csv } => {
            let inserted = source::import_csv(&cli.data_dir, &csv)
                .await
                .with_context(|| format!("failed to import {}", csv.display()))?;
            println!("Inserted {inserted} applications from {}.", csv.display());
        }
    }

    Ok(())
}
