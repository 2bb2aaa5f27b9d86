use std::time::Duration;

use clap::Parser;
use laundry_notify::client::MieleClient;
use laundry_notify::config::read_config_file;
use laundry_notify::error::Result;
use laundry_notify::monitor::Monitor;
use laundry_notify::notify::Pushover;
use laundry_notify::table::render_table;
use laundry_notify::watch::WatchSet;
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Watch shared laundry machines and get a push message when they finish.
#[derive(Debug, Clone, Parser)]
struct Args {
    /// `list` to print the current machine table, or a comma-separated
    /// list of machine ids to watch, e.g. `1,2,3`
    action: String,

    /// Config file
    #[arg(short, default_value = "config.json")]
    file: String,
}

fn init() {
    let filter = filter::Targets::new().with_target("laundry_notify", LevelFilter::DEBUG);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    if let Err(e) = run(args).await {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = read_config_file(&args.file)?;

    let client = MieleClient::new(config.miele.clone());

    // show the current fleet once, for `list` and before watching
    let machines = client.fetch_machines().await?;
    println!("{}", render_table(&machines));

    if args.action == "list" {
        return Ok(());
    }

    let watch = WatchSet::from_arg(&args.action);
    let notifier = Pushover::new(config.pushover.clone());
    let interval = Duration::from_secs(config.interval);

    Monitor::new(client, notifier, watch, interval).run().await
}
