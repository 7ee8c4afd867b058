use std::process::ExitCode;

use clap::Parser;
use dioxus_logger::tracing::{self, Level};

use hotel_directory::{
    model::directory::{DirectoryCollection, UnknownCollection},
    server::{
        config::Config,
        content::DirectusClient,
        service::verify::{VerifyService, DEFAULT_COLLECTIONS},
        startup,
    },
};

#[derive(Parser)]
#[command(name = "verify-content")]
#[command(about = "Checks that a hotel's directory content can be read from Directus")]
struct Args {
    /// Hotel whose entries are fetched
    #[arg(long)]
    hotel_id: i64,

    /// Collection to check (repeatable); defaults to transportation and local_places
    #[arg(long = "collection", value_parser = parse_collection)]
    collections: Vec<DirectoryCollection>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_collection(value: &str) -> Result<DirectoryCollection, String> {
    value.parse().map_err(|e: UnknownCollection| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };
    let http_client = match startup::setup_reqwest_client(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            return ExitCode::from(2);
        }
    };

    let collections = if args.collections.is_empty() {
        DEFAULT_COLLECTIONS.to_vec()
    } else {
        args.collections
    };

    tracing::info!(
        "Verifying {} collection(s) for hotel {}",
        collections.len(),
        args.hotel_id
    );

    let client = DirectusClient::new(http_client, &config.directus);
    let result = VerifyService::new(&client)
        .run(
            args.hotel_id,
            &collections,
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .await;

    match result {
        Ok(report) if report.succeeded() => ExitCode::SUCCESS,
        Ok(report) => {
            eprintln!("{} of {} collection(s) failed", report.failed, report.checked);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
