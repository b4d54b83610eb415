use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mpk_timetable::domain::Lane;
use mpk_timetable::fetcher::{FetcherConfig, ScheduleFetcher};
use mpk_timetable::mpk::{MpkClient, MpkConfig};

/// Fetch the full timetable of one MPK Kraków lane.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Lane number, e.g. 144
    lane: Lane,

    /// Service date as YYYY-MM-DD; defaults to today
    date: Option<NaiveDate>,

    /// Print a plain-text listing instead of JSON
    #[arg(long)]
    text: bool,

    /// Base URL of the timetable server
    #[arg(long, env = "MPK_BASE_URL")]
    base_url: Option<String>,

    /// Page language
    #[arg(long, env = "MPK_LANG")]
    lang: Option<String>,

    /// Maximum number of pages fetched at once
    #[arg(long, default_value_t = 4)]
    max_concurrent: usize,
}

impl Args {
    fn client_config(&self) -> MpkConfig {
        let mut config = MpkConfig::default();
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(lang) = &self.lang {
            config = config.with_lang(lang.as_str());
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let fetcher = ScheduleFetcher::new(
        MpkClient::new(args.client_config()),
        FetcherConfig::default().with_max_concurrent(args.max_concurrent),
    );

    let result = match fetcher.fetch_full_schedule(args.lane, date).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to fetch schedule: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.text {
        print!("{result}");
        return ExitCode::SUCCESS;
    }

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize schedule: {e}");
            ExitCode::FAILURE
        }
    }
}
