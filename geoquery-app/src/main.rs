mod terminal;

use anyhow::anyhow;
use clap::Parser;
use geoquery::{
    animation::TokioFrameClock, constants, core::config::ConfigPreset, GeoQueryBuilder,
    HttpTransport, QueryController, SubmitOutcome,
};
use std::sync::{Arc, Mutex, PoisonError};
use terminal::{print_map, TerminalPage};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "geoquery", about = "Ask geospatial questions and see the answer on a map")]
struct Cli {
    /// Server hosting the query endpoint
    #[arg(long, env = "GEOQUERY_ENDPOINT", default_value = constants::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Jump to the map instead of animating the scroll
    #[arg(long)]
    instant: bool,

    /// Ask one question and exit; otherwise read questions from stdin
    query: Option<String>,
}

type Controller = QueryController<TerminalPage>;

async fn ask(controller: &Controller, query: &str) {
    controller
        .page()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .set_query(query);

    if controller.handle_key("Enter").await == Some(SubmitOutcome::Rendered) {
        print_map(
            &controller
                .renderer()
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    geoquery::init_logging();
    let cli = Cli::parse();

    let preset = if cli.instant {
        ConfigPreset::Instant
    } else {
        ConfigPreset::Default
    };
    let config = GeoQueryBuilder::from_preset(preset)
        .with_endpoint(cli.endpoint)
        .build()
        .map_err(|e| anyhow!(e))?;
    log::info!("sending queries to {}", config.query_url());

    let controller = QueryController::new(
        &config,
        Arc::new(Mutex::new(TerminalPage::new())),
        Arc::new(HttpTransport::from_config(&config)),
        Arc::new(TokioFrameClock::from_config(&config.scroll)),
    )
    .map_err(|e| anyhow!(e))?;

    if let Some(query) = cli.query {
        ask(&controller, &query).await;
        return Ok(());
    }

    println!("Ask about countries, cities, landmarks or any geographical feature. Ctrl-D quits.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        ask(&controller, &line).await;
    }
    Ok(())
}
