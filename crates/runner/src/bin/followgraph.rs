//! followgraph — fetch a graph task at startup, solve it, deliver the outcome.
//!
//! Configuration comes from the environment (and `.env`), see
//! `followgraph_core::config`. Exits non-zero when the run fails.

use anyhow::{Context, Result};
use tracing::{error, info};

use followgraph_core::config::{load_dotenv, Config};
use followgraph_notify::{HttpTransport, ResilientSubmitter, RetryPolicy};
use followgraph_runner::{HttpTaskSource, TaskDispatcher};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let config = Config::from_env();
    config.log_summary();

    let source = HttpTaskSource::new(config.api.generate_url(), config.api.timeout())
        .context("failed to build task generation client")?;
    let transport =
        HttpTransport::new(config.api.timeout()).context("failed to build submission client")?;
    let submitter = ResilientSubmitter::new(
        Box::new(transport),
        RetryPolicy::from_config(&config.submit),
    );

    let mut dispatcher = TaskDispatcher::new(config.registration.clone(), Box::new(source), submitter);

    info!("followgraph starting");
    match dispatcher.run().await {
        Ok(report) => {
            info!(
                run_id = %report.run_id,
                problem = %report.problem,
                results = report.outcome.outcome.len(),
                attempts = report.delivery.attempts,
                "outcome delivered, exiting"
            );
            Ok(())
        }
        Err(e) => {
            let err = anyhow::Error::new(e).context("startup run failed");
            error!("{:#}", err);
            Err(err)
        }
    }
}
