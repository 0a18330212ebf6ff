//! diskcheck - Main Entry Point
//!
//! Loads configuration, builds the scenario catalogue and runs it against
//! the resource endpoint, then prints the report.

mod cli;
mod report;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use diskcheck_application::{
    ApplicationError, CatalogueOptions, ScenarioExecutor, catalogue,
};
use diskcheck_domain::Scenario;
use diskcheck_infrastructure::{
    ConfigError, DiskConfig, ReqwestDiskClient, TestRunner, folders_from_env, load_env_file,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if matches!(e.downcast_ref::<ConfigError>(), Some(ConfigError::MissingToken)) {
                eprintln!("Create a .env file and add: YANDEX_DISK_TOKEN=your_token_here");
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every selected scenario passed.
async fn run(cli: &Cli) -> anyhow::Result<bool> {
    if let Some(loaded) = load_env_file(cli.env_file.as_deref())? {
        debug!(path = %loaded.display(), "loaded env file");
    }

    let config = DiskConfig::from_env();

    if cli.list {
        // Listing sends nothing, so a missing token is not an error here.
        let options = match config {
            Ok(config) => config.catalogue_options(),
            Err(ConfigError::MissingToken) => folders_from_env()?,
            Err(e) => return Err(e.into()),
        };
        let scenarios = select(&options, cli.filter.as_deref())?;
        print!("{}", report::render_listing(&scenarios));
        return Ok(true);
    }

    let mut config = config?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }

    let scenarios = select(&config.catalogue_options(), cli.filter.as_deref())?;
    info!(
        base_url = %config.base_url,
        scenarios = scenarios.len(),
        "starting diskcheck v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = ReqwestDiskClient::new(&config).context("failed to build HTTP client")?;
    let executor = ScenarioExecutor::new(Arc::new(client), TestRunner::new());
    let suite = executor.run_suite(&scenarios).await;

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_text(&suite)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&suite).context("failed to encode report")?
        ),
    }

    Ok(suite.all_passed())
}

fn select(
    options: &CatalogueOptions,
    filter: Option<&str>,
) -> Result<Vec<Scenario>, ApplicationError> {
    let scenarios = catalogue(options)?;
    let Some(pattern) = filter else {
        return Ok(scenarios);
    };

    let selected: Vec<Scenario> = scenarios
        .into_iter()
        .filter(|s| s.matches_filter(pattern))
        .collect();
    if selected.is_empty() {
        return Err(ApplicationError::NoScenarios(pattern.to_string()));
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_without_filter_keeps_everything() {
        let scenarios = select(&CatalogueOptions::default(), None).unwrap_or_default();
        assert_eq!(scenarios.len(), 10);
    }

    #[test]
    fn test_select_filters_by_id_or_title() {
        let scenarios = select(&CatalogueOptions::default(), Some("LIFECYCLE")).unwrap_or_default();
        let ids: Vec<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["test_full_folder_lifecycle"]);
    }

    #[test]
    fn test_select_without_match_is_an_error() {
        let result = select(&CatalogueOptions::default(), Some("no_such_scenario"));
        assert!(matches!(result, Err(ApplicationError::NoScenarios(p)) if p == "no_such_scenario"));
    }
}
