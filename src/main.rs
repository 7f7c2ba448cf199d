use anyhow::Context;
use clap::Parser;
use gmaps_point::utils::{logger, validation::Validate};
use gmaps_point::{CliConfig, MapPointConverter, Resolution};

async fn run(config: &CliConfig, url: &str) -> anyhow::Result<()> {
    config.validate().context("invalid options")?;

    let converter =
        MapPointConverter::from_config(config).context("failed to set up the converter")?;

    let resolution = converter.resolve(url).await;
    match &resolution {
        Resolution::Resolved { source, .. } => {
            tracing::debug!("Resolved {} via {:?}", url, source);
        }
        Resolution::NotMapsUrl => {
            tracing::warn!("Not a recognised Google Maps URL: {}", url);
        }
        Resolution::Unresolvable {
            resolved_url,
            reason,
        } => {
            tracing::warn!("Could not resolve {} (via {}): {}", url, resolved_url, reason);
        }
    }

    let coords = resolution.coordinates();
    let json = coords.to_json().context("failed to encode result")?;
    println!("Result: {}", json);

    if config.link {
        if let Some(point) = coords.point() {
            println!("Link: {}", point.maps_link());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let Some(url) = config.url.clone() else {
        eprintln!("Usage: gmaps-point <google-maps-url>");
        std::process::exit(1);
    };

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config, &url).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
