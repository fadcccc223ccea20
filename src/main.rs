use cep_weather::utils::{logger, validation::Validate};
use cep_weather::{server, CliArgs};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_logger(args.verbose, args.log_json);

    tracing::info!("Starting cep-weather");

    let config = match args.load_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "Upstreams: viacep={} weather_api={}",
        config.viacep.base_url,
        config.weather_api.base_url
    );

    server::run(config).await?;
    Ok(())
}
