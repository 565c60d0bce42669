use core_config::tracing::{init_tracing, install_color_eyre};
use registration_api::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    if config.environment.is_production() {
        // The hosting platform embeds the library and calls `registration_api::hosted` itself.
        // Run as a binary, production mode only checks that the graph composes.
        registration_api::hosted(config)?;
        info!("Production mode: router composed for the hosting platform, no listener bound");
        return Ok(());
    }

    info!("Starting Registration API");
    registration_api::serve(config).await?;

    info!("Registration API shutdown complete");
    Ok(())
}
