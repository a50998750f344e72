//! `quarry serve` — Start the HTTP gateway with the bundled chat UI.

use quarry_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config =
        AppConfig::from_env().map_err(|e| format!("Failed to load configuration: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    let pipeline = super::build_pipeline(&config)?;

    println!(
        "Quarry listening on http://{}:{}",
        config.gateway.host, config.gateway.port
    );
    quarry_gateway::start(&config.gateway, pipeline).await
}
